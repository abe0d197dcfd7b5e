//! Cart Action Controller
//!
//! Turns user actions into repository calls and guards the destructive ones
//! against an empty cart. Actions return an [`ActionOutcome`] carrying the
//! user-facing message; showing it is left to the caller, after the modal
//! has been re-rendered.

use crate::cart::{aggregate, CartRepository, CartView};
use crate::store::KeyValueStore;

/// Fixed user-facing messages
pub mod messages {
    pub const ITEM_ADDED: &str = "Item added to the cart";
    pub const CART_CLEARED: &str = "Cart cleared";
    pub const NOTHING_TO_CLEAR: &str = "No items to clear.";
    pub const ORDER_PLACED: &str = "Thank you for your order";
    pub const CART_EMPTY: &str = "Cart is empty.";
}

/// Cart modal surface
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// Open and showing the view computed on entry or after the last mutation
    Open(CartView),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }
}

/// What a cart action actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Added,
    Cleared,
    OrderPlaced,
    /// Clear guard hit: the cart was already empty, nothing changed
    NothingToClear,
    /// Checkout guard hit: the cart was already empty, nothing changed
    CartEmpty,
}

impl ActionOutcome {
    /// Message shown to the user for this outcome
    pub fn message(&self) -> &'static str {
        match self {
            ActionOutcome::Added => messages::ITEM_ADDED,
            ActionOutcome::Cleared => messages::CART_CLEARED,
            ActionOutcome::OrderPlaced => messages::ORDER_PLACED,
            ActionOutcome::NothingToClear => messages::NOTHING_TO_CLEAR,
            ActionOutcome::CartEmpty => messages::CART_EMPTY,
        }
    }

    /// True when the action left the cart untouched
    pub fn is_guarded(&self) -> bool {
        matches!(self, ActionOutcome::NothingToClear | ActionOutcome::CartEmpty)
    }
}

pub struct CartController<S> {
    repo: CartRepository<S>,
    modal: ModalState,
}

impl<S: KeyValueStore> CartController<S> {
    pub fn new(repo: CartRepository<S>) -> Self {
        Self {
            repo,
            modal: ModalState::Closed,
        }
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    #[cfg(test)]
    pub fn repository(&self) -> &CartRepository<S> {
        &self.repo
    }

    /// Fresh aggregation of the persisted cart
    pub fn current_view(&self) -> CartView {
        aggregate(&self.repo.list_items())
    }

    /// closed → open. Re-reads the cart on every entry.
    pub fn open_cart_modal(&mut self) {
        self.modal = ModalState::Open(self.current_view());
    }

    pub fn close_cart_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Always succeeds from the user's point of view, whatever the store did
    /// with the write
    pub fn add_to_cart(&mut self, name: &str) -> ActionOutcome {
        self.repo.add_item(name);
        log::debug!("added {:?} to cart", name);
        self.refresh_if_open();
        ActionOutcome::Added
    }

    pub fn clear_cart(&mut self) -> ActionOutcome {
        self.empty_cart(ActionOutcome::Cleared, ActionOutcome::NothingToClear)
    }

    /// Same mutation as [`Self::clear_cart`]; only the outcome differs
    pub fn process_order(&mut self) -> ActionOutcome {
        self.empty_cart(ActionOutcome::OrderPlaced, ActionOutcome::CartEmpty)
    }

    fn empty_cart(&mut self, done: ActionOutcome, nothing: ActionOutcome) -> ActionOutcome {
        let line_items = self.repo.list_items().len();
        if line_items == 0 {
            return nothing;
        }

        self.repo.clear();
        match done {
            ActionOutcome::OrderPlaced => log::info!("order placed with {} line items", line_items),
            _ => log::info!("cart cleared ({} line items)", line_items),
        }
        self.refresh_if_open();
        done
    }

    fn refresh_if_open(&mut self) {
        if self.modal.is_open() {
            self.modal = ModalState::Open(self.current_view());
        }
    }
}
