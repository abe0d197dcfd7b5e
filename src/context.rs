//! Cart Context
//!
//! The single cart controller for a page plus the signal the modal renders
//! from. Built once at startup and captured by every handler.

use std::time::Duration;

use leptos::prelude::*;

use crate::cart::CartRepository;
use crate::controller::{ActionOutcome, CartController, ModalState};
use crate::feedback::{AlertFeedback, Feedback};
use crate::store::KeyValueStore;

pub type PageController = CartController<Box<dyn KeyValueStore>>;

#[derive(Clone, Copy)]
pub struct CartContext {
    /// Owns browser handles, so it stays in local storage
    controller: StoredValue<PageController, LocalStorage>,
    /// Mirror of the controller's modal state - read
    pub modal: ReadSignal<ModalState>,
    /// Mirror of the controller's modal state - write
    set_modal: WriteSignal<ModalState>,
}

impl CartContext {
    pub fn new(store: Box<dyn KeyValueStore>, cart_key: &str) -> Self {
        let controller = CartController::new(CartRepository::new(store, cart_key));
        let (modal, set_modal) = signal(ModalState::Closed);
        Self {
            controller: StoredValue::new_local(controller),
            modal,
            set_modal,
        }
    }

    /// Run an action, then publish the resulting modal state
    fn dispatch<R>(&self, action: impl FnOnce(&mut PageController) -> R) -> Option<R> {
        let result = self.controller.try_update_value(action);
        let state = self.controller.with_value(|c| c.modal().clone());
        self.set_modal.set(state);
        result
    }

    /// Run a cart action and alert its message once the modal has re-rendered.
    ///
    /// `window.alert` blocks, so it is deferred to a later task; the render
    /// effects queued by `set_modal` run first.
    fn dispatch_with_feedback(&self, action: impl FnOnce(&mut PageController) -> ActionOutcome) {
        let Some(outcome) = self.dispatch(action) else {
            return;
        };
        if outcome.is_guarded() {
            log::debug!("{:?}: cart already empty", outcome);
        }
        set_timeout(move || AlertFeedback.notify(outcome.message()), Duration::ZERO);
    }

    pub fn open(&self) {
        self.dispatch(|c| c.open_cart_modal());
    }

    pub fn close(&self) {
        self.dispatch(|c| c.close_cart_modal());
    }

    pub fn add(&self, name: &str) {
        self.dispatch_with_feedback(|c| c.add_to_cart(name));
    }

    pub fn clear(&self) {
        self.dispatch_with_feedback(|c| c.clear_cart());
    }

    pub fn process(&self) {
        self.dispatch_with_feedback(|c| c.process_order());
    }
}
