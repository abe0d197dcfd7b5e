//! Cart Repository
//!
//! Owns the cart line items stored under a single key in the ephemeral store.
//! Every call re-reads the store; nothing is cached between actions.

use crate::models::{CartItem, CartSnapshot};
use crate::store::{self, KeyValueStore};

/// Storage key used when the page config does not override it
pub const DEFAULT_CART_KEY: &str = "cartItems";

pub struct CartRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    #[cfg(test)]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append one line item and write the whole snapshot back.
    ///
    /// A failed write leaves the stored cart untouched.
    pub fn add_item(&self, name: &str) {
        let mut items = self.list_items();
        items.push(CartItem::new(name));
        if let Err(e) = store::write_list(&self.store, &self.key, &items) {
            log::warn!("cart write skipped for {:?}: {}", name, e);
        }
    }

    /// Current persisted snapshot.
    ///
    /// Unreadable storage and malformed values both read as an empty cart.
    /// A malformed value stays in place until the next successful write.
    pub fn list_items(&self) -> CartSnapshot {
        match store::read_list(&self.store, &self.key) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("cart read degraded to empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Remove the persisted snapshot entirely
    pub fn clear(&self) {
        if let Err(e) = store::remove(&self.store, &self.key) {
            log::warn!("cart clear skipped: {}", e);
        }
    }
}
