//! UI Components
//!
//! Leptos components mounted into the host page.

mod cart_modal;
mod cart_toolbar;

pub use cart_modal::CartModal;
pub use cart_toolbar::{CartToolbar, MissingControls};
