//! Cart Layer
//!
//! Session-scoped cart persistence and the aggregated view derived from it.

mod aggregate;
mod repository;


pub use aggregate::{aggregate, CartRow, CartView};
pub use repository::{CartRepository, DEFAULT_CART_KEY};
