//! Frontend Models
//!
//! Records persisted in browser storage.

use serde::{Deserialize, Serialize};

/// One unit of a product in the cart. Quantity is encoded by repetition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
}

impl CartItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Cart contents in add order
pub type CartSnapshot = Vec<CartItem>;

/// Contact form submission kept in the durable store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_wire_shape() {
        let json = serde_json::to_string(&vec![CartItem::new("Book A")]).unwrap();
        assert_eq!(json, r#"[{"name":"Book A"}]"#);
    }

    #[test]
    fn test_contact_message_wire_shape() {
        let msg = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            timestamp: 1_700_000_000_000,
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["timestamp"], 1_700_000_000_000u64);
    }
}
