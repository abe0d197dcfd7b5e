//! Form Handlers
//!
//! Subscribe validation and contact-form persistence. DOM wiring lives in
//! `page::forms`; everything here is plain data.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ContactMessage;
use crate::store::{self, KeyValueStore};

pub const SUBSCRIBED: &str = "Thank you for subscribing.";

static SIMPLE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Invalid user input; the submission is aborted and nothing is stored
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Check an address against the `local@domain.tld` shape. Returns it trimmed.
pub fn validate_subscriber_email(value: &str) -> Result<&str, FormError> {
    let trimmed = value.trim();
    if SIMPLE_EMAIL.is_match(trimmed) {
        Ok(trimmed)
    } else {
        Err(FormError::InvalidEmail)
    }
}

/// Case-insensitive "subscribe" match on a label or button text
pub fn mentions_subscribe(text: &str) -> bool {
    text.to_lowercase().contains("subscribe")
}

/// Alert shown after a contact submission
pub fn contact_thanks(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Thank you for your message".to_string()
    } else {
        format!("Thank you for your message, {}", name)
    }
}

/// Persist the latest contact submission. Storage failures are logged and
/// otherwise ignored.
pub fn save_contact_message<S: KeyValueStore + ?Sized>(store: &S, key: &str, message: &ContactMessage) {
    if let Err(e) = store::write_json(store, key, message) {
        log::warn!("contact message not saved: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_valid_emails() {
        assert_eq!(validate_subscriber_email("  reader@books.com "), Ok("reader@books.com"));
        assert!(validate_subscriber_email("first.last+tag@mail.example.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        for bad in ["", "reader", "reader@books", "@books.com", "reader@.com x", "two words@books.com"] {
            assert_eq!(validate_subscriber_email(bad), Err(FormError::InvalidEmail), "{bad:?}");
        }
    }

    #[test]
    fn test_invalid_email_message() {
        assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_mentions_subscribe() {
        assert!(mentions_subscribe("Newsletter SUBSCRIBE form"));
        assert!(!mentions_subscribe("Contact us"));
    }

    #[test]
    fn test_contact_thanks() {
        assert_eq!(contact_thanks("  Ada Lovelace "), "Thank you for your message, Ada Lovelace");
        assert_eq!(contact_thanks("   "), "Thank you for your message");
    }

    #[test]
    fn test_save_contact_message() {
        let store = MemoryStore::new();
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Custom binding, please".to_string(),
            timestamp: 42,
        };
        save_contact_message(&store, "customOrder", &message);

        let raw = store.get("customOrder").unwrap().unwrap();
        let saved: ContactMessage = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved, message);
    }

    #[test]
    fn test_save_contact_message_ignores_storage_failure() {
        let store = MemoryStore::disabled();
        let message = ContactMessage {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            timestamp: 0,
        };
        save_contact_message(&store, "customOrder", &message);
    }
}
