//! Page Configuration
//!
//! Storage keys and the selectors used to find controls on the host page.
//! A page may override any field with a JSON block:
//!
//! ```html
//! <script type="application/json" id="gallery-cart-config">
//!   { "view_control": "#open-basket" }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;

use crate::cart::DEFAULT_CART_KEY;

/// Element id of the optional JSON config block
pub const CONFIG_ELEMENT_ID: &str = "gallery-cart-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Ephemeral store key holding the cart
    pub cart_key: String,
    /// Durable store key holding the last contact submission
    pub contact_key: String,

    /// Candidate elements for add-to-cart triggers
    pub trigger_selector: String,
    /// Case-insensitive text a candidate must contain to be a trigger
    pub add_trigger_label: String,
    /// Ancestor selectors tried in order to find a trigger's product
    pub product_container_selectors: Vec<String>,
    pub product_title_selector: String,
    pub fallback_product_name: String,

    pub view_control: String,
    pub clear_control: String,
    pub process_control: String,
    /// Synthesized toolbar goes right before this element when present
    pub product_grid_selector: String,
    pub main_selector: String,

    pub subscribe_form_selector: String,
    /// First match wins
    pub contact_form_selectors: Vec<String>,

    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            cart_key: DEFAULT_CART_KEY.to_string(),
            contact_key: "customOrder".to_string(),
            trigger_selector: r#"button, [role="button"]"#.to_string(),
            add_trigger_label: "add to cart".to_string(),
            product_container_selectors: vec![".product".to_string(), "[data-product], article".to_string()],
            product_title_selector: "h4, .title, .product-title".to_string(),
            fallback_product_name: "Item".to_string(),
            view_control: "#view-cart, .view-cart".to_string(),
            clear_control: "#clear-cart, .clear-cart".to_string(),
            process_control: "#process-order, .process-order".to_string(),
            product_grid_selector: ".product-grid, .products, .gallery-grid".to_string(),
            main_selector: "main".to_string(),
            subscribe_form_selector: "footer form, .site-footer form".to_string(),
            contact_form_selectors: vec![
                "form#contact-form".to_string(),
                "section#contact form".to_string(),
                r#"form[aria-label*="contact" i]"#.to_string(),
                "main form".to_string(),
            ],
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the page's config block, falling back to defaults when it is
    /// missing or invalid.
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    /// Parsed `log_level`, `Info` when unrecognised
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_conventions() {
        let config = PageConfig::default();
        assert_eq!(config.cart_key, "cartItems");
        assert_eq!(config.contact_key, "customOrder");
        assert_eq!(config.fallback_product_name, "Item");
        assert_eq!(config.contact_form_selectors.len(), 4);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PageConfig::from_json(r##"{ "view_control": "#open-basket", "log_level": "debug" }"##).unwrap();
        assert_eq!(config.view_control, "#open-basket");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.clear_control, PageConfig::default().clear_control);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(PageConfig::from_json("{ view_control: ").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = PageConfig {
            log_level: "loud".to_string(),
            ..PageConfig::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
