//! Gallery cart wiring: add-to-cart triggers, view/clear/process controls,
//! and the modal.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use super::{bind, control_label, Query};
use crate::components::{CartModal, CartToolbar, MissingControls};
use crate::config::PageConfig;
use crate::context::CartContext;
use crate::store::{BrowserStore, KeyValueStore, MemoryStore};

/// How a trigger finds the name of the product it belongs to
#[derive(Debug, Clone)]
struct ProductLookup {
    containers: Vec<String>,
    title: String,
    fallback: String,
}

impl ProductLookup {
    fn from_config(config: &PageConfig) -> Self {
        Self {
            containers: config.product_container_selectors.clone(),
            title: config.product_title_selector.clone(),
            fallback: config.fallback_product_name.clone(),
        }
    }

    fn name_for(&self, trigger: &Element) -> String {
        let title = self
            .containers
            .iter()
            .find_map(|sel| trigger.closest(sel).ok().flatten())
            .and_then(|product| product.query(&self.title))
            .and_then(|title| title.text_content());
        product_name_or(title, &self.fallback)
    }
}

/// Controls the page already provides, resolved once
struct CartControls {
    view: Option<Element>,
    clear: Option<Element>,
    process: Option<Element>,
}

impl CartControls {
    fn resolve(document: &Document, config: &PageConfig) -> Self {
        Self {
            view: document.query(&config.view_control),
            clear: document.query(&config.clear_control),
            process: document.query(&config.process_control),
        }
    }

    fn missing(&self) -> MissingControls {
        MissingControls::from_present(
            self.view.as_ref().map(|_| ()),
            self.clear.as_ref().map(|_| ()),
            self.process.as_ref().map(|_| ()),
        )
    }
}

pub fn wire_cart(document: &Document, config: &PageConfig) {
    let triggers: Vec<Element> = document
        .query_all(&config.trigger_selector)
        .into_iter()
        .filter(|el| is_add_trigger(&control_label(el), &config.add_trigger_label))
        .collect();
    if triggers.is_empty() {
        log::debug!("no add-to-cart triggers, skipping cart");
        return;
    }

    let store: Box<dyn KeyValueStore> = match BrowserStore::session() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("cart running without storage: {}", e);
            Box::new(MemoryStore::disabled())
        }
    };
    let ctx = CartContext::new(store, &config.cart_key);

    let lookup = ProductLookup::from_config(config);
    for trigger in &triggers {
        let el = trigger.clone();
        let lookup = lookup.clone();
        bind(trigger, "click", move |_| ctx.add(&lookup.name_for(&el)));
    }
    log::info!("wired {} add-to-cart triggers", triggers.len());

    if let Some(body) = document.body() {
        mount_to(body, move || view! { <CartModal ctx=ctx /> }).forget();
    }

    let controls = CartControls::resolve(document, config);
    let missing = controls.missing();
    if missing.any() {
        match insert_toolbar_host(document, config) {
            Some(host) => mount_to(host, move || view! { <CartToolbar ctx=ctx missing=missing /> }).forget(),
            None => log::warn!("no place to insert the cart toolbar"),
        }
    }

    if let Some(view_btn) = &controls.view {
        bind(view_btn, "click", move |_| ctx.open());
    }
    if let Some(clear_btn) = &controls.clear {
        bind(clear_btn, "click", move |_| ctx.clear());
    }
    if let Some(process_btn) = &controls.process {
        bind(process_btn, "click", move |_| ctx.process());
    }
}

/// Where the toolbar host is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToolbarPlacement {
    /// Directly before the product grid, inside the grid's own parent
    BeforeGrid,
    /// After the first element child of main, or of body when there is no main
    AfterFirstChild,
    /// Very top of body
    TopOfBody,
}

fn toolbar_placement(has_grid: bool, container_has_child: bool) -> ToolbarPlacement {
    match (has_grid, container_has_child) {
        (true, _) => ToolbarPlacement::BeforeGrid,
        (false, true) => ToolbarPlacement::AfterFirstChild,
        (false, false) => ToolbarPlacement::TopOfBody,
    }
}

/// Insert an empty toolbar host and return it
fn insert_toolbar_host(document: &Document, config: &PageConfig) -> Option<HtmlElement> {
    let host = document.create_element("div").ok()?;
    let body: Element = document.body()?.into();
    let container = document.query(&config.main_selector).unwrap_or_else(|| body.clone());
    let grid = document.query(&config.product_grid_selector);
    let first = container.first_element_child();

    let inserted = match toolbar_placement(grid.is_some(), first.is_some()) {
        ToolbarPlacement::BeforeGrid => grid.and_then(|grid| {
            let grid: Node = grid.into();
            grid.parent_node().map(|parent| parent.insert_before(&host, Some(&grid)))
        }),
        ToolbarPlacement::AfterFirstChild => first.map(|first| container.insert_before(&host, first.next_sibling().as_ref())),
        ToolbarPlacement::TopOfBody => Some(body.insert_before(&host, body.first_child().as_ref())),
    };
    match inserted {
        Some(Ok(_)) => host.dyn_into::<HtmlElement>().ok(),
        Some(Err(e)) => {
            log::warn!("toolbar insert failed: {:?}", e);
            None
        }
        None => None,
    }
}

/// Case-insensitive label match for add-to-cart triggers
fn is_add_trigger(label: &str, phrase: &str) -> bool {
    label.to_lowercase().contains(&phrase.to_lowercase())
}

fn product_name_or(title: Option<String>, fallback: &str) -> String {
    match title {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trigger_matching() {
        assert!(is_add_trigger("  Add to Cart ", "add to cart"));
        assert!(is_add_trigger("ADD TO CART now", "add to cart"));
        assert!(!is_add_trigger("View Cart", "add to cart"));
    }

    #[test]
    fn test_product_name_fallback() {
        assert_eq!(product_name_or(Some("  The Hobbit\n".to_string()), "Item"), "The Hobbit");
        assert_eq!(product_name_or(Some("   ".to_string()), "Item"), "Item");
        assert_eq!(product_name_or(None, "Item"), "Item");
    }

    #[test]
    fn test_toolbar_goes_before_grid_when_present() {
        assert_eq!(toolbar_placement(true, true), ToolbarPlacement::BeforeGrid);
        assert_eq!(toolbar_placement(true, false), ToolbarPlacement::BeforeGrid);
    }

    #[test]
    fn test_toolbar_follows_first_child_without_grid() {
        // main, or body standing in for it, keeps its header above the toolbar
        assert_eq!(toolbar_placement(false, true), ToolbarPlacement::AfterFirstChild);
    }

    #[test]
    fn test_toolbar_tops_body_when_container_is_bare() {
        assert_eq!(toolbar_placement(false, false), ToolbarPlacement::TopOfBody);
    }
}
