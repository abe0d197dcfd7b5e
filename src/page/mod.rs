//! Page Wiring
//!
//! Finds controls on the host page once and binds them to the cart and
//! form handlers.

mod cart;
mod forms;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget};

use crate::config::PageConfig;

/// Wire every feature the current page supports
pub fn wire(document: &Document, config: &PageConfig) {
    forms::wire_subscribe(document, config);
    cart::wire_cart(document, config);
    forms::wire_contact(document, config);
}

/// Run `f` once the DOM is parsed
pub fn on_dom_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut pending = Some(f);
    bind(document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}

/// Attach a listener for the lifetime of the page
pub(crate) fn bind<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("could not bind {} listener: {:?}", event, e);
    }
    cb.forget();
}

/// Selector lookups that treat invalid selectors as "no match"
pub(crate) trait Query {
    fn query(&self, selector: &str) -> Option<Element>;
    fn query_all(&self, selector: &str) -> Vec<Element>;
}

impl Query for Document {
    fn query(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector)
            .inspect_err(|e| log::warn!("bad selector {:?}: {:?}", selector, e))
            .ok()
            .flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                log::warn!("bad selector {:?}: {:?}", selector, e);
                Vec::new()
            }
        }
    }
}

impl Query for Element {
    fn query(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector)
            .inspect_err(|e| log::warn!("bad selector {:?}: {:?}", selector, e))
            .ok()
            .flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                log::warn!("bad selector {:?}: {:?}", selector, e);
                Vec::new()
            }
        }
    }
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Visible label of a control: its text, or `value` for inputs
pub(crate) fn control_label(el: &Element) -> String {
    let text = el.text_content().unwrap_or_default();
    if !text.trim().is_empty() {
        return text;
    }
    el.dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Trimmed value of a form field, `None` for elements without a value
pub(crate) fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value().trim().to_string());
    }
    el.dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|area| area.value().trim().to_string())
}
