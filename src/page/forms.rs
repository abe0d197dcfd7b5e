//! Subscribe and contact form wiring.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use super::{bind, control_label, field_value, Query};
use crate::config::PageConfig;
use crate::feedback::{AlertFeedback, Feedback};
use crate::forms::{contact_thanks, mentions_subscribe, save_contact_message, validate_subscriber_email, SUBSCRIBED};
use crate::models::ContactMessage;
use crate::store::BrowserStore;

const SUBSCRIBE_BUTTON: &str = r#"button, input[type="submit"], [role="button"]"#;
/// Buttons inside the contact form that send it, including plain
/// `type="button"` primaries that never fire a native submit
const CONTACT_SUBMIT: &str = r#"button[type="submit"], input[type="submit"], button:not([type]), .btn-primary"#;
const NAME_FIELDS: &[&str] = &[r#"[name="name"]"#, "#name", r#"input[name="fullname"]"#, r#"input[name="customer"]"#];
const EMAIL_FIELDS: &[&str] = &[r#"[name="email"]"#, "#email", r#"input[type="email"]"#];
const MESSAGE_FIELDS: &[&str] = &[r#"[name="message"]"#, "#message", r#"textarea[name="message"]"#, "textarea"];

// ========================
// Subscribe
// ========================

pub fn wire_subscribe(document: &Document, config: &PageConfig) {
    for form in document.query_all(&config.subscribe_form_selector) {
        if !is_subscribe_form(&form) {
            continue;
        }
        let Some(button) = form.query(SUBSCRIBE_BUTTON) else {
            continue;
        };
        bind(&button, "click", move |ev| {
            ev.prevent_default();
            submit_subscribe(&form);
        });
    }
}

fn is_subscribe_form(form: &Element) -> bool {
    if mentions_subscribe(&form.get_attribute("aria-label").unwrap_or_default()) {
        return true;
    }
    form.query(r#"button, [type="submit"], [role="button"]"#)
        .map(|button| mentions_subscribe(&control_label(&button)))
        .unwrap_or(false)
}

fn submit_subscribe(form: &Element) {
    let email = form
        .query(r#"input[type="email"]"#)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = email {
        if !input.check_validity() {
            input.report_validity();
            return;
        }
        if let Err(e) = validate_subscriber_email(&input.value()) {
            AlertFeedback.notify(&e.to_string());
            let _ = input.focus();
            return;
        }
    }
    AlertFeedback.notify(SUBSCRIBED);
}

// ========================
// Contact
// ========================

pub fn wire_contact(document: &Document, config: &PageConfig) {
    let Some(form) = config
        .contact_form_selectors
        .iter()
        .find_map(|sel| document.query(sel))
    else {
        return;
    };
    if mentions_subscribe(&form.get_attribute("aria-label").unwrap_or_default()) {
        return;
    }
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        return;
    };

    // Enter in a field submits without a button click
    let contact_key = config.contact_key.clone();
    let target = form.clone();
    let on_submit = form.clone();
    bind(&target, "submit", move |ev| {
        ev.prevent_default();
        submit_contact(&on_submit, &contact_key);
    });

    // cancelling the click also cancels the native submit it would trigger,
    // so a message is saved once per click
    let Some(button) = form.query(CONTACT_SUBMIT) else {
        return;
    };
    let contact_key = config.contact_key.clone();
    bind(&button, "click", move |ev| {
        ev.prevent_default();
        submit_contact(&form, &contact_key);
    });
}

fn submit_contact(form: &HtmlFormElement, contact_key: &str) {
    if !form.check_validity() {
        form.report_validity();
        return;
    }

    let message = ContactMessage {
        name: first_field_value(form, NAME_FIELDS),
        email: first_field_value(form, EMAIL_FIELDS),
        message: first_field_value(form, MESSAGE_FIELDS),
        timestamp: js_sys::Date::now() as u64,
    };
    match BrowserStore::local() {
        Ok(store) => save_contact_message(&store, contact_key, &message),
        Err(e) => log::warn!("contact message not saved: {}", e),
    }
    AlertFeedback.notify(&contact_thanks(&message.name));
}

/// Value of the first selector that matches a field, empty when none do
fn first_field_value(form: &Element, selectors: &[&str]) -> String {
    selectors
        .iter()
        .filter_map(|sel| form.query(sel))
        .find_map(|el| field_value(&el))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_submit_covers_button_kinds() {
        let parts: Vec<&str> = CONTACT_SUBMIT.split(',').map(str::trim).collect();
        assert_eq!(
            parts,
            vec![r#"button[type="submit"]"#, r#"input[type="submit"]"#, "button:not([type])", ".btn-primary"]
        );
    }

    #[test]
    fn test_field_selectors_prefer_name_attribute() {
        for fields in [NAME_FIELDS, EMAIL_FIELDS, MESSAGE_FIELDS] {
            assert!(fields[0].starts_with("[name="), "{:?}", fields);
        }
    }
}
