//! Gallery Cart Entry Point
//!
//! Enhances the host page once its DOM is ready.

mod cart;
mod components;
mod config;
mod context;
mod controller;
mod feedback;
mod forms;
mod models;
mod page;
mod store;

use log::LevelFilter;

use config::PageConfig;

fn main() {
    match rolling_logger::init(LevelFilter::Trace) {
        // a panic report comes with the log lines that led up to it
        Ok(logger) => std::panic::set_hook(Box::new(move |info| {
            console_error_panic_hook::hook(info);
            logger.dump();
        })),
        Err(e) => {
            console_error_panic_hook::set_once();
            web_sys::console::error_1(&format!("[gallery-cart] logger init failed: {}", e).into());
        }
    }
    log::set_max_level(LevelFilter::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let ready_doc = document.clone();
    page::on_dom_ready(&document, move || {
        let config = PageConfig::from_document(&ready_doc);
        log::set_max_level(config.level_filter());
        page::wire(&ready_doc, &config);
    });
}
