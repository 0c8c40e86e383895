//! Minidocs UI entry point for WASM.

#![no_main]

use leptos::prelude::*;
use minidocs_core::SiteConfig;
use minidocs_ui::{App, LoggingConfig, init_logging, site};
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point for the WASM application.
/// This function is called automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();

    let (config, load_error) = match site::load() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    init_logging(&LoggingConfig::for_site(&config));
    if let Some(err) = load_error {
        tracing::warn!(%err, "Invalid site configuration, using defaults");
    }
    tracing::info!(title = %config.title, "Starting documentation site");

    // Remove the loading placeholder
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(loading) = document.get_element_by_id("loading")
    {
        loading.remove();
    }

    mount_to_body(move || view! { <App config=config /> });
}
