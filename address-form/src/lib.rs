//! Address Form - Leptos Frontend
//!
//! Single-page address collection: DaData autocomplete, then one webhook delivery.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Address form starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder from index.html.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, loading screen left in place");
        return;
    };

    match document.get_element_by_id("loading") {
        Some(element) => {
            if let Err(e) = element.class_list().add_1("hidden") {
                log::warn!("Failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
