//! Digital Rebel portfolio
//!
//! Client-side rendered Leptos app. The effect and navigation logic lives in
//! `lib-core`; this crate binds it to the DOM.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
pub mod utils;

use app::App;
use utils::constants::LOADING_SCREEN_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Digital Rebel portfolio starting");

    remove_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Drop the static loading overlay shipped in `index.html`.
fn remove_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document, loading screen left in place");
        return;
    };
    match document.get_element_by_id(LOADING_SCREEN_ID) {
        Some(element) => element.remove(),
        None => log::debug!("No #{} element to remove", LOADING_SCREEN_ID),
    }
}
