use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod components;
mod constants;
mod dom_utils;
mod i18n;
mod messages;
mod models;
mod network;
mod state;
mod storage;
mod toast;
mod ui;
mod update;
mod utils;
mod views;

#[cfg(test)]
mod state_invariants_tests;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // The language preference survives reloads; everything else is fetched
    // from the backend below.
    let language = storage::load_language();
    state::APP_STATE.with(|state| state.borrow_mut().language = language);

    ui::setup::build_page(&document)?;
    ui::events::attach(&document)?;
    views::apply_translations(&document);

    // Initial load of all dynamic collections, concurrently.
    spawn_local(network::api_client::refresh_dynamic_content());

    Ok(())
}
