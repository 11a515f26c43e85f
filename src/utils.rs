//! Utility helpers shared across the WASM frontend.

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

pub fn window() -> Window {
    web_sys::window().expect("no global window exists")
}

pub fn document() -> Document {
    window().document().expect("should have a document on window")
}

/// Native browser confirm dialog. An unavailable dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Best-effort human-readable text for a raw JS error value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
