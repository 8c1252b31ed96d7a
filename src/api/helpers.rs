//! Shared helpers for the WASM API
//!
//! Serialization of records into JS values and reading the `note` property
//! of JS objects handed back to us.

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Read `value.note` when `value` is a JS object, `None` otherwise
pub fn note_property(value: &JsValue) -> Option<JsValue> {
    if !value.is_object() {
        return None;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("note")).ok()
}
