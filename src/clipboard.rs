//! Clipboard
//!
//! Wrapper for the async Clipboard API.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::ClipboardError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Write `text` to the system clipboard
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    clipboard_write_text(text)
        .await
        .map(|_| ())
        .map_err(describe_rejection)
}

/// A missing `navigator.clipboard` surfaces as a TypeError from the binding
fn describe_rejection(err: JsValue) -> ClipboardError {
    if err.is_instance_of::<js_sys::TypeError>() {
        return ClipboardError::Unavailable;
    }
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown error".to_string());
    ClipboardError::Rejected(message)
}
