//! URL fragment access
//!
//! The fragment is the only durable copy of a session. Writes go through
//! `history.replaceState` so edits do not pile up in the back button.

use gachapon_core::log;
use wasm_bindgen::JsValue;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window available".to_string())
}

fn js_error(context: &str, err: JsValue) -> String {
    format!("{context}: {err:?}")
}

/// Current fragment without the leading `#`
pub fn read_token() -> Result<String, String> {
    let hash = window()?
        .location()
        .hash()
        .map_err(|e| js_error("reading location.hash", e))?;
    Ok(hash.strip_prefix('#').unwrap_or(&hash).to_string())
}

/// Replace the fragment with `token` and retitle the document
pub fn write_token(token: &str, page_title: &str) -> Result<(), String> {
    let window = window()?;
    window
        .history()
        .map_err(|e| js_error("accessing history", e))?
        .replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{token}")))
        .map_err(|e| js_error("replacing history state", e))?;

    if let Some(document) = window.document() {
        document.set_title(page_title);
    }
    log::debug("write_token", token);
    Ok(())
}
