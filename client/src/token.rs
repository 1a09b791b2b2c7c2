//! Stateless helpers for pages that keep their own state
//!
//! These expose the codec and the weighted draw directly, without a
//! [`crate::engine::GachaEngine`].

use gachapon_core::codec::{decode_state, encode_state};
use gachapon_core::log;
use gachapon_core::rng::XorShiftRng;
use gachapon_core::selection::draw;
use gachapon_core::state::SessionState;
use gachapon_core::types::{Item, PALETTE};
use gachapon_core::view::ItemView;
use wasm_bindgen::prelude::*;

/// Decode a URL token into a session state object
#[wasm_bindgen]
pub fn decode_token(token: &str) -> Result<JsValue, String> {
    log::debug("decode_token", token);
    let state = decode_state(token).map_err(|e| e.to_string())?;
    serde_wasm_bindgen::to_value(&state).map_err(|e| format!("Serialization failed: {:?}", e))
}

/// Encode a session state object into a URL token
#[wasm_bindgen]
pub fn encode_token(state_js: JsValue) -> Result<String, String> {
    let state: SessionState = serde_wasm_bindgen::from_value(state_js)
        .map_err(|e| format!("Failed to parse state: {:?}", e))?;
    Ok(encode_state(&state))
}

/// Draw one item from a list of items with the given seed
#[wasm_bindgen]
pub fn draw_item(items_js: JsValue, seed: u64) -> Result<JsValue, String> {
    let items: Vec<Item> = serde_wasm_bindgen::from_value(items_js)
        .map_err(|e| format!("Failed to parse items: {:?}", e))?;
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let item = draw(&items, &mut rng).map_err(|e| e.to_string())?;
    serde_wasm_bindgen::to_value(&ItemView::from(&item))
        .map_err(|e| format!("Serialization failed: {:?}", e))
}

/// Colors offered for new items
#[wasm_bindgen]
pub fn get_palette() -> JsValue {
    serde_wasm_bindgen::to_value(&PALETTE[..]).unwrap_or(JsValue::NULL)
}
