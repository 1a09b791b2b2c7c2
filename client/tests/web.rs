//! Browser tests; run with `wasm-pack test --headless --firefox client`

use gachapon_client::engine::GachaEngine;
use gachapon_client::location::read_token;
use gachapon_client::token::{decode_token, encode_token};
use gachapon_core::codec::decode_state;
use gachapon_core::view::SessionView;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn engine_without_token_starts_with_initial_session() {
    let engine = GachaEngine::new(None, Some(1));
    let view = SessionView::from_session(engine.session());

    assert_eq!(view.inventory.len(), 2);
    assert!(engine.can_draw());
}

#[wasm_bindgen_test]
fn engine_spin_updates_token() {
    let mut engine = GachaEngine::new(Some("VGVzdC5mNDQzMzZfQV8zLg==".to_string()), Some(7));

    engine.spin().expect("stocked inventory");

    let state = decode_state(&engine.token()).expect("token decodes");
    assert_eq!(state.title, "Test");
    assert_eq!(state.inventory[0].quantity, 2);
    assert_eq!(state.won[0].name, "A");
    assert_eq!(state.won[0].quantity, 1);
}

#[wasm_bindgen_test]
fn engine_reports_errors_as_strings() {
    let mut engine = GachaEngine::new(None, Some(3));

    let err = engine.rename_item(0, "a_b").unwrap_err();
    assert_eq!(err, "item name may not contain '_'");

    engine.discard_won();
    engine.remove_item(0).expect("first row");
    engine.remove_item(0).expect("second row");
    assert!(engine.spin().is_err());
}

#[wasm_bindgen_test]
fn token_helpers_round_trip() {
    let token = "VGVzdC5mNDQzMzZfQV8zLg==";

    let state = decode_token(token).expect("token decodes");
    let encoded = encode_token(state).expect("state encodes");

    assert_eq!(encoded, token);
    assert!(decode_token("not-base64!!").is_err());
}

#[wasm_bindgen_test]
fn location_engine_keeps_url_and_title_in_sync() {
    let window = web_sys::window().expect("window");
    window
        .history()
        .expect("history")
        .replace_state_with_url(&JsValue::NULL, "", Some("#VGVzdC5mNDQzMzZfQV8zLg=="))
        .expect("hash set");

    let mut engine = GachaEngine::from_location().expect("engine from location");
    assert_eq!(engine.session().state().title, "Test");

    engine.set_title("Prize").expect("title accepted");
    engine.spin().expect("stocked inventory");

    assert_eq!(read_token().expect("hash readable"), engine.token());
    let state = decode_state(&engine.token()).expect("token decodes");
    assert_eq!(state.title, "Prize");
    assert_eq!(state.won[0].name, "A");

    let document = window.document().expect("document");
    assert_eq!(document.title(), "Prize - 確率抽選機");
}
