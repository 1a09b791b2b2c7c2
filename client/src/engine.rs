//! Gachapon engine for browser WASM builds
//!
//! This module provides the session holder exposed to JavaScript via
//! wasm-bindgen. Every successful mutation re-encodes the session; engines
//! created from the page location also write that token back to the URL.

use gachapon_core::log;
use gachapon_core::rng::XorShiftRng;
use gachapon_core::session::Session;
use gachapon_core::view::{ItemView, SessionView};
use gachapon_core::SessionError;
use wasm_bindgen::prelude::*;

use crate::location;

/// Seed used when the platform has no entropy source
const FALLBACK_SEED: u64 = 42;

/// The main gachapon engine exposed to WASM
#[wasm_bindgen]
pub struct GachaEngine {
    session: Session,
    rng: XorShiftRng,
    // Whether mutations are mirrored into the page URL
    sync_location: bool,
}

#[wasm_bindgen]
impl GachaEngine {
    /// Create an engine from an optional token and optional seed.
    ///
    /// A malformed token yields the initial session. Without a seed the
    /// generator is seeded from platform entropy.
    #[wasm_bindgen(constructor)]
    pub fn new(token: Option<String>, seed: Option<u64>) -> Self {
        log::info("=== GACHAPON ENGINE INITIALIZED ===");
        let rng = match seed {
            Some(seed) => XorShiftRng::seed_from_u64(seed),
            None => XorShiftRng::from_entropy().unwrap_or_else(|e| {
                log::warn(&format!("entropy unavailable ({e}), using fixed seed"));
                XorShiftRng::seed_from_u64(FALLBACK_SEED)
            }),
        };
        Self {
            session: Session::restore(token.as_deref()),
            rng,
            sync_location: false,
        }
    }

    /// Create an engine from the page's URL fragment and keep the URL in sync
    #[wasm_bindgen(js_name = fromLocation)]
    pub fn from_location() -> Result<GachaEngine, String> {
        let token = location::read_token()?;
        let mut engine = Self::new(Some(token), None);
        engine.sync_location = true;
        engine.sync();
        Ok(engine)
    }

    /// Get the current session view as JSON
    #[wasm_bindgen]
    pub fn get_view(&self) -> JsValue {
        log::debug("get_view", "Serializing session to view");
        let view = SessionView::from_session(&self.session);
        match serde_wasm_bindgen::to_value(&view) {
            Ok(val) => val,
            Err(e) => {
                log::error(&format!("get_view serialization failed: {:?}", e));
                JsValue::NULL
            }
        }
    }

    /// Current URL token
    #[wasm_bindgen]
    pub fn token(&self) -> String {
        self.session.token()
    }

    /// Whether the draw button should be enabled
    #[wasm_bindgen]
    pub fn can_draw(&self) -> bool {
        self.session.can_draw()
    }

    #[wasm_bindgen]
    pub fn set_title(&mut self, title: &str) -> Result<(), String> {
        self.session.set_title(title).map_err(to_js)?;
        self.sync();
        Ok(())
    }

    /// Append a new item and return its index
    #[wasm_bindgen]
    pub fn add_item(&mut self) -> usize {
        let index = self.session.add_item(&mut self.rng);
        self.sync();
        index
    }

    #[wasm_bindgen]
    pub fn remove_item(&mut self, index: usize) -> Result<(), String> {
        self.session.remove_item(index).map_err(to_js)?;
        self.sync();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn rename_item(&mut self, index: usize, name: &str) -> Result<(), String> {
        self.session.rename_item(index, name).map_err(to_js)?;
        self.sync();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn recolor_item(&mut self, index: usize, color: &str) -> Result<(), String> {
        self.session.recolor_item(index, color).map_err(to_js)?;
        self.sync();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), String> {
        self.session.set_quantity(index, quantity).map_err(to_js)?;
        self.sync();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn increment_quantity(&mut self, index: usize) -> Result<u32, String> {
        let quantity = self.session.increment_quantity(index).map_err(to_js)?;
        self.sync();
        Ok(quantity)
    }

    #[wasm_bindgen]
    pub fn decrement_quantity(&mut self, index: usize) -> Result<u32, String> {
        let quantity = self.session.decrement_quantity(index).map_err(to_js)?;
        self.sync();
        Ok(quantity)
    }

    /// Draw one item; returns it as JSON for the reveal animation
    #[wasm_bindgen]
    pub fn spin(&mut self) -> Result<JsValue, String> {
        log::action("spin", &format!("stock={}", self.session.state().inventory_count()));
        let item = self.session.draw(&mut self.rng).map_err(to_js)?;
        self.sync();
        serde_wasm_bindgen::to_value(&ItemView::from(&item))
            .map_err(|e| format!("Serialization failed: {:?}", e))
    }

    #[wasm_bindgen]
    pub fn return_won_to_inventory(&mut self) {
        self.session.return_won_to_inventory();
        self.sync();
    }

    #[wasm_bindgen]
    pub fn discard_won(&mut self) {
        self.session.discard_won();
        self.sync();
    }
}

// Private implementation methods
impl GachaEngine {
    /// Session accessor for Rust callers
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn sync(&self) {
        if !self.sync_location {
            return;
        }
        let token = self.session.token();
        let page_title = self.session.state().page_title();
        if let Err(e) = location::write_token(&token, &page_title) {
            log::error(&format!("URL sync failed: {e}"));
        }
    }
}

impl Default for GachaEngine {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn to_js(err: SessionError) -> String {
    err.to_string()
}
