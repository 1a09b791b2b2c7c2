//! View types for UI serialization
//!
//! This module provides view structs for sending session state to frontends.

use serde::{Deserialize, Serialize};

use crate::selection::draw_rates;
use crate::session::Session;
use crate::types::Item;

/// One table row as the UI renders it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub name: String,
    /// CSS color including the `#`
    pub color: String,
    pub quantity: u32,
    /// Chance of being drawn next; always 0 for won rows
    pub rate: f64,
}

impl ItemView {
    fn with_rate(item: &Item, rate: f64) -> Self {
        Self {
            name: item.name.clone(),
            color: item.color.to_string(),
            quantity: item.quantity,
            rate,
        }
    }
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self::with_rate(item, 0.0)
    }
}

/// The complete session view sent to the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub title: String,
    /// Document title including the app name
    pub page_title: String,
    pub inventory: Vec<ItemView>,
    pub won: Vec<ItemView>,
    /// Units left to draw
    pub total_quantity: u64,
    /// Units won so far
    pub won_quantity: u64,
    /// Whether the draw button should be enabled
    pub can_draw: bool,
    /// URL fragment token for the current state
    pub token: String,
}

impl SessionView {
    pub fn from_session(session: &Session) -> Self {
        let state = session.state();
        let rates = draw_rates(&state.inventory);
        Self {
            title: state.title.clone(),
            page_title: state.page_title(),
            inventory: state
                .inventory
                .iter()
                .zip(rates)
                .map(|(item, rate)| ItemView::with_rate(item, rate))
                .collect(),
            won: state.won.iter().map(ItemView::from).collect(),
            total_quantity: state.inventory_count(),
            won_quantity: state.won_count(),
            can_draw: session.can_draw(),
            token: session.token(),
        }
    }
}
