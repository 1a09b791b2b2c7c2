//! Session state and collection merges
//!
//! The merge helpers take snapshots and return new collections; nothing here
//! mutates a slice it was handed.

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Palette slots used by the default inventory
const DEFAULT_COLORS: [usize; 2] = [0, 5];

/// The complete state carried in the URL token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Free-form title, may be empty
    pub title: String,
    /// Items available for the next draw, in display order
    pub inventory: Vec<Item>,
    /// Items drawn so far, in order of first draw
    pub won: Vec<Item>,
}

impl SessionState {
    pub fn new(title: impl Into<String>, inventory: Vec<Item>, won: Vec<Item>) -> Self {
        Self {
            title: title.into(),
            inventory,
            won,
        }
    }

    /// Fresh session: untitled, two single-stock items named "1" and "2"
    pub fn initial() -> Self {
        let inventory = DEFAULT_COLORS
            .iter()
            .enumerate()
            .map(|(i, &slot)| Item::new((i + 1).to_string(), Color::from_palette(slot), 1))
            .collect();
        Self::new("", inventory, Vec::new())
    }

    /// Browser tab title
    pub fn page_title(&self) -> String {
        if self.title.is_empty() {
            String::from(APP_NAME)
        } else {
            format!("{} - {}", self.title, APP_NAME)
        }
    }

    /// Total stock left in the inventory
    pub fn inventory_count(&self) -> u64 {
        self.inventory.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Total number of items won
    pub fn won_count(&self) -> u64 {
        self.won.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Inventory with one unit removed from row `index`.
///
/// Quantity floors at zero; an out-of-range index returns the snapshot unchanged.
pub fn take_one(inventory: &[Item], index: usize) -> Vec<Item> {
    inventory
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == index {
                item.clone().with_quantity(item.quantity.saturating_sub(1))
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Won collection after winning one `item`.
///
/// Increments the first entry with the same name, or appends a copy with
/// quantity 1.
pub fn record_win(won: &[Item], item: &Item) -> Vec<Item> {
    let mut next = won.to_vec();
    match next.iter_mut().find(|w| w.name == item.name) {
        Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
        None => next.push(item.clone().with_quantity(1)),
    }
    next
}

/// Inventory with every won entry merged back in by name.
///
/// Matching rows gain the won quantity; unmatched won entries are appended
/// in won order.
pub fn restock(inventory: &[Item], won: &[Item]) -> Vec<Item> {
    won.iter().fold(inventory.to_vec(), |mut next, item| {
        match next.iter_mut().find(|n| n.name == item.name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity)
            }
            None => next.push(item.clone()),
        }
        next
    })
}
