//! Weighted draw over an inventory
//!
//! Inverse-CDF sampling: one uniform sample is compared against the running
//! sum of `quantity / total` in input order. Iteration order is input order,
//! so a fixed sample sequence always yields the same picks.

use crate::error::{SelectionError, SelectionResult};
use crate::rng::DrawRng;
use crate::types::Item;

/// Sum of all quantities
pub fn total_quantity(items: &[Item]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Probability of drawing each item, in input order.
///
/// All zeros when nothing can be drawn.
pub fn draw_rates(items: &[Item]) -> Vec<f64> {
    let total = total_quantity(items);
    if total == 0 {
        return vec![0.0; items.len()];
    }
    let total = total as f64;
    items
        .iter()
        .map(|item| f64::from(item.quantity) / total)
        .collect()
}

/// Pick an index with probability proportional to its quantity
pub fn draw_index<R: DrawRng>(items: &[Item], rng: &mut R) -> SelectionResult<usize> {
    if items.is_empty() {
        return Err(SelectionError::EmptyInventory);
    }
    let total = total_quantity(items);
    if total == 0 {
        return Err(SelectionError::NoStock);
    }

    let r = rng.next_unit();
    let total = total as f64;
    let mut accumulate = 0.0;
    for (idx, item) in items.iter().enumerate() {
        accumulate += f64::from(item.quantity) / total;
        if r < accumulate {
            return Ok(idx);
        }
    }

    // Rounding can leave the final sum just under 1.0
    items
        .iter()
        .rposition(|item| item.quantity > 0)
        .ok_or(SelectionError::NoStock)
}

/// Pick an item with probability proportional to its quantity
pub fn draw<R: DrawRng>(items: &[Item], rng: &mut R) -> SelectionResult<Item> {
    let idx = draw_index(items, rng)?;
    Ok(items[idx].clone())
}
