mod selection;

use crate::rng::DrawRng;
use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn create_item(name: &str, color: &str, quantity: u32) -> Item {
    Item::new(name, Color::new(color), quantity)
}

/// Items with the given quantities, named by position ("0", "1", ...)
fn create_items(quantities: &[u32]) -> Vec<Item> {
    quantities
        .iter()
        .enumerate()
        .map(|(i, &q)| Item::new(i.to_string(), Color::from_palette(i), q))
        .collect()
}

/// Replays fixed unit samples, cycling when exhausted
struct SequenceRng {
    samples: Vec<f64>,
    next: usize,
}

impl SequenceRng {
    fn new(samples: &[f64]) -> Self {
        Self {
            samples: samples.to_vec(),
            next: 0,
        }
    }
}

impl DrawRng for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_unit() * (u32::MAX as f64 + 1.0)) as u32
    }

    fn next_unit(&mut self) -> f64 {
        let sample = self.samples[self.next % self.samples.len()];
        self.next += 1;
        sample
    }
}
