use super::*;
use crate::error::SelectionError;
use crate::rng::XorShiftRng;
use crate::selection::{draw, draw_index, draw_rates, total_quantity};

#[test]
fn test_draw_follows_cumulative_boundaries() {
    // Boundaries: 0.25, 0.5, 1.0, 1.0
    let items = create_items(&[1, 1, 2, 0]);
    let mut rng = SequenceRng::new(&[0.05, 0.3, 0.6, 0.99]);

    let picks: Vec<usize> = (0..4)
        .map(|_| draw_index(&items, &mut rng).expect("stocked inventory"))
        .collect();

    assert_eq!(picks, vec![0, 1, 2, 2]);
}

#[test]
fn test_sample_on_boundary_goes_to_next_item() {
    let items = create_items(&[1, 1, 2]);
    let mut rng = SequenceRng::new(&[0.0, 0.25, 0.5]);

    assert_eq!(draw_index(&items, &mut rng), Ok(0));
    assert_eq!(draw_index(&items, &mut rng), Ok(1));
    assert_eq!(draw_index(&items, &mut rng), Ok(2));
}

#[test]
fn test_zero_quantity_item_never_selected() {
    let items = create_items(&[0, 3, 0, 1, 0]);
    let mut rng = XorShiftRng::seed_from_u64(99);

    for _ in 0..2000 {
        let idx = draw_index(&items, &mut rng).expect("stocked inventory");
        assert!(idx == 1 || idx == 3, "picked zero-quantity index {idx}");
    }
}

#[test]
fn test_empty_inventory_is_an_error() {
    let mut rng = SequenceRng::new(&[0.5]);
    assert_eq!(
        draw_index(&[], &mut rng),
        Err(SelectionError::EmptyInventory)
    );
}

#[test]
fn test_zero_total_is_an_error() {
    let items = create_items(&[0]);
    let mut rng = SequenceRng::new(&[0.5]);
    assert_eq!(draw(&items, &mut rng), Err(SelectionError::NoStock));

    let items = create_items(&[0, 0, 0]);
    assert_eq!(draw(&items, &mut rng), Err(SelectionError::NoStock));
}

#[test]
fn test_drift_falls_back_to_last_stocked_item() {
    // A sample at or past 1.0 never crosses the running sum
    let items = create_items(&[1, 1, 1, 0]);
    let mut rng = SequenceRng::new(&[1.0]);

    assert_eq!(draw_index(&items, &mut rng), Ok(2));
}

#[test]
fn test_tenths_accumulate_without_losing_last_item() {
    // Ten additions of 0.1 stop at 1 - 2^-53, the largest sample below 1.0
    let items = create_items(&[1; 10]);
    let mut rng = SequenceRng::new(&[1.0 - f64::EPSILON / 2.0]);

    assert_eq!(draw_index(&items, &mut rng), Ok(9));
}

#[test]
fn test_single_item_always_drawn() {
    let items = vec![create_item("A", "#f44336", 3)];
    let mut rng = XorShiftRng::seed_from_u64(1234);

    for _ in 0..100 {
        let item = draw(&items, &mut rng).expect("stocked inventory");
        assert_eq!(item.name, "A");
        assert_eq!(item.quantity, 3, "draw returns the item by value, unchanged");
    }
}

#[test]
fn test_distribution_tracks_quantities() {
    let items = create_items(&[1, 3]);
    let mut rng = XorShiftRng::seed_from_u64(2024);
    let mut counts = [0u32; 2];

    for _ in 0..20_000 {
        counts[draw_index(&items, &mut rng).expect("stocked inventory")] += 1;
    }

    let share = f64::from(counts[1]) / 20_000.0;
    assert!(
        (share - 0.75).abs() < 0.02,
        "expected ~75% for the heavier item, got {share}"
    );
}

#[test]
fn test_draw_rates() {
    let rates = draw_rates(&create_items(&[1, 1, 2, 0]));
    assert_eq!(rates, vec![0.25, 0.25, 0.5, 0.0]);

    assert_eq!(draw_rates(&create_items(&[0, 0])), vec![0.0, 0.0]);
    assert!(draw_rates(&[]).is_empty());
}

#[test]
fn test_total_quantity_does_not_overflow() {
    let items = create_items(&[u32::MAX, u32::MAX]);
    assert_eq!(total_quantity(&items), 2 * u64::from(u32::MAX));
}
