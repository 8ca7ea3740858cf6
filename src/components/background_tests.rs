//! Tests for components/background

use super::*;

/// Deterministic stand-in for `Math.random`: walks an even spread of [0, 1).
fn spread_rng() -> impl FnMut() -> f64 {
    let mut tick = 0u32;
    move || {
        tick = (tick + 7) % 100;
        f64::from(tick) / 100.0
    }
}

#[test]
fn field_is_denser_on_desktop() {
    assert_eq!(field_count(false), 30);
    assert_eq!(field_count(true), 15);
}

#[test]
fn scatter_produces_the_requested_count() {
    assert_eq!(scatter(30, false, spread_rng()).len(), 30);
    assert_eq!(scatter(0, false, spread_rng()).len(), 0);
}

#[test]
fn desktop_placements_stay_in_range() {
    for spec in scatter(100, false, spread_rng()) {
        assert!((0.0..100.0).contains(&spec.left_pct));
        assert!((0.0..100.0).contains(&spec.top_pct));
        assert!((30.0..80.0).contains(&spec.size_px), "size {}", spec.size_px);
        assert!(spec.color_index < PALETTE.len());
        assert!((10.0..25.0).contains(&spec.duration_s));
        assert!((0.0..5.0).contains(&spec.delay_s));
        assert!((0.1..0.3).contains(&spec.opacity));
    }
}

#[test]
fn mobile_hourglasses_are_smaller() {
    for spec in scatter(100, true, spread_rng()) {
        assert!((20.0..50.0).contains(&spec.size_px), "size {}", spec.size_px);
    }
}

#[test]
fn extreme_rng_values_stay_in_bounds() {
    let low = scatter(1, false, || 0.0);
    assert_eq!(low[0].size_px, 30.0);
    assert_eq!(low[0].color_index, 0);
    assert_eq!(low[0].opacity, 0.1);

    // Math.random never returns 1.0, so probe just below it.
    let high = scatter(1, false, || 1.0 - f64::EPSILON);
    assert!(high[0].size_px < 80.0);
    assert_eq!(high[0].color_index, PALETTE.len() - 1);
    assert!(high[0].opacity < 0.3 + 1e-9);
}
