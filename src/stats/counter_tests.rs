//! Tests for stats/counter

use super::*;

fn run(start: u64, end: u64, duration_ms: f64) -> CounterRun {
    CounterRun::new(CounterSpec {
        element_id: "stat".into(),
        start,
        end,
        duration_ms,
    })
}

fn displayed_value(text: &str) -> u64 {
    text.trim_end_matches('+').replace(',', "").parse().unwrap()
}

#[test]
fn samples_floor_the_interpolated_value() {
    let mut run = run(0, 100, 1000.0);
    assert_eq!(run.step(0.0), ("0+".into(), false));
    assert_eq!(run.step(500.0), ("50+".into(), false));
    assert_eq!(run.step(1000.0), ("100+".into(), true));
}

#[test]
fn first_frame_timestamp_becomes_the_zero_point() {
    // Frame timestamps are an epoch-relative clock, not an offset into the
    // run, so a counter started mid-page-life must anchor to its first frame.
    let mut run = run(0, 100, 2000.0);
    assert_eq!(run.step(5000.0), ("0+".into(), false));
    assert_eq!(run.step(6000.0), ("50+".into(), false));
    assert_eq!(run.step(7000.0), ("100+".into(), true));
}

#[test]
fn terminal_step_lands_exactly_on_end() {
    let mut run = run(0, 8000, 2000.0);
    run.step(0.0);
    let (text, done) = run.step(9999.0);
    assert!(done);
    assert_eq!(text, "8,000+");
}

#[test]
fn values_stay_in_range_and_never_decrease() {
    let mut run = run(250, 8000, 2000.0);
    let mut last = 0;
    for ts in [0.0, 16.7, 120.0, 121.3, 900.0, 1500.0, 1999.0, 2100.0] {
        let (text, _) = run.step(ts);
        let value = displayed_value(&text);
        assert!(value >= 250 && value <= 8000, "out of range at {ts}: {value}");
        assert!(value >= last, "regressed at {ts}: {value} < {last}");
        last = value;
    }
    assert_eq!(last, 8000);
}

#[test]
fn a_backwards_frame_timestamp_cannot_regress_progress() {
    let mut run = run(0, 100, 1000.0);
    run.step(0.0);
    assert_eq!(run.step(800.0).0, "80+");
    assert_eq!(run.step(700.0).0, "80+");
    assert_eq!(run.step(1000.0), ("100+".into(), true));
}

#[test]
fn equal_start_and_end_displays_the_value_for_the_whole_run() {
    let mut run = run(7, 7, 1000.0);
    assert_eq!(run.step(0.0), ("7+".into(), false));
    assert_eq!(run.step(400.0), ("7+".into(), false));
    assert_eq!(run.step(1000.0), ("7+".into(), true));
}

#[test]
fn concurrent_runs_keep_independent_zero_points() {
    let mut first = run(0, 100, 1000.0);
    let mut second = run(0, 200, 1000.0);

    assert_eq!(first.step(0.0).0, "0+");
    assert_eq!(second.step(400.0).0, "0+");
    assert_eq!(first.step(500.0).0, "50+");
    // 500ms into the second run, not 900ms.
    assert_eq!(second.step(900.0).0, "100+");
    assert_eq!(first.step(1000.0), ("100+".into(), true));
    assert_eq!(second.step(1400.0), ("200+".into(), true));
}

#[test]
fn format_count_groups_thousands_and_appends_suffix() {
    assert_eq!(format_count(0), "0+");
    assert_eq!(format_count(999), "999+");
    assert_eq!(format_count(1000), "1,000+");
    assert_eq!(format_count(50_000), "50,000+");
    assert_eq!(format_count(1_234_567), "1,234,567+");
}
