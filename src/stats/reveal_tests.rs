//! Tests for stats/reveal

use super::*;

#[test]
fn first_fire_is_true_exactly_once_per_target() {
    let mut fired = FiredSet::new();
    assert!(fired.first_fire("stats"));
    assert!(!fired.first_fire("stats"));
    assert!(!fired.first_fire("stats"));
    assert_eq!(fired.len(), 1);
}

#[test]
fn targets_fire_independently() {
    let mut fired = FiredSet::new();
    assert!(fired.first_fire("users-count"));
    assert!(fired.first_fire("online-count"));
    assert!(!fired.first_fire("users-count"));
    assert!(fired.first_fire("community-count"));
    assert!(!fired.first_fire("online-count"));
    assert_eq!(fired.len(), 3);
}

#[test]
fn duplicate_records_in_one_batch_collapse_to_one_fire() {
    // Simulates an observer batch that reports the same element twice
    // because it crossed the threshold twice between evaluation passes.
    let batch = ["card-1", "card-1", "card-2"];
    let mut fired = FiredSet::new();
    let callbacks: Vec<_> = batch
        .iter()
        .filter(|target| fired.first_fire(**target))
        .collect();
    assert_eq!(callbacks, vec![&"card-1", &"card-2"]);
}
