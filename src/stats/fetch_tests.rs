//! Tests for stats/fetch

use super::*;

#[test]
fn parses_the_count_field() {
    assert_eq!(parse_count(r#"{"count": 4321}"#).unwrap(), 4321);
}

#[test]
fn tolerates_extra_fields() {
    assert_eq!(
        parse_count(r#"{"count": 7, "updated_at": "2025-06-01"}"#).unwrap(),
        7
    );
}

#[test]
fn rejects_a_missing_count_field() {
    assert!(parse_count(r#"{"total": 4321}"#).is_err());
}

#[test]
fn rejects_a_malformed_body() {
    assert!(parse_count("<html>Service Unavailable</html>").is_err());
    assert!(parse_count("").is_err());
}

#[test]
fn rejects_a_non_integer_count() {
    assert!(parse_count(r#"{"count": "many"}"#).is_err());
    assert!(parse_count(r#"{"count": -3}"#).is_err());
}

#[test]
fn fetched_count_becomes_the_target() {
    assert_eq!(online_target(Ok(4321)), 4321);
}

#[test]
fn failure_substitutes_the_fallback() {
    let err = parse_count("not json").unwrap_err();
    assert_eq!(online_target(Err(err)), ONLINE_FALLBACK);
}

#[test]
fn zero_count_substitutes_the_fallback() {
    assert_eq!(online_target(Ok(0)), ONLINE_FALLBACK);
}
