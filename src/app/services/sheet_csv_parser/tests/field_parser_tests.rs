//! Tests for cell coercion and field access helpers

use super::record;
use crate::app::services::sheet_csv_parser::field_parsers::{
    field, parse_bool, parse_number, required_field,
};

#[test]
fn test_parse_bool_truthy_tokens() {
    assert!(parse_bool("Y"));
    assert!(parse_bool("yes"));
    assert!(parse_bool("1"));
    assert!(parse_bool("TRUE"));
    assert!(parse_bool("  true  "));
}

#[test]
fn test_parse_bool_everything_else_is_false() {
    assert!(!parse_bool(""));
    assert!(!parse_bool("no"));
    assert!(!parse_bool("0"));
    assert!(!parse_bool("maybe"));
    assert!(!parse_bool("yess"));
}

#[test]
fn test_parse_number_blank_and_garbage_are_absent() {
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("   "), None);
    assert_eq!(parse_number("abc"), None);
}

#[test]
fn test_parse_number_accepts_finite_values() {
    assert_eq!(parse_number("3"), Some(3.0));
    assert_eq!(parse_number(" -2.5 "), Some(-2.5));
    assert_eq!(parse_number("1e2"), Some(100.0));
}

#[test]
fn test_parse_number_rejects_non_finite_values() {
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("NaN"), None);
}

#[test]
fn test_field_access() {
    let rec = record(&[("name", "Ann"), ("pos", "")]);
    assert_eq!(field(&rec, "name"), "Ann");
    assert_eq!(field(&rec, "missing"), "");
    assert_eq!(required_field(&rec, "name"), Some("Ann"));
    assert_eq!(required_field(&rec, "pos"), None);
    assert_eq!(required_field(&rec, "missing"), None);
}
