//! Field parsing utilities for sheet records
//!
//! This module provides helper functions for coercing raw string cells
//! into booleans and numbers, and for reading fields out of a mapped
//! record. Coercion never fails: a cell that cannot be read as the target
//! type resolves to the documented default instead.

use super::records::TabularRecord;
use crate::constants::TRUTHY_TOKENS;

/// Coerce a raw cell into a boolean.
///
/// True iff the trimmed, lowercased cell is one of the truthy tokens
/// (`true`, `1`, `y`, `yes`); blank and unrecognized cells are false.
pub fn parse_bool(raw: &str) -> bool {
    let token = raw.trim().to_ascii_lowercase();
    TRUTHY_TOKENS.contains(&token.as_str())
}

/// Coerce a raw cell into a number, or `None` when absent.
///
/// A blank cell and a cell that does not parse to a finite number both
/// yield `None`; absence is distinct from zero.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Get a field value from a record, empty string when the column is missing
pub fn field<'a>(record: &'a TabularRecord, name: &str) -> &'a str {
    record.get(name).map(String::as_str).unwrap_or("")
}

/// Get a required field value, `None` when missing or blank
pub fn required_field<'a>(record: &'a TabularRecord, name: &str) -> Option<&'a str> {
    let value = field(record, name);
    if value.is_empty() { None } else { Some(value) }
}
