//! Header-keyed record mapping over raw rows
//!
//! The first non-blank row of a sheet export names its columns; every
//! later row is mapped positionally onto those names. Column order in the
//! source is irrelevant to downstream lookups, and unknown extra columns
//! simply ride along.

use std::collections::HashMap;

use super::scanner::RawRow;

/// One data row keyed by trimmed header name, all values trimmed
pub type TabularRecord = HashMap<String, String>;

/// Map raw rows into header-keyed records.
///
/// Rows whose cells are all blank after trimming are skipped, including
/// before the header. A row shorter than the header yields empty strings
/// for the missing columns; extra trailing cells are ignored. A duplicate
/// header name keeps the later column's value.
pub fn to_records(rows: Vec<RawRow>) -> Vec<TabularRecord> {
    let mut rows = rows
        .into_iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()));

    let header: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|cell| cell.trim().to_string()).collect(),
        None => return Vec::new(),
    };

    rows.map(|row| {
        header
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let value = row.get(index).map(|cell| cell.trim()).unwrap_or("");
                (name.clone(), value.to_string())
            })
            .collect()
    })
    .collect()
}
