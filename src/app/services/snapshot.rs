//! Snapshot assembly: raw sheet text to serialized-ready payload
//!
//! Composes the full pipeline for one request: tokenize each table's text,
//! map rows onto the header, normalize into domain records, then scope to
//! the requested season.

use super::season_filter::filter_by_season;
use super::sheet_csv_parser::{normalize, parse, to_records};
use super::sheet_fetcher::RawSheets;
use crate::app::models::SeasonSnapshot;

/// Build a season snapshot from the three raw sheet exports.
///
/// A total transformation: malformed rows are dropped per the table rules
/// and unparseable cells resolve to their defaults, so no input text can
/// make this fail. Each call recomputes the snapshot from scratch; nothing
/// is cached or mutated in place.
pub fn build_snapshot(sheets: &RawSheets, season: Option<&str>) -> SeasonSnapshot {
    let players = to_records(parse(&sheets.players));
    let matches = to_records(parse(&sheets.matches));
    let stats = to_records(parse(&sheets.player_stats));

    let tables = normalize(&players, &matches, &stats);
    filter_by_season(tables, season)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_snapshot_is_total_on_garbage_input() {
        let sheets = RawSheets {
            players: "\"unterminated".to_string(),
            matches: ",,,\n\n".to_string(),
            player_stats: String::new(),
        };

        let snapshot = build_snapshot(&sheets, Some("2026"));
        assert!(snapshot.players.is_empty());
        assert!(snapshot.matches.is_empty());
        assert!(snapshot.player_match_stats.is_empty());
        assert_eq!(snapshot.season.as_deref(), Some("2026"));
    }
}
