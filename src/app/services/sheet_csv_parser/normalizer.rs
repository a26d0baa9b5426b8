//! Domain normalization for the three sheet tables
//!
//! This module converts header-keyed records into typed domain records,
//! applying the per-table required-field invariants. Rows that fail an
//! invariant are dropped silently: the record constructors return `None`
//! and normalization filters those out, preserving the order of the
//! surviving rows. Nothing here logs or counts drops; shells that want
//! drop counts compare input and output lengths.

use super::field_parsers::{field, parse_bool, parse_number, required_field};
use super::records::TabularRecord;
use crate::app::models::{Match, Player, PlayerMatchStat};
use crate::constants::{DEFAULT_MATCH_STATUS, DEFAULT_MATCH_TYPE};

/// The three normalized record sets produced from one set of sheet exports
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedTables {
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub stats: Vec<PlayerMatchStat>,
}

/// Normalize the mapped rows of all three tables into domain records.
pub fn normalize(
    players: &[TabularRecord],
    matches: &[TabularRecord],
    stats: &[TabularRecord],
) -> NormalizedTables {
    NormalizedTables {
        players: players.iter().filter_map(player_from_record).collect(),
        matches: matches.iter().filter_map(match_from_record).collect(),
        stats: stats.iter().filter_map(stat_from_record).collect(),
    }
}

/// Build a [`Player`] from a mapped row, `None` when `player_id` or `name`
/// is blank.
pub fn player_from_record(record: &TabularRecord) -> Option<Player> {
    Some(Player {
        id: required_field(record, "player_id")?.to_string(),
        name: required_field(record, "name")?.to_string(),
        pos: field(record, "pos").to_string(),
        active: parse_bool(field(record, "active")),
    })
}

/// Build a [`Match`] from a mapped row, `None` when `match_id`, `season`,
/// `date`, or `opponent` is blank.
pub fn match_from_record(record: &TabularRecord) -> Option<Match> {
    Some(Match {
        id: required_field(record, "match_id")?.to_string(),
        season: required_field(record, "season")?.to_string(),
        kind: default_if_blank(field(record, "type"), DEFAULT_MATCH_TYPE),
        round: parse_number(field(record, "round")),
        date: required_field(record, "date")?.to_string(),
        time: field(record, "time").to_string(),
        opponent: required_field(record, "opponent")?.to_string(),
        location: field(record, "location").to_string(),
        status: default_if_blank(field(record, "status"), DEFAULT_MATCH_STATUS),
        score_for: parse_number(field(record, "score_for")),
        score_against: parse_number(field(record, "score_against")),
    })
}

/// Build a [`PlayerMatchStat`] from a mapped row, `None` when `match_id`
/// or `player_id` is blank. Counter cells that are blank or non-numeric
/// resolve to 0, not absent.
pub fn stat_from_record(record: &TabularRecord) -> Option<PlayerMatchStat> {
    Some(PlayerMatchStat {
        match_id: required_field(record, "match_id")?.to_string(),
        player_id: required_field(record, "player_id")?.to_string(),
        attended: parse_bool(field(record, "attended")),
        goals: parse_number(field(record, "goals")).unwrap_or(0.0),
        assists: parse_number(field(record, "assists")).unwrap_or(0.0),
        yc: parse_number(field(record, "yc")).unwrap_or(0.0),
        rc: parse_number(field(record, "rc")).unwrap_or(0.0),
        clean_sheet: parse_bool(field(record, "clean_sheet")),
    })
}

fn default_if_blank(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
