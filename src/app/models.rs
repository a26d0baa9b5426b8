//! Domain models for squad snapshot processing
//!
//! This module contains the typed records produced by normalizing the three
//! sheet tables, and the snapshot envelope they are serialized into. Field
//! names on the wire are camelCase to match the snapshot consumers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Player
// =============================================================================

/// A squad member drawn from the players sheet
///
/// Rows whose `player_id` or `name` cell is blank after trimming never
/// become a `Player`; they are dropped during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique player identifier - referenced by [`PlayerMatchStat::player_id`]
    pub id: String,

    /// Display name
    pub name: String,

    /// Position label, free-form (e.g., "GK", "DF")
    pub pos: String,

    /// Whether the player is currently active; false unless the source
    /// cell holds a truthy token
    pub active: bool,
}

// =============================================================================
// Match
// =============================================================================

/// A fixture drawn from the matches sheet
///
/// `id`, `season`, `date`, and `opponent` are required; rows missing any
/// of them are dropped. The numeric fields are `None` (serialized as
/// `null`) when the source cell is blank or not a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Unique match identifier - referenced by [`PlayerMatchStat::match_id`]
    pub id: String,

    /// Opaque season label grouping fixtures (e.g., "2026")
    pub season: String,

    /// Competition type, defaulting to "LEAGUE" when blank
    #[serde(rename = "type")]
    pub kind: String,

    /// Round number within the competition, absent when not numeric
    pub round: Option<f64>,

    /// Fixture date as exported (YYYY-MM-DD)
    pub date: String,

    /// Kick-off time as exported (HH:MM)
    pub time: String,

    /// Opposing team name
    pub opponent: String,

    /// Venue label
    pub location: String,

    /// Fixture status, defaulting to "SCHEDULED" when blank
    pub status: String,

    /// Goals scored, absent until the fixture has a recorded score
    pub score_for: Option<f64>,

    /// Goals conceded, absent until the fixture has a recorded score
    pub score_against: Option<f64>,
}

// =============================================================================
// PlayerMatchStat
// =============================================================================

/// One player's statistics line for one match
///
/// Unlike [`Match`], the counter fields default to 0 rather than absent
/// when the source cell is blank or not numeric. Referential integrity to
/// matches and players is not checked at normalization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchStat {
    pub match_id: String,
    pub player_id: String,
    pub attended: bool,
    pub goals: f64,
    pub assists: f64,
    /// Yellow cards
    pub yc: f64,
    /// Red cards
    pub rc: f64,
    pub clean_sheet: bool,
}

// =============================================================================
// SeasonSnapshot
// =============================================================================

/// The serialized snapshot payload
///
/// `season` is `null` when the snapshot covers all seasons. Absent numeric
/// fields inside the record sets serialize as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSnapshot {
    pub season: Option<String>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub player_match_stats: Vec<PlayerMatchStat>,
}
