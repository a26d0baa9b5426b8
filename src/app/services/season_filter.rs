//! Season-scoped referential filtering across the three record sets
//!
//! Matches carry a season label; stats reference matches by id and players
//! are season-independent. Scoping a snapshot to one season therefore
//! keeps every player, keeps only the matches of that season, and keeps
//! only the stats whose match survived. Membership is tested against a
//! hash set of retained match ids built once per call.

use std::collections::HashSet;

use super::sheet_csv_parser::NormalizedTables;
use crate::app::models::SeasonSnapshot;

/// Restrict the record sets to one season, preserving referential
/// consistency between matches and stats.
///
/// An absent or empty season passes all three sets through unchanged and
/// reports the snapshot season as absent. Otherwise matches are retained
/// on exact string equality of their season label. Pure and idempotent:
/// filtering an already-filtered snapshot by the same season is a no-op.
pub fn filter_by_season(tables: NormalizedTables, season: Option<&str>) -> SeasonSnapshot {
    let NormalizedTables {
        players,
        matches,
        stats,
    } = tables;

    let Some(season) = season.filter(|value| !value.is_empty()) else {
        return SeasonSnapshot {
            season: None,
            players,
            matches,
            player_match_stats: stats,
        };
    };

    let matches: Vec<_> = matches
        .into_iter()
        .filter(|m| m.season == season)
        .collect();

    let retained: HashSet<&str> = matches.iter().map(|m| m.id.as_str()).collect();
    let stats = stats
        .into_iter()
        .filter(|stat| retained.contains(stat.match_id.as_str()))
        .collect();

    SeasonSnapshot {
        season: Some(season.to_string()),
        players,
        matches,
        player_match_stats: stats,
    }
}
