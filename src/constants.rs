//! Application constants for squadsheet
//!
//! This module contains sheet naming, domain defaults, and fetch settings
//! used throughout the snapshot exporter.

// =============================================================================
// Sheet Names and File Patterns
// =============================================================================

/// Sheet tab name for the players table
pub const PLAYERS_SHEET: &str = "players";

/// Sheet tab name for the matches table
pub const MATCHES_SHEET: &str = "matches";

/// Sheet tab name for the per-match player statistics table
pub const PLAYER_STATS_SHEET: &str = "player_stats";

/// File names used by the directory source, one per table
pub const PLAYERS_FILE: &str = "players.csv";
pub const MATCHES_FILE: &str = "matches.csv";
pub const PLAYER_STATS_FILE: &str = "player_stats.csv";

// =============================================================================
// Domain Defaults
// =============================================================================

/// Cell tokens accepted as true, compared case-insensitively after trimming
pub const TRUTHY_TOKENS: &[&str] = &["true", "1", "y", "yes"];

/// Match type used when the source cell is blank
pub const DEFAULT_MATCH_TYPE: &str = "LEAGUE";

/// Match status used when the source cell is blank
pub const DEFAULT_MATCH_STATUS: &str = "SCHEDULED";

// =============================================================================
// Fetch Settings
// =============================================================================

/// Base URL for published spreadsheet documents
pub const SHEETS_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Default per-request timeout in seconds for sheet fetches
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Environment variable consulted for the spreadsheet document id
pub const SHEET_ID_ENV_VAR: &str = "SHEET_ID";
