//! Command-line argument definitions for squadsheet
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Each subcommand owns its argument struct and validation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{Error, Result};

/// CLI arguments for the squad snapshot exporter
///
/// Fetches club spreadsheet exports (players, matches, per-match player
/// statistics) and produces a season-scoped JSON snapshot.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "squadsheet",
    version,
    about = "Export club spreadsheet data as a season-scoped JSON snapshot",
    long_about = "Fetches the players, matches and player_stats tabs of a published \
                  spreadsheet as CSV, normalizes them into typed records, and writes a \
                  single JSON snapshot scoped to one season (or to all seasons). Sheets \
                  can also be read from local CSV files for offline use."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for squadsheet
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Export a season snapshot as JSON (main command)
    Export(ExportArgs),
    /// Parse the sheet exports and report per-table results without exporting
    Check(CheckArgs),
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Spreadsheet document id to fetch from
    ///
    /// Falls back to `fetch.sheet_id` in the config file, then to the
    /// SHEET_ID environment variable.
    #[arg(long = "sheet-id", value_name = "ID", help = "Spreadsheet document id to fetch from")]
    pub sheet_id: Option<String>,

    /// Directory holding players.csv, matches.csv and player_stats.csv
    ///
    /// When given, sheets are read locally instead of fetched.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Read sheet exports from a local directory instead of fetching"
    )]
    pub input_dir: Option<PathBuf>,

    /// Season to scope the snapshot to
    ///
    /// Matches are compared by exact season label. Omitted or empty means
    /// all seasons.
    #[arg(short = 's', long = "season", value_name = "SEASON", help = "Season to scope the snapshot to")]
    pub season: Option<String>,

    /// Output file for the JSON snapshot (stdout when omitted)
    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Output file for the JSON snapshot")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", help = "Pretty-print the JSON output")]
    pub pretty: bool,

    /// Path to configuration file
    #[arg(long = "config", value_name = "FILE", help = "Path to configuration file")]
    pub config_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", help = "Log level")]
    pub log_level: String,

    /// Suppress progress output; log errors only
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,
}

impl ExportArgs {
    /// Validate argument combinations.
    pub fn validate(&self) -> Result<()> {
        if self.sheet_id.is_some() && self.input_dir.is_some() {
            return Err(Error::configuration(
                "--sheet-id and --input are mutually exclusive",
            ));
        }
        validate_log_level(&self.log_level)
    }

    /// The effective season query: trimmed, with empty meaning "all seasons".
    pub fn season_query(&self) -> Option<&str> {
        self.season
            .as_deref()
            .map(str::trim)
            .filter(|season| !season.is_empty())
    }
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Spreadsheet document id to fetch from
    #[arg(long = "sheet-id", value_name = "ID", help = "Spreadsheet document id to fetch from")]
    pub sheet_id: Option<String>,

    /// Directory holding players.csv, matches.csv and player_stats.csv
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Read sheet exports from a local directory instead of fetching"
    )]
    pub input_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long = "config", value_name = "FILE", help = "Path to configuration file")]
    pub config_file: Option<PathBuf>,

    /// Report format
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub output_format: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", help = "Log level")]
    pub log_level: String,
}

impl CheckArgs {
    /// Validate argument combinations.
    pub fn validate(&self) -> Result<()> {
        if self.sheet_id.is_some() && self.input_dir.is_some() {
            return Err(Error::configuration(
                "--sheet-id and --input are mutually exclusive",
            ));
        }
        validate_log_level(&self.log_level)
    }
}

/// Output format for the check report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn validate_log_level(level: &str) -> Result<()> {
    match level {
        "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
        other => Err(Error::configuration(format!(
            "invalid log level '{}' (expected error, warn, info, debug, or trace)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_query_trims_and_drops_empty() {
        let mut args = ExportArgs::parse_from(["export"]);
        assert_eq!(args.season_query(), None);

        args.season = Some("  2026  ".to_string());
        assert_eq!(args.season_query(), Some("2026"));

        args.season = Some("   ".to_string());
        assert_eq!(args.season_query(), None);
    }

    #[test]
    fn test_conflicting_sources_are_rejected() {
        let mut args = ExportArgs::parse_from(["export"]);
        args.sheet_id = Some("doc".to_string());
        args.input_dir = Some(PathBuf::from("/tmp"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level_validation() {
        let mut args = ExportArgs::parse_from(["export"]);
        assert!(args.validate().is_ok());
        args.log_level = "loud".to_string();
        assert!(args.validate().is_err());
    }
}
