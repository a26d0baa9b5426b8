//! Check command implementation
//!
//! Runs the parsing pipeline over the three sheet exports and reports how
//! many rows each table yielded and how many were dropped by the
//! required-field invariants. The pipeline itself never counts drops; the
//! report compares input and output lengths after the fact.

use serde::Serialize;
use tracing::debug;

use super::shared::{SnapshotStats, acquire_sheets, load_configuration, setup_logging};
use crate::app::services::sheet_csv_parser::{normalize, parse, to_records};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::{Error, Result};

/// Per-table parse results
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    /// Mapped data rows found in the export (header excluded)
    pub rows: usize,
    /// Records that survived normalization
    pub kept: usize,
    /// Rows dropped by a required-field invariant
    pub dropped: usize,
}

impl TableReport {
    fn new(rows: usize, kept: usize) -> Self {
        Self {
            rows,
            kept,
            dropped: rows - kept,
        }
    }
}

/// Full check report across the three tables
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub players: TableReport,
    pub matches: TableReport,
    pub player_stats: TableReport,
    /// Distinct season labels observed on surviving matches, sorted
    pub seasons: Vec<String>,
}

/// Check command runner.
pub async fn run_check(args: CheckArgs) -> Result<SnapshotStats> {
    setup_logging(&args.log_level, false)?;
    args.validate()?;
    debug!("Check arguments: {:?}", args);

    let config = load_configuration(args.config_file.as_deref())?;

    let show_spinner = args.output_format == OutputFormat::Human;
    let sheets = acquire_sheets(
        args.sheet_id.as_deref(),
        args.input_dir.as_deref(),
        &config,
        show_spinner,
    )
    .await?;

    let players_rows = to_records(parse(&sheets.players));
    let matches_rows = to_records(parse(&sheets.matches));
    let stats_rows = to_records(parse(&sheets.player_stats));

    let tables = normalize(&players_rows, &matches_rows, &stats_rows);

    let mut seasons: Vec<String> = tables.matches.iter().map(|m| m.season.clone()).collect();
    seasons.sort();
    seasons.dedup();

    let report = CheckReport {
        players: TableReport::new(players_rows.len(), tables.players.len()),
        matches: TableReport::new(matches_rows.len(), tables.matches.len()),
        player_stats: TableReport::new(stats_rows.len(), tables.stats.len()),
        seasons,
    };

    match args.output_format {
        OutputFormat::Human => print_human_report(&report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::serialization("failed to serialize check report", e))?;
            println!("{}", json);
        }
    }

    Ok(SnapshotStats {
        players: tables.players.len(),
        matches: tables.matches.len(),
        player_stats: tables.stats.len(),
        ..Default::default()
    })
}

/// Print the human-readable check report.
fn print_human_report(report: &CheckReport) {
    println!("\nSheet Export Check");
    println!("==================");

    for (label, table) in [
        ("players", &report.players),
        ("matches", &report.matches),
        ("player_stats", &report.player_stats),
    ] {
        println!(
            "  {:<13} {:>5} rows, {:>5} kept, {:>5} dropped",
            label, table.rows, table.kept, table.dropped
        );
    }

    if report.seasons.is_empty() {
        println!("\nNo seasons found");
    } else {
        println!("\nSeasons: {}", report.seasons.join(", "));
    }

    let dropped_total =
        report.players.dropped + report.matches.dropped + report.player_stats.dropped;
    if dropped_total == 0 {
        println!("All rows passed the required-field checks");
    } else {
        println!("{} row(s) dropped by required-field checks", dropped_total);
    }
    println!();
}
