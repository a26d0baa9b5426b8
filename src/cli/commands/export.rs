//! Export command implementation
//!
//! Acquires the three sheet exports, builds the season snapshot, and
//! writes the serialized JSON to stdout or a file.

use std::time::Instant;

use tracing::{debug, info};

use super::shared::{SnapshotStats, acquire_sheets, load_configuration, setup_logging};
use crate::app::services::snapshot::build_snapshot;
use crate::cli::args::ExportArgs;
use crate::{Error, Result};

/// Export command runner.
pub async fn run_export(args: ExportArgs) -> Result<SnapshotStats> {
    let start_time = Instant::now();

    setup_logging(&args.log_level, args.quiet)?;
    args.validate()?;
    debug!("Export arguments: {:?}", args);

    let config = load_configuration(args.config_file.as_deref())?;

    let sheets = acquire_sheets(
        args.sheet_id.as_deref(),
        args.input_dir.as_deref(),
        &config,
        !args.quiet,
    )
    .await?;

    let season = args.season_query();
    match season {
        Some(season) => info!("Building snapshot for season {}", season),
        None => info!("Building snapshot for all seasons"),
    }
    let snapshot = build_snapshot(&sheets, season);

    let json = if args.pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    }
    .map_err(|e| Error::serialization("failed to serialize snapshot", e))?;

    let output_bytes = json.len() as u64;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json).map_err(|e| {
                Error::io(format!("failed to write snapshot to {}", path.display()), e)
            })?;
            info!(
                "Snapshot written to {} ({})",
                path.display(),
                SnapshotStats::format_size(output_bytes)
            );
        }
        None => println!("{}", json),
    }

    let stats = SnapshotStats {
        players: snapshot.players.len(),
        matches: snapshot.matches.len(),
        player_stats: snapshot.player_match_stats.len(),
        processing_time: start_time.elapsed(),
        output_bytes,
    };

    info!(
        "Export completed in {:.2}s: {} players, {} matches, {} stat rows",
        stats.processing_time.as_secs_f64(),
        stats.players,
        stats.matches,
        stats.player_stats
    );

    Ok(stats)
}
