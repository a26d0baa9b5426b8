//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the command implementations: logging setup, layered configuration
//! loading, sheet acquisition, and the stats reported back to `main`.

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::services::sheet_fetcher::{RawSheets, SheetFetcher};
use crate::config::Config;
use crate::{Error, Result};

/// Snapshot statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct SnapshotStats {
    /// Number of players in the final record set
    pub players: usize,
    /// Number of matches in the final record set
    pub matches: usize,
    /// Number of player stat rows in the final record set
    pub player_stats: usize,
    /// Total processing time
    pub processing_time: Duration,
    /// Size of the serialized output in bytes
    pub output_bytes: u64,
}

impl SnapshotStats {
    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("squadsheet={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (file -> env).
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    let default_path = if config_file.is_none() {
        Config::default_config_path().ok().filter(|path| path.exists())
    } else {
        None
    };

    let config_file = config_file.or(default_path.as_deref());
    if let Some(path) = config_file {
        info!("Using config file: {}", path.display());
    } else {
        debug!("No config file found, using defaults and environment variables");
    }

    let config = Config::load_layered(config_file)?;
    config.validate()?;
    Ok(config)
}

/// Acquire the three raw sheet exports from the configured source.
///
/// A local input directory takes precedence; otherwise the sheet id is
/// resolved from the flag, then the config file, then the environment.
pub async fn acquire_sheets(
    sheet_id: Option<&str>,
    input_dir: Option<&Path>,
    config: &Config,
    show_spinner: bool,
) -> Result<RawSheets> {
    if let Some(dir) = input_dir {
        return RawSheets::from_dir(dir);
    }

    let sheet_id = sheet_id
        .map(str::to_string)
        .or_else(|| config.fetch.sheet_id.clone())
        .ok_or_else(|| {
            Error::configuration(
                "no sheet id configured: pass --sheet-id, set fetch.sheet_id in the \
                 config file, or set SHEET_ID",
            )
        })?;

    let fetcher = SheetFetcher::new(sheet_id, config.sources.clone(), config.fetch_timeout())?;

    let spinner = show_spinner.then(|| create_spinner("Fetching sheet exports..."));
    let result = fetcher.fetch_all().await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    result
}

/// Create a spinner for long-running acquisition steps.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(SnapshotStats::format_size(500), "500 B");
        assert_eq!(SnapshotStats::format_size(1536), "1.50 KB");
        assert_eq!(SnapshotStats::format_size(1048576), "1.00 MB");
    }

    #[tokio::test]
    async fn test_acquire_sheets_without_any_source_is_a_configuration_error() {
        let config = Config::default();
        let result = acquire_sheets(None, None, &config, false).await;
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_acquire_sheets_prefers_local_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["players.csv", "matches.csv", "player_stats.csv"] {
            std::fs::write(dir.path().join(name), "a,b\n").unwrap();
        }

        let config = Config::default();
        let sheets = acquire_sheets(None, Some(dir.path()), &config, false)
            .await
            .unwrap();
        assert_eq!(sheets.players, "a,b\n");
    }
}
