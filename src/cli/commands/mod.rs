//! Command implementations for the squadsheet CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented
//! in its own module.

pub mod check;
pub mod export;
pub mod shared;

// Re-export the main types for convenient access
pub use shared::SnapshotStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for squadsheet
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `export`: fetch or read the sheets and write a JSON snapshot
/// - `check`: parse the sheets and report per-table results
pub async fn run(args: Args) -> Result<SnapshotStats> {
    match args.command {
        Some(Commands::Export(export_args)) => export::run_export(export_args).await,
        Some(Commands::Check(check_args)) => check::run_check(check_args).await,
        None => Err(Error::configuration("no command provided")),
    }
}
