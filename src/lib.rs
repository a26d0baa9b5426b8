//! Squadsheet Library
//!
//! A Rust library for turning club spreadsheet exports (players, matches,
//! per-match player statistics) into season-scoped JSON snapshots.
//!
//! This library provides tools for:
//! - Parsing delimited sheet exports with a quote-aware character scanner
//! - Mapping parsed rows into header-keyed records
//! - Normalizing loosely-typed cells into validated domain records
//! - Filtering matches and stats to one season with referential consistency
//! - Fetching published sheet exports over HTTP, concurrently per table

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod season_filter;
        pub mod sheet_csv_parser;
        pub mod sheet_fetcher;
        pub mod snapshot;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Match, Player, PlayerMatchStat, SeasonSnapshot};
pub use config::Config;

/// Result type alias for squadsheet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for snapshot export operations
///
/// The parsing/normalization pipeline itself is total and never produces
/// an error; these variants cover the shell around it: acquiring raw sheet
/// text, configuration, and writing the serialized snapshot.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Fetching a sheet export failed (transport failure or non-success status)
    #[error("Fetch error for sheet '{sheet}': {message}")]
    Fetch {
        sheet: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Snapshot serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a fetch error with context
    pub fn fetch(
        sheet: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Fetch {
            sheet: sheet.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Fetch {
            sheet: "unknown".to_string(),
            message: "request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
