//! Configuration management and validation
//!
//! Provides the layered configuration for the snapshot exporter: built-in
//! defaults, an optional TOML config file, then the environment. CLI flags
//! are applied on top by the command layer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    DEFAULT_FETCH_TIMEOUT_SECS, MATCHES_SHEET, PLAYERS_SHEET, PLAYER_STATS_SHEET,
    SHEET_ID_ENV_VAR,
};
use crate::{Error, Result};

/// Sheet tab names for the three source tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceNames {
    pub players: String,
    pub matches: String,
    pub player_stats: String,
}

impl Default for SourceNames {
    fn default() -> Self {
        Self {
            players: PLAYERS_SHEET.to_string(),
            matches: MATCHES_SHEET.to_string(),
            player_stats: PLAYER_STATS_SHEET.to_string(),
        }
    }
}

/// Settings for the remote sheet source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Spreadsheet document id; may also come from the `SHEET_ID`
    /// environment variable or the `--sheet-id` flag
    pub sheet_id: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            sheet_id: None,
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// Complete exporter configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub sources: SourceNames,
}

impl Config {
    /// Default config file location under the user config directory.
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("squadsheet").join("config.toml"))
            .ok_or_else(|| Error::configuration("could not determine user config directory"))
    }

    /// Load configuration in layers: defaults, optional file, environment.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(sheet_id) = std::env::var(SHEET_ID_ENV_VAR) {
            let trimmed = sheet_id.trim();
            if !trimmed.is_empty() {
                debug!("Using sheet id from {}", SHEET_ID_ENV_VAR);
                config.fetch.sheet_id = Some(trimmed.to_string());
            }
        }

        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read config file {}", path.display()), e))?;

        let config = toml::from_str(&raw).map_err(|e| {
            Error::configuration(format!("invalid config file {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.timeout_secs == 0 {
            return Err(Error::configuration("fetch.timeout_secs must be nonzero"));
        }

        for (label, name) in [
            ("sources.players", &self.sources.players),
            ("sources.matches", &self.sources.matches),
            ("sources.player_stats", &self.sources.player_stats),
        ] {
            if name.trim().is_empty() {
                return Err(Error::configuration(format!("{} must not be blank", label)));
            }
        }

        Ok(())
    }

    /// Per-request fetch timeout as a [`Duration`].
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sources.players, "players");
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[fetch]\nsheet_id = \"doc123\"\ntimeout_secs = 5\n\n[sources]\nplayers = \"squad\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.fetch.sheet_id.as_deref(), Some("doc123"));
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.sources.players, "squad");
        // Unspecified sections keep their defaults
        assert_eq!(config.sources.matches, "matches");
    }

    #[test]
    fn test_invalid_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "fetch = \"not a table\"\n").unwrap();

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validate_rejects_blank_source_and_zero_timeout() {
        let mut config = Config::default();
        config.sources.matches = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
