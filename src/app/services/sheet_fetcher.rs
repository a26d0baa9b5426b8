//! Acquisition of raw sheet exports, remote and local
//!
//! The pipeline consumes one blob of delimited text per source table. This
//! module produces those blobs either by fetching the published CSV export
//! of each sheet tab over HTTP, or by reading fixed file names from a
//! local directory. The three remote fetches run concurrently; all three
//! texts must be available before normalization begins.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::SourceNames;
use crate::constants::{MATCHES_FILE, PLAYERS_FILE, PLAYER_STATS_FILE, SHEETS_BASE_URL};
use crate::{Error, Result};

/// Raw delimited text for the three source tables
#[derive(Debug, Clone, Default)]
pub struct RawSheets {
    pub players: String,
    pub matches: String,
    pub player_stats: String,
}

impl RawSheets {
    /// Read the three exports from fixed file names in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        info!("Reading sheet exports from {}", dir.display());
        Ok(Self {
            players: read_sheet_file(dir, PLAYERS_FILE)?,
            matches: read_sheet_file(dir, MATCHES_FILE)?,
            player_stats: read_sheet_file(dir, PLAYER_STATS_FILE)?,
        })
    }
}

fn read_sheet_file(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    std::fs::read_to_string(&path)
        .map_err(|e| Error::io(format!("failed to read sheet file {}", path.display()), e))
}

/// Fetches published CSV exports from one spreadsheet document
///
/// Each sheet tab is exported through the document's CSV endpoint by tab
/// name. Transport failures and non-success statuses surface as
/// [`Error::Fetch`]; response bodies are taken as-is and handed to the
/// parser without inspection.
#[derive(Debug, Clone)]
pub struct SheetFetcher {
    client: reqwest::Client,
    sheet_id: String,
    sources: SourceNames,
}

impl SheetFetcher {
    /// Create a fetcher for one spreadsheet document.
    pub fn new(
        sheet_id: impl Into<String>,
        sources: SourceNames,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| Error::fetch("-", "failed to build HTTP client", Some(e)))?;

        Ok(Self {
            client,
            sheet_id: sheet_id.into(),
            sources,
        })
    }

    /// Fetch the CSV export of one sheet tab by name.
    pub async fn fetch_sheet(&self, sheet_name: &str) -> Result<String> {
        let url = self.export_url(sheet_name)?;
        debug!("Fetching sheet '{}' from {}", sheet_name, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(sheet_name, "request failed", Some(e)))?
            .error_for_status()
            .map_err(|e| Error::fetch(sheet_name, "non-success status", Some(e)))?;

        let text = response
            .text()
            .await
            .map_err(|e| Error::fetch(sheet_name, "failed to read response body", Some(e)))?;

        debug!("Fetched sheet '{}': {} bytes", sheet_name, text.len());
        Ok(text)
    }

    /// Fetch all three source tables concurrently.
    pub async fn fetch_all(&self) -> Result<RawSheets> {
        info!("Fetching sheet exports for document {}", self.sheet_id);

        let (players, matches, player_stats) = tokio::try_join!(
            self.fetch_sheet(&self.sources.players),
            self.fetch_sheet(&self.sources.matches),
            self.fetch_sheet(&self.sources.player_stats),
        )?;

        Ok(RawSheets {
            players,
            matches,
            player_stats,
        })
    }

    /// Build the CSV export URL for one sheet tab.
    fn export_url(&self, sheet_name: &str) -> Result<reqwest::Url> {
        let base = format!("{}/{}/gviz/tq", SHEETS_BASE_URL, self.sheet_id);
        let mut url = reqwest::Url::parse(&base)
            .map_err(|e| Error::configuration(format!("invalid sheet export URL {}: {}", base, e)))?;
        url.query_pairs_mut()
            .append_pair("tqx", "out:csv")
            .append_pair("sheet", sheet_name);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_reads_all_three_tables() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PLAYERS_FILE), "player_id,name\np1,Ann\n").unwrap();
        std::fs::write(dir.path().join(MATCHES_FILE), "match_id,season\n").unwrap();
        std::fs::write(dir.path().join(PLAYER_STATS_FILE), "match_id,player_id\n").unwrap();

        let sheets = RawSheets::from_dir(dir.path()).unwrap();
        assert!(sheets.players.contains("Ann"));
        assert!(sheets.matches.starts_with("match_id"));
        assert!(sheets.player_stats.starts_with("match_id"));
    }

    #[test]
    fn test_from_dir_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PLAYERS_FILE), "player_id,name\n").unwrap();

        let result = RawSheets::from_dir(dir.path());
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_export_url_encodes_sheet_name() {
        let fetcher = SheetFetcher::new(
            "doc123",
            SourceNames::default(),
            Duration::from_secs(5),
        )
        .unwrap();

        let url = fetcher.export_url("player stats").unwrap();
        assert_eq!(url.path(), "/spreadsheets/d/doc123/gviz/tq");
        assert!(url.query().unwrap().contains("tqx=out%3Acsv"));
        assert!(url.query().unwrap().contains("sheet=player+stats"));
    }
}
