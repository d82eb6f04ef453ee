//! Tabular output for extracted listings
//!
//! Writers run on the blocking pool under a timeout so a stalled filesystem
//! cannot hang the run after the browser work is done.

mod csv_saver;
mod json_saver;

pub use csv_saver::{read_csv, read_csv_header, write_csv};
pub use json_saver::write_json;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::error::{ScrapeError, ScrapeResult};
use crate::listing::ListingRecord;

/// Timeout for blocking serialization
const BLOCKING_SERIALIZATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header row plus one row per listing
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl OutputFormat {
    /// File extension used when no output path is given
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Save records to `path` in `format`, creating parent directories.
///
/// Any existing file at `path` is overwritten.
pub async fn save_records(
    records: Vec<ListingRecord>,
    path: PathBuf,
    format: OutputFormat,
) -> ScrapeResult<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let count = records.len();
    let target = path.clone();
    let blocking_task = tokio::task::spawn_blocking(move || match format {
        OutputFormat::Csv => write_csv(&records, &target),
        OutputFormat::Json => write_json(&records, &target),
    });

    match timeout(BLOCKING_SERIALIZATION_TIMEOUT, blocking_task).await {
        Ok(Ok(result)) => result?,
        Ok(Err(e)) => {
            return Err(ScrapeError::Io(std::io::Error::other(format!(
                "Output writer task panicked: {e}"
            ))));
        }
        Err(_) => {
            warn!("Output write timeout (timeout: {:?})", BLOCKING_SERIALIZATION_TIMEOUT);
            return Err(ScrapeError::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!(
                    "Writing {} timed out after {:?}",
                    path.display(),
                    BLOCKING_SERIALIZATION_TIMEOUT
                ),
            )));
        }
    }

    info!("Saved {} records to {}", count, path.display());
    Ok(path)
}
