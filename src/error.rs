//! Error types for scrape runs
//!
//! Field-level misses never surface here; they are absorbed into the
//! `"N/A"` sentinel by the listing extractor. Everything in this enum is
//! fatal for the run.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for scrape operations
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Error types for scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The location search box is not on the page
    #[error("Location input not found with selector '{0}'")]
    LocationInputMissing(String),

    /// The location submit control is not on the page
    #[error("Location submit control not found with selector '{0}'")]
    SubmitControlMissing(String),

    /// No listing card appeared before the content-wait bound
    #[error("Listings did not load: no element matched '{selector}' within {timeout:?}")]
    ContentTimeout { selector: String, timeout: Duration },

    /// Navigation to the listing page failed or timed out
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// Browser launch or page communication failure
    #[error("Browser error: {0}")]
    Browser(String),

    /// Invalid configuration or selector table
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer/reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<anyhow::Error> for ScrapeError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} keeps the context chain
        Self::Browser(format!("{err:#}"))
    }
}

impl ScrapeError {
    /// True for failures that mean the search never produced listings.
    ///
    /// These abort the run before any extraction happens.
    #[must_use]
    pub fn is_precondition_failure(&self) -> bool {
        matches!(
            self,
            Self::LocationInputMissing(_)
                | Self::SubmitControlMissing(_)
                | Self::ContentTimeout { .. }
        )
    }
}
