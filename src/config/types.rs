//! Core configuration types for scrape runs

use std::path::PathBuf;

use crate::listing::{CardErrorPolicy, ListingSelectors};
use crate::output::OutputFormat;
use crate::utils::{
    DEFAULT_CONTENT_POLL_MS, DEFAULT_CONTENT_WAIT_SECS, DEFAULT_INPUT_SETTLE_MS,
    DEFAULT_MAX_SCROLL_ITERATIONS, DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_OUTPUT_FILE,
    DEFAULT_SCROLL_SETTLE_MS,
};

/// Main configuration struct for a scrape run
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Listing page URL.
    ///
    /// **INVARIANT:** carries an http(s) scheme (normalized in builder).
    pub(crate) url: String,
    /// Free-text address typed into the location search box
    pub(crate) location: String,
    pub(crate) output_path: PathBuf,
    pub(crate) output_format: OutputFormat,
    pub(crate) headless: bool,

    /// Explicit browser binary; discovery/download is used when unset
    pub(crate) chrome_executable: Option<PathBuf>,

    /// Fixed pause between focusing the location input and typing
    pub(crate) input_settle_delay_ms: u64,

    /// Fixed pause after each scroll before re-measuring document height
    pub(crate) scroll_settle_delay_ms: u64,

    /// Scroll-to-stable safety cap. Reaching it is not an error.
    pub(crate) max_scroll_iterations: usize,

    /// Bound on waiting for the first listing card after the search
    pub(crate) content_wait_timeout_secs: u64,
    pub(crate) content_poll_interval_ms: u64,

    /// Timeout for `page.goto()` and the load event, each
    pub(crate) navigation_timeout_secs: u64,

    pub(crate) card_error_policy: CardErrorPolicy,

    pub(crate) selectors: ListingSelectors,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            location: String::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            output_format: OutputFormat::Csv,
            headless: true,
            chrome_executable: None,
            input_settle_delay_ms: DEFAULT_INPUT_SETTLE_MS,
            scroll_settle_delay_ms: DEFAULT_SCROLL_SETTLE_MS,
            max_scroll_iterations: DEFAULT_MAX_SCROLL_ITERATIONS,
            content_wait_timeout_secs: DEFAULT_CONTENT_WAIT_SECS,
            content_poll_interval_ms: DEFAULT_CONTENT_POLL_MS,
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            card_error_policy: CardErrorPolicy::Skip,
            selectors: ListingSelectors::default(),
        }
    }
}
