use clap::Parser;
use std::path::PathBuf;

use crate::config::ScrapeConfig;
use crate::error::{ScrapeError, ScrapeResult};
use crate::listing::{CardErrorPolicy, ListingSelectors};
use crate::output::OutputFormat;
use crate::utils::{
    DEFAULT_CONTENT_WAIT_SECS, DEFAULT_INPUT_SETTLE_MS, DEFAULT_LISTING_URL, DEFAULT_LOCATION,
    DEFAULT_MAX_SCROLL_ITERATIONS, DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_OUTPUT_FILE,
    DEFAULT_SCROLL_SETTLE_MS,
};

#[derive(Parser, Debug)]
#[command(name = "kodegen-listingscrape")]
#[command(
    version,
    about = "Scrape restaurant listings for a delivery location into CSV or JSON",
    long_about = None
)]
pub struct Args {
    /// Listing page to open
    #[arg(long, default_value = DEFAULT_LISTING_URL, value_name = "URL")]
    pub url: String,

    /// Address typed into the location search box
    #[arg(long, default_value = DEFAULT_LOCATION, value_name = "ADDRESS")]
    pub location: String,

    /// Output file, overwritten if present
    ///
    /// Defaults to restaurant_data.csv, or restaurant_data.json with `--format json`.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// JSON selector table replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub selectors: Option<PathBuf>,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Browser executable (otherwise discovered or downloaded)
    #[arg(long, value_name = "PATH")]
    pub chrome: Option<PathBuf>,

    /// Pause after focusing the location input
    #[arg(long, default_value_t = DEFAULT_INPUT_SETTLE_MS, value_name = "MS")]
    pub input_settle_ms: u64,

    /// Pause after each scroll before re-measuring the page
    #[arg(long, default_value_t = DEFAULT_SCROLL_SETTLE_MS, value_name = "MS")]
    pub scroll_settle_ms: u64,

    /// Upper bound on scroll iterations
    #[arg(long, default_value_t = DEFAULT_MAX_SCROLL_ITERATIONS, value_name = "NUM")]
    pub max_scrolls: usize,

    /// How long to wait for the first listing card
    #[arg(long, default_value_t = DEFAULT_CONTENT_WAIT_SECS, value_name = "SECS")]
    pub content_timeout_secs: u64,

    /// Timeout for page navigation and load, each
    #[arg(long, default_value_t = DEFAULT_NAVIGATION_TIMEOUT_SECS, value_name = "SECS")]
    pub navigation_timeout_secs: u64,

    /// Stop at the first card that fails to extract
    #[arg(long)]
    pub strict: bool,

    /// Extract from a saved HTML page instead of launching a browser
    #[arg(long, value_name = "FILE")]
    pub from_html: Option<PathBuf>,
}

impl Args {
    /// Validate the arguments into a run configuration
    pub fn into_config(self) -> ScrapeResult<ScrapeConfig> {
        let selectors = match &self.selectors {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    ScrapeError::Config(format!(
                        "Failed to read selector table {}: {e}",
                        path.display()
                    ))
                })?;
                ListingSelectors::from_json(&json)?
            }
            None => ListingSelectors::default(),
        };

        let policy = if self.strict {
            CardErrorPolicy::Abort
        } else {
            CardErrorPolicy::Skip
        };

        let output = self.output.unwrap_or_else(|| {
            PathBuf::from(DEFAULT_OUTPUT_FILE).with_extension(self.format.extension())
        });

        ScrapeConfig::builder()
            .url(self.url)
            .location(self.location)
            .output_path(output)
            .output_format(self.format)
            .headless(!self.headed)
            .chrome_executable(self.chrome)
            .input_settle_delay_ms(self.input_settle_ms)
            .scroll_settle_delay_ms(self.scroll_settle_ms)
            .max_scroll_iterations(self.max_scrolls)
            .content_wait_timeout_secs(self.content_timeout_secs)
            .navigation_timeout_secs(self.navigation_timeout_secs)
            .card_error_policy(policy)
            .selectors(selectors)
            .build()
    }
}
