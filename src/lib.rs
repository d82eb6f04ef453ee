pub mod browser_setup;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod listing;
pub mod output;
pub mod scrape_engine;
pub mod session;
pub mod utils;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::ScrapeConfig;
pub use driver::{ElementHandle, PageDriver, SnapshotPage};
pub use error::{ScrapeError, ScrapeResult};
pub use listing::{
    CardErrorPolicy, ExtractionReport, ListingRecord, ListingSelectors, SENTINEL,
    extract_listings,
};
pub use output::{OutputFormat, save_records};
pub use scrape_engine::{RunSummary, run, run_offline, scrape};
pub use session::BrowserSession;
