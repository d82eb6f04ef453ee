//! Scrape flow: location search, content wait, scroll-to-stable, extraction

pub mod content_wait;
pub mod location;
pub mod page_timeout;
pub mod runner;
pub mod scroll;

pub use content_wait::wait_for_listings;
pub use location::submit_location;
pub use page_timeout::with_page_timeout;
pub use runner::{RunSummary, run, run_offline, scrape};
pub use scroll::{ScrollOutcome, scroll_to_stable};
