//! Shared configuration constants for listingscrape
//!
//! Default values used by the config builder and the CLI so the two never
//! drift apart.

/// Listing page the scraper opens by default
pub const DEFAULT_LISTING_URL: &str = "https://food.grab.com/sg/en";

/// Location typed into the search box by default
pub const DEFAULT_LOCATION: &str = "PT Singapore - Choa Chu Kang North 6, Singapore, 689577";

/// Output file written when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "restaurant_data.csv";

/// Pause after focusing the location input: 5 seconds
///
/// The input animates open when clicked and drops keystrokes until the
/// transition finishes. Nothing observable marks the end of it.
pub const DEFAULT_INPUT_SETTLE_MS: u64 = 5_000;

/// Pause after each scroll before re-measuring document height: 3 seconds
///
/// Long enough for the next page of cards to be fetched and laid out on a
/// typical connection. Too short and the loop stops before the list is done.
pub const DEFAULT_SCROLL_SETTLE_MS: u64 = 3_000;

/// Safety cap on scroll iterations: 50
///
/// A listing of a few hundred cards stabilizes well inside this. Pages with
/// animated content that never settles stop here instead of looping forever.
pub const DEFAULT_MAX_SCROLL_ITERATIONS: usize = 50;

/// Upper bound on waiting for the first listing card: 10 seconds
pub const DEFAULT_CONTENT_WAIT_SECS: u64 = 10;

/// Interval between listing-card polls: 250 ms
pub const DEFAULT_CONTENT_POLL_MS: u64 = 250;

/// Upper bound on `goto` and the load event: 30 seconds
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

/// Chrome user agent string presented by the launched browser
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
