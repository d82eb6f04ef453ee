//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use std::path::PathBuf;

use super::builder::ScrapeConfigBuilder;
use crate::listing::{CardErrorPolicy, ListingSelectors};
use crate::output::OutputFormat;

impl<State> ScrapeConfigBuilder<State> {
    /// Destination file for the extracted records (overwritten)
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    #[must_use]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// Set browser headless mode (visible vs invisible browser window)
    ///
    /// Headless is the default. A visible window is mostly useful for
    /// watching the location search and the scroll loop while tuning
    /// selectors.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    #[must_use]
    pub fn chrome_executable(mut self, path: Option<PathBuf>) -> Self {
        self.config.chrome_executable = path;
        self
    }

    #[must_use]
    pub fn input_settle_delay_ms(mut self, millis: u64) -> Self {
        self.config.input_settle_delay_ms = millis;
        self
    }

    #[must_use]
    pub fn scroll_settle_delay_ms(mut self, millis: u64) -> Self {
        self.config.scroll_settle_delay_ms = millis;
        self
    }

    /// Safety cap for the scroll-to-stable loop (must be at least 1)
    #[must_use]
    pub fn max_scroll_iterations(mut self, iterations: usize) -> Self {
        self.config.max_scroll_iterations = iterations;
        self
    }

    #[must_use]
    pub fn content_wait_timeout_secs(mut self, secs: u64) -> Self {
        self.config.content_wait_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn content_poll_interval_ms(mut self, millis: u64) -> Self {
        self.config.content_poll_interval_ms = millis;
        self
    }

    #[must_use]
    pub fn navigation_timeout_secs(mut self, secs: u64) -> Self {
        self.config.navigation_timeout_secs = secs;
        self
    }

    /// What to do when a single card fails with a browser error
    ///
    /// `Skip` (default) drops that card and continues. `Abort` stops the
    /// enumeration and keeps the records collected before the failing card.
    #[must_use]
    pub fn card_error_policy(mut self, policy: CardErrorPolicy) -> Self {
        self.config.card_error_policy = policy;
        self
    }

    /// Replace the whole selector table
    #[must_use]
    pub fn selectors(mut self, selectors: ListingSelectors) -> Self {
        self.config.selectors = selectors;
        self
    }
}
