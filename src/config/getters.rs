//! Getter methods for `ScrapeConfig`

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::ScrapeConfig;
use crate::listing::{CardErrorPolicy, ListingSelectors};
use crate::output::OutputFormat;

impl ScrapeConfig {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn chrome_executable(&self) -> Option<&PathBuf> {
        self.chrome_executable.as_ref()
    }

    #[must_use]
    pub fn input_settle_delay(&self) -> Duration {
        Duration::from_millis(self.input_settle_delay_ms)
    }

    #[must_use]
    pub fn scroll_settle_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_delay_ms)
    }

    #[must_use]
    pub fn max_scroll_iterations(&self) -> usize {
        self.max_scroll_iterations
    }

    #[must_use]
    pub fn content_wait_timeout(&self) -> Duration {
        Duration::from_secs(self.content_wait_timeout_secs)
    }

    #[must_use]
    pub fn content_poll_interval(&self) -> Duration {
        Duration::from_millis(self.content_poll_interval_ms)
    }

    #[must_use]
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    #[must_use]
    pub fn card_error_policy(&self) -> CardErrorPolicy {
        self.card_error_policy
    }

    #[must_use]
    pub fn selectors(&self) -> &ListingSelectors {
        &self.selectors
    }
}
