//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! `url` and then `location` must be supplied before `build()` exists.

use std::marker::PhantomData;

use super::types::ScrapeConfig;
use crate::error::{ScrapeError, ScrapeResult};

// Type states for the builder
pub struct WithUrl;
pub struct WithLocation;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) config: ScrapeConfig,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            config: ScrapeConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn url(self, url: impl Into<String>) -> ScrapeConfigBuilder<WithUrl> {
        let url_string = url.into().trim().to_string();

        // Normalize URL: add https:// if no scheme is present
        let normalized_url =
            if url_string.starts_with("http://") || url_string.starts_with("https://") {
                url_string
            } else {
                format!("https://{url_string}")
            };

        let mut config = self.config;
        config.url = normalized_url;
        ScrapeConfigBuilder {
            config,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfigBuilder<WithUrl> {
    pub fn location(self, location: impl Into<String>) -> ScrapeConfigBuilder<WithLocation> {
        let mut config = self.config;
        config.location = location.into();
        ScrapeConfigBuilder {
            config,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when all required fields are set
impl ScrapeConfigBuilder<WithLocation> {
    pub fn build(self) -> ScrapeResult<ScrapeConfig> {
        let mut config = self.config;

        url::Url::parse(&config.url)
            .map_err(|e| ScrapeError::Config(format!("Invalid url '{}': {e}", config.url)))?;

        config.location = config.location.trim().to_string();
        if config.location.is_empty() {
            return Err(ScrapeError::Config(
                "location cannot be empty or whitespace-only".to_string(),
            ));
        }

        if config.max_scroll_iterations == 0 {
            return Err(ScrapeError::Config(
                "max_scroll_iterations must be at least 1".to_string(),
            ));
        }

        if config.navigation_timeout_secs == 0 {
            return Err(ScrapeError::Config(
                "navigation_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if config.content_poll_interval_ms == 0 {
            return Err(ScrapeError::Config(
                "content_poll_interval_ms must be greater than 0".to_string(),
            ));
        }

        if config.selectors.delivery.separator.is_empty() {
            return Err(ScrapeError::Config(
                "selector 'delivery.separator' cannot be empty".to_string(),
            ));
        }

        if let Some((key, _)) = config
            .selectors
            .required()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ScrapeError::Config(format!(
                "selector '{key}' cannot be empty"
            )));
        }

        Ok(config)
    }
}
