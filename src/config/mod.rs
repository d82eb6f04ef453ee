//! Configuration module for scrape runs
//!
//! This module provides the `ScrapeConfig` struct and its type-safe builder
//! for configuring a run with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithLocation, WithUrl};
pub use types::ScrapeConfig;
