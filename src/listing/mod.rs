//! Listing card extraction
//!
//! Maps rendered listing cards to flat `ListingRecord`s using the declarative
//! rules in `ListingSelectors`. Records always carry all eight fields.

mod extractor;
pub mod fields;
mod selectors;
mod types;

pub use extractor::extract_listings;
pub use fields::{extract_card, restaurant_id_from_href, split_delivery};
pub use selectors::{CoordinateRule, DeliveryRule, DetailLinkRule, ListingSelectors, LocationForm};
pub use types::{CardErrorPolicy, ExtractionReport, ListingRecord, SENTINEL, SkippedCard};
