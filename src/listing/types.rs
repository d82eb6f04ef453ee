//! Data structures for extracted listings

use serde::{Deserialize, Serialize};

/// Placeholder written for any field that could not be read
pub const SENTINEL: &str = "N/A";

/// One listing card flattened to strings.
///
/// Field declaration order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub name: String,
    pub cuisine: String,
    pub rating: String,
    pub delivery_time: String,
    pub distance: String,
    pub latitude: String,
    pub longitude: String,
    pub id: String,
}

impl ListingRecord {
    /// Column keys in output order
    pub const COLUMNS: [&'static str; 8] = [
        "name",
        "cuisine",
        "rating",
        "delivery_time",
        "distance",
        "latitude",
        "longitude",
        "id",
    ];

    /// `(key, value)` pairs in column order
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("name", &self.name),
            ("cuisine", &self.cuisine),
            ("rating", &self.rating),
            ("delivery_time", &self.delivery_time),
            ("distance", &self.distance),
            ("latitude", &self.latitude),
            ("longitude", &self.longitude),
            ("id", &self.id),
        ]
    }

    /// Number of fields holding the sentinel
    #[must_use]
    pub fn missing_fields(&self) -> usize {
        self.fields().iter().filter(|(_, v)| *v == SENTINEL).count()
    }
}

/// What happens to the rest of the enumeration when one card fails with a
/// browser error (as opposed to a missing element)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardErrorPolicy {
    /// Log the card, leave it out, keep going
    #[default]
    Skip,
    /// Stop enumerating and keep what was collected so far
    Abort,
}

/// A card that produced no record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedCard {
    /// Zero-based position of the card in document order
    pub index: usize,
    pub error: String,
}

/// Outcome of one enumeration pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Records in document order
    pub records: Vec<ListingRecord>,
    pub skipped: Vec<SkippedCard>,
    /// Cards present in the snapshot that was enumerated
    pub cards_found: usize,
    /// Set when `CardErrorPolicy::Abort` cut the pass short
    pub aborted: bool,
}
