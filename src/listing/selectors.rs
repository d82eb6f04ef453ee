//! Declarative selector table for listing cards
//!
//! The defaults target the build-hashed class names of the food delivery
//! listing markup. When the site ships new markup, only this table (or a JSON
//! file loaded over it) needs editing.

use serde::{Deserialize, Serialize};

/// Location search form controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationForm {
    pub input: String,
    pub submit: String,
}

impl Default for LocationForm {
    fn default() -> Self {
        Self {
            input: "#location-input".to_string(),
            submit: ".ant-btn.submitBtn___2roqB.ant-btn-primary".to_string(),
        }
    }
}

/// Two-part "delivery time • distance" text blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryRule {
    /// Matches every numbers cell in the card
    pub selector: String,
    /// Which match carries the delivery blob
    pub index: usize,
    pub separator: String,
}

impl Default for DeliveryRule {
    fn default() -> Self {
        Self {
            selector: ".numbers___2xZGn .numbersChild___2qKMV".to_string(),
            index: 1,
            separator: " \u{2022} ".to_string(),
        }
    }
}

/// Where a card keeps its coordinates. Both markup generations are in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoordinateRule {
    /// One element carrying both values as attributes
    DataAttributes {
        selector: String,
        latitude_attribute: String,
        longitude_attribute: String,
    },
    /// Two elements carrying the values as text
    SeparateElements {
        latitude_selector: String,
        longitude_selector: String,
    },
}

impl CoordinateRule {
    #[must_use]
    pub fn separate_elements() -> Self {
        Self::SeparateElements {
            latitude_selector: ".latitude___1B8CS".to_string(),
            longitude_selector: ".longitude___1EplB".to_string(),
        }
    }
}

impl Default for CoordinateRule {
    fn default() -> Self {
        Self::DataAttributes {
            selector: ".merchant-latlng".to_string(),
            latitude_attribute: "data-lat".to_string(),
            longitude_attribute: "data-lng".to_string(),
        }
    }
}

/// Link to the restaurant detail page; the id is its last path segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailLinkRule {
    pub selector: String,
    pub attribute: String,
}

impl Default for DetailLinkRule {
    fn default() -> Self {
        Self {
            selector: "a[href*='/sg/en/restaurant']".to_string(),
            attribute: "href".to_string(),
        }
    }
}

/// Per-field lookup rules, all scoped to a single card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSelectors {
    pub card: String,
    pub name: String,
    pub cuisine: String,
    pub rating: String,
    pub delivery: DeliveryRule,
    pub coordinates: CoordinateRule,
    pub detail_link: DetailLinkRule,
    pub location_form: LocationForm,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            card: ".ant-col-24.RestaurantListCol___1FZ8V".to_string(),
            name: ".name___2epcT".to_string(),
            cuisine: ".cuisine___T2tCh".to_string(),
            rating: ".ant-rate-text".to_string(),
            delivery: DeliveryRule::default(),
            coordinates: CoordinateRule::default(),
            detail_link: DetailLinkRule::default(),
            location_form: LocationForm::default(),
        }
    }
}

impl ListingSelectors {
    /// Parse a selector table from JSON. Omitted keys keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Every selector in the table that must be non-empty
    pub(crate) fn required(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![
            ("card", self.card.as_str()),
            ("name", self.name.as_str()),
            ("cuisine", self.cuisine.as_str()),
            ("rating", self.rating.as_str()),
            ("delivery.selector", self.delivery.selector.as_str()),
            ("detail_link.selector", self.detail_link.selector.as_str()),
            ("detail_link.attribute", self.detail_link.attribute.as_str()),
            ("location_form.input", self.location_form.input.as_str()),
            ("location_form.submit", self.location_form.submit.as_str()),
        ];
        match &self.coordinates {
            CoordinateRule::DataAttributes {
                selector,
                latitude_attribute,
                longitude_attribute,
            } => {
                out.push(("coordinates.selector", selector.as_str()));
                out.push(("coordinates.latitude_attribute", latitude_attribute.as_str()));
                out.push(("coordinates.longitude_attribute", longitude_attribute.as_str()));
            }
            CoordinateRule::SeparateElements {
                latitude_selector,
                longitude_selector,
            } => {
                out.push(("coordinates.latitude_selector", latitude_selector.as_str()));
                out.push(("coordinates.longitude_selector", longitude_selector.as_str()));
            }
        }
        out
    }
}
