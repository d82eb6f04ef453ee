//! Per-card field extraction
//!
//! Every lookup is scoped to the card. A missing element or malformed blob
//! turns into the sentinel; only backend errors propagate, and those fail the
//! whole card.

use anyhow::Result;
use tracing::trace;
use url::Url;

use super::selectors::{CoordinateRule, DeliveryRule, DetailLinkRule, ListingSelectors};
use super::types::{ListingRecord, SENTINEL};
use crate::driver::ElementHandle;

/// Base for resolving relative detail hrefs; only the path is kept
const RELATIVE_BASE: &str = "https://listing.invalid/";

/// Why a field fell back to the sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Miss {
    ElementNotFound,
    StructuralMismatch,
}

fn sentinel(field: &str, miss: Miss) -> String {
    trace!(field, ?miss, "field unreadable, using sentinel");
    SENTINEL.to_string()
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Trimmed text of the first match, or the sentinel
pub async fn text_field<E: ElementHandle>(
    card: &E,
    field: &str,
    selector: &str,
) -> Result<String> {
    let Some(element) = card.find_first(selector).await? else {
        return Ok(sentinel(field, Miss::ElementNotFound));
    };
    Ok(non_empty(element.text().await?)
        .unwrap_or_else(|| sentinel(field, Miss::StructuralMismatch)))
}

/// Split a "25 min • 3.2 km" blob into its two halves.
///
/// Returns `None` when the separator is absent. Extra parts are ignored.
#[must_use]
pub fn split_delivery(blob: &str, separator: &str) -> Option<(String, String)> {
    let mut parts = blob.trim().split(separator);
    let first = parts.next()?.trim();
    let second = parts.next()?.trim();
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first.to_string(), second.to_string()))
}

/// `(delivery_time, distance)`, both sentinel when either is unreadable
pub async fn delivery_fields<E: ElementHandle>(
    card: &E,
    rule: &DeliveryRule,
) -> Result<(String, String)> {
    let cells = card.find_all(&rule.selector).await?;
    let Some(cell) = cells.get(rule.index) else {
        return Ok((
            sentinel("delivery_time", Miss::ElementNotFound),
            sentinel("distance", Miss::ElementNotFound),
        ));
    };

    let blob = cell.text().await?.unwrap_or_default();
    Ok(split_delivery(&blob, &rule.separator).unwrap_or_else(|| {
        (
            sentinel("delivery_time", Miss::StructuralMismatch),
            sentinel("distance", Miss::StructuralMismatch),
        )
    }))
}

/// `(latitude, longitude)` according to whichever markup generation the
/// rule describes
pub async fn coordinate_fields<E: ElementHandle>(
    card: &E,
    rule: &CoordinateRule,
) -> Result<(String, String)> {
    match rule {
        CoordinateRule::DataAttributes {
            selector,
            latitude_attribute,
            longitude_attribute,
        } => {
            let Some(element) = card.find_first(selector).await? else {
                return Ok((
                    sentinel("latitude", Miss::ElementNotFound),
                    sentinel("longitude", Miss::ElementNotFound),
                ));
            };
            let latitude = non_empty(element.attribute(latitude_attribute).await?)
                .unwrap_or_else(|| sentinel("latitude", Miss::StructuralMismatch));
            let longitude = non_empty(element.attribute(longitude_attribute).await?)
                .unwrap_or_else(|| sentinel("longitude", Miss::StructuralMismatch));
            Ok((latitude, longitude))
        }
        CoordinateRule::SeparateElements {
            latitude_selector,
            longitude_selector,
        } => {
            let latitude = card.find_first(latitude_selector).await?;
            let longitude = card.find_first(longitude_selector).await?;
            let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
                return Ok((
                    sentinel("latitude", Miss::ElementNotFound),
                    sentinel("longitude", Miss::ElementNotFound),
                ));
            };
            let latitude = non_empty(latitude.text().await?)
                .unwrap_or_else(|| sentinel("latitude", Miss::StructuralMismatch));
            let longitude = non_empty(longitude.text().await?)
                .unwrap_or_else(|| sentinel("longitude", Miss::StructuralMismatch));
            Ok((latitude, longitude))
        }
    }
}

/// Final non-empty path segment of a detail link, ignoring query and fragment.
///
/// Relative hrefs are accepted.
#[must_use]
pub fn restaurant_id_from_href(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let url = Url::parse(href)
        .or_else(|_| Url::parse(RELATIVE_BASE).and_then(|base| base.join(href)))
        .ok()?;
    url.path_segments()?
        .rfind(|segment| !segment.is_empty())
        .map(str::to_owned)
}

pub async fn id_field<E: ElementHandle>(card: &E, rule: &DetailLinkRule) -> Result<String> {
    let Some(link) = card.find_first(&rule.selector).await? else {
        return Ok(sentinel("id", Miss::ElementNotFound));
    };
    let href = link.attribute(&rule.attribute).await?;
    Ok(href
        .as_deref()
        .and_then(restaurant_id_from_href)
        .unwrap_or_else(|| sentinel("id", Miss::StructuralMismatch)))
}

/// Build one record from one card
pub async fn extract_card<E: ElementHandle>(
    card: &E,
    selectors: &ListingSelectors,
) -> Result<ListingRecord> {
    let name = text_field(card, "name", &selectors.name).await?;
    let cuisine = text_field(card, "cuisine", &selectors.cuisine).await?;
    let rating = text_field(card, "rating", &selectors.rating).await?;
    let (delivery_time, distance) = delivery_fields(card, &selectors.delivery).await?;
    let (latitude, longitude) = coordinate_fields(card, &selectors.coordinates).await?;
    let id = id_field(card, &selectors.detail_link).await?;

    Ok(ListingRecord {
        name,
        cuisine,
        rating,
        delivery_time,
        distance,
        latitude,
        longitude,
        id,
    })
}
