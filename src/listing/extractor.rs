//! Enumeration over every card in the final DOM snapshot

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use super::fields::extract_card;
use super::selectors::ListingSelectors;
use super::types::{CardErrorPolicy, ExtractionReport, SkippedCard};
use crate::driver::PageDriver;

/// Extract one record per card, in document order.
///
/// The card list is queried once; cards rendered after that query are not
/// picked up. A card that fails with a backend error is handled according to
/// `policy`. Failing to query the card list at all is returned as an error.
pub async fn extract_listings<P: PageDriver>(
    page: &P,
    selectors: &ListingSelectors,
    policy: CardErrorPolicy,
) -> Result<ExtractionReport> {
    let cards = page
        .find_all(&selectors.card)
        .await
        .with_context(|| format!("Failed to enumerate listing cards '{}'", selectors.card))?;

    info!("Found {} listing cards", cards.len());

    let mut report = ExtractionReport {
        records: Vec::with_capacity(cards.len()),
        cards_found: cards.len(),
        ..ExtractionReport::default()
    };

    for (index, card) in cards.iter().enumerate() {
        match extract_card(card, selectors).await {
            Ok(record) => report.records.push(record),
            Err(e) => {
                let message = format!("{e:#}");
                match policy {
                    CardErrorPolicy::Skip => {
                        warn!("Skipping listing card {}: {}", index + 1, message);
                        report.skipped.push(SkippedCard {
                            index,
                            error: message,
                        });
                    }
                    CardErrorPolicy::Abort => {
                        error!(
                            "Error while extracting listing card {}, stopping enumeration: {}",
                            index + 1,
                            message
                        );
                        report.skipped.push(SkippedCard {
                            index,
                            error: message,
                        });
                        report.aborted = true;
                        break;
                    }
                }
            }
        }
    }

    info!(
        "Extracted {} records ({} cards skipped{})",
        report.records.len(),
        report.skipped.len(),
        if report.aborted { ", aborted" } else { "" }
    );

    Ok(report)
}
