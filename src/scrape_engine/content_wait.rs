//! Bounded wait for rendered listing content

use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::driver::PageDriver;
use crate::error::{ScrapeError, ScrapeResult};

/// Poll until at least one element matches `selector`.
///
/// A failed query counts as "not present yet". Returns
/// [`ScrapeError::ContentTimeout`] once `timeout` has elapsed without a match.
pub async fn wait_for_listings<P: PageDriver>(
    page: &P,
    selector: &str,
    timeout: Duration,
    poll_interval: Duration,
) -> ScrapeResult<()> {
    let start = Instant::now();

    info!("Waiting for listings to appear in DOM");

    loop {
        match page.find_first(selector).await {
            Ok(Some(_)) => {
                info!("Listings found in DOM after {:?}", start.elapsed());
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => debug!("Listing probe failed, retrying: {e:#}"),
        }

        if start.elapsed() >= timeout {
            warn!("No element matched '{}' within {:?}", selector, timeout);
            return Err(ScrapeError::ContentTimeout {
                selector: selector.to_string(),
                timeout,
            });
        }

        tokio::time::sleep(poll_interval).await;
    }
}
