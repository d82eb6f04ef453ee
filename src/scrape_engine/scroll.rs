//! Scroll-to-stable loading of lazily rendered listings

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::driver::PageDriver;
use crate::error::ScrapeResult;

/// How the scroll loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Document height stopped growing after a scroll
    Stable { scrolls: usize, height: u64 },
    /// The iteration cap was hit while the page was still growing
    CapReached { scrolls: usize, height: u64 },
}

impl ScrollOutcome {
    #[must_use]
    pub fn scrolls(&self) -> usize {
        match self {
            Self::Stable { scrolls, .. } | Self::CapReached { scrolls, .. } => *scrolls,
        }
    }

    #[must_use]
    pub fn height(&self) -> u64 {
        match self {
            Self::Stable { height, .. } | Self::CapReached { height, .. } => *height,
        }
    }
}

/// Scroll to the bottom until the document height stops changing.
///
/// After each scroll the loop sleeps for `settle` and re-measures. Equal
/// consecutive heights end the loop; after `max_iterations` scrolls it ends
/// anyway with [`ScrollOutcome::CapReached`].
pub async fn scroll_to_stable<P: PageDriver>(
    page: &P,
    settle: Duration,
    max_iterations: usize,
) -> ScrapeResult<ScrollOutcome> {
    let mut last_height = page.document_height().await?;
    debug!("Initial document height: {}", last_height);

    for scrolls in 1..=max_iterations {
        page.scroll_to_bottom().await?;
        tokio::time::sleep(settle).await;

        let new_height = page.document_height().await?;
        if new_height == last_height {
            info!(
                "Document height stable at {} after {} scrolls",
                new_height, scrolls
            );
            return Ok(ScrollOutcome::Stable {
                scrolls,
                height: new_height,
            });
        }

        debug!("Document height grew {} -> {}", last_height, new_height);
        last_height = new_height;
    }

    warn!(
        "Stopped scrolling after {} iterations with height still changing ({})",
        max_iterations, last_height
    );
    Ok(ScrollOutcome::CapReached {
        scrolls: max_iterations,
        height: last_height,
    })
}
