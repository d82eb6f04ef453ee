//! End-to-end scrape flow

use std::path::{Path, PathBuf};
use tracing::info;

use super::content_wait::wait_for_listings;
use super::location::submit_location;
use super::scroll::scroll_to_stable;
use crate::config::ScrapeConfig;
use crate::driver::{PageDriver, SnapshotPage};
use crate::error::{ScrapeError, ScrapeResult};
use crate::listing::{ExtractionReport, SkippedCard, extract_listings};
use crate::output::save_records;
use crate::session::BrowserSession;

/// What a finished run wrote
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub records_written: usize,
    pub cards_found: usize,
    pub skipped: Vec<SkippedCard>,
    pub aborted: bool,
}

/// Drive `page` through search, load and extraction.
///
/// Navigation, location submission, the content wait and scroll-to-stable
/// run strictly in order; any failure before extraction is fatal.
pub async fn scrape<P: PageDriver>(
    page: &P,
    config: &ScrapeConfig,
) -> ScrapeResult<ExtractionReport> {
    info!("Navigating to {}", config.url());
    page.navigate(config.url())
        .await
        .map_err(|e| ScrapeError::Navigation(format!("{e:#}")))?;

    let selectors = config.selectors();
    submit_location(
        page,
        &selectors.location_form,
        config.location(),
        config.input_settle_delay(),
    )
    .await?;

    wait_for_listings(
        page,
        &selectors.card,
        config.content_wait_timeout(),
        config.content_poll_interval(),
    )
    .await?;

    let outcome = scroll_to_stable(
        page,
        config.scroll_settle_delay(),
        config.max_scroll_iterations(),
    )
    .await?;
    info!(
        "Scrolling finished after {} scrolls (height {})",
        outcome.scrolls(),
        outcome.height()
    );

    Ok(extract_listings(page, selectors, config.card_error_policy()).await?)
}

/// Launch a browser, scrape, close the browser and save the records.
///
/// The session is closed before the result of the scrape is inspected, so
/// it is released on every path. Nothing is written when the scrape fails.
pub async fn run(config: &ScrapeConfig) -> ScrapeResult<RunSummary> {
    let session = BrowserSession::launch(config).await?;

    let scraped = match session.new_page(config.navigation_timeout()).await {
        Ok(page) => scrape(&page, config).await,
        Err(e) => Err(e.into()),
    };

    session.close().await;

    finish(scraped?, config).await
}

/// Extract from a saved HTML document instead of a live page.
pub async fn run_offline(html_path: &Path, config: &ScrapeConfig) -> ScrapeResult<RunSummary> {
    info!("Extracting listings from {}", html_path.display());
    let html = tokio::fs::read_to_string(html_path).await?;
    let page = SnapshotPage::parse(&html);

    let report = extract_listings(&page, config.selectors(), config.card_error_policy()).await?;
    finish(report, config).await
}

async fn finish(report: ExtractionReport, config: &ScrapeConfig) -> ScrapeResult<RunSummary> {
    let ExtractionReport {
        records,
        skipped,
        cards_found,
        aborted,
    } = report;
    let records_written = records.len();

    let output_path = save_records(
        records,
        config.output_path().to_path_buf(),
        config.output_format(),
    )
    .await?;

    Ok(RunSummary {
        output_path,
        records_written,
        cards_found,
        skipped,
        aborted,
    })
}
