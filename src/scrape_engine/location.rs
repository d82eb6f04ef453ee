//! Location search submission

use std::time::Duration;
use tracing::{debug, info};

use crate::driver::{ElementHandle, PageDriver};
use crate::error::{ScrapeError, ScrapeResult};
use crate::listing::LocationForm;

/// Type `location` into the search box and submit it.
///
/// The input is focused, left to settle for `settle`, cleared, typed into,
/// and then the submit control is clicked. Either control being absent is a
/// fatal precondition failure.
pub async fn submit_location<P: PageDriver>(
    page: &P,
    form: &LocationForm,
    location: &str,
    settle: Duration,
) -> ScrapeResult<()> {
    let input = page
        .find_first(&form.input)
        .await?
        .ok_or_else(|| ScrapeError::LocationInputMissing(form.input.clone()))?;

    input.click().await?;
    debug!("Focused location input, settling for {:?}", settle);
    tokio::time::sleep(settle).await;

    input.clear().await?;
    input.type_text(location).await?;

    let submit = page
        .find_first(&form.submit)
        .await?
        .ok_or_else(|| ScrapeError::SubmitControlMissing(form.submit.clone()))?;

    submit.click().await?;
    info!("Submitted location search: {}", location);
    Ok(())
}
