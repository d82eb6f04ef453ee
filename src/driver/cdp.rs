//! chromiumoxide-backed page capability
//!
//! Lookups go through `find_elements` and take the first hit: chromiumoxide
//! reports a missing node from `find_element` as an error, which would be
//! indistinguishable from a dead connection.

use anyhow::{Context, Result};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use std::time::Duration;
use tracing::debug;

use super::{ElementHandle, PageDriver};
use crate::scrape_engine::page_timeout::with_page_timeout;

const DOCUMENT_HEIGHT_JS: &str = "document.body.scrollHeight";
const SCROLL_TO_BOTTOM_JS: &str = "window.scrollTo(0, document.body.scrollHeight);";
const CLEAR_VALUE_JS: &str = "function() { this.value = ''; this.dispatchEvent(new Event('input', { bubbles: true })); }";

/// A live Chromium tab
pub struct CdpPage {
    page: Page,
    navigation_timeout: Duration,
}

impl CdpPage {
    #[must_use]
    pub fn new(page: Page, navigation_timeout: Duration) -> Self {
        Self {
            page,
            navigation_timeout,
        }
    }
}

/// A node inside a live Chromium tab
pub struct CdpElement(Element);

impl ElementHandle for CdpElement {
    async fn find_first(&self, selector: &str) -> Result<Option<Self>> {
        Ok(self.find_all(selector).await?.into_iter().next())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self>> {
        let elements = self
            .0
            .find_elements(selector)
            .await
            .with_context(|| format!("Failed to query '{selector}' inside element"))?;
        Ok(elements.into_iter().map(CdpElement).collect())
    }

    async fn text(&self) -> Result<Option<String>> {
        self.0
            .inner_text()
            .await
            .context("Failed to read element text")
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.0
            .attribute(name)
            .await
            .with_context(|| format!("Failed to read attribute '{name}'"))
    }

    async fn click(&self) -> Result<()> {
        self.0.click().await.context("Failed to click element")?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.0
            .call_js_fn(CLEAR_VALUE_JS, false)
            .await
            .context("Failed to clear input value")?;
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<()> {
        self.0
            .type_str(text)
            .await
            .context("Failed to type into element")?;
        Ok(())
    }
}

impl PageDriver for CdpPage {
    type Element = CdpElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        with_page_timeout(
            async {
                self.page
                    .goto(url)
                    .await
                    .map(|_| ())
                    .with_context(|| format!("Failed to navigate to {url}"))
            },
            self.navigation_timeout,
            "Page navigation",
        )
        .await?;

        with_page_timeout(
            async {
                self.page
                    .wait_for_navigation()
                    .await
                    .map(|_| ())
                    .context("Failed to wait for page load")
            },
            self.navigation_timeout,
            "Page load",
        )
        .await?;

        debug!("Navigation to {url} complete");
        Ok(())
    }

    async fn find_first(&self, selector: &str) -> Result<Option<Self::Element>> {
        Ok(self.find_all(selector).await?.into_iter().next())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .with_context(|| format!("Failed to query '{selector}' on page"))?;
        Ok(elements.into_iter().map(CdpElement).collect())
    }

    async fn document_height(&self) -> Result<u64> {
        self.page
            .evaluate(DOCUMENT_HEIGHT_JS)
            .await
            .context("Failed to evaluate document height")?
            .into_value::<u64>()
            .context("Document height was not a number")
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.page
            .evaluate(SCROLL_TO_BOTTOM_JS)
            .await
            .context("Failed to scroll to bottom")?;
        Ok(())
    }
}
