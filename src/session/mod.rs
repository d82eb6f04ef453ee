//! Scoped browser session
//!
//! A session owns the browser process, its CDP handler task and the profile
//! directory. `close()` shuts all three down in order; `Drop` is the fallback
//! when a session is abandoned without it.

use anyhow::{Context, Result};
use chromiumoxide::browser::Browser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::browser_setup::{launch_browser, remove_profile_dir};
use crate::config::ScrapeConfig;
use crate::driver::CdpPage;

pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserSession {
    /// Launch a browser according to `config`
    pub async fn launch(config: &ScrapeConfig) -> Result<Self> {
        let (browser, handler, user_data_dir) =
            launch_browser(config.headless(), config.chrome_executable().cloned()).await?;
        Ok(Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        })
    }

    /// Open a blank tab
    pub async fn new_page(&self, navigation_timeout: Duration) -> Result<CdpPage> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("Failed to create page")?;
        Ok(CdpPage::new(page, navigation_timeout))
    }

    /// Close the browser, wait for the process to exit, then remove the profile.
    ///
    /// Failures are logged and never returned; this runs on every exit path.
    pub async fn close(mut self) {
        info!("Closing browser session");
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        self.handler.abort();
        self.cleanup_profile_dir();
    }

    fn cleanup_profile_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            remove_profile_dir(&path);
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        if self.user_data_dir.is_some() {
            warn!("BrowserSession dropped without close()");
            self.cleanup_profile_dir();
        }
    }
}
