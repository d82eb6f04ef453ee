//! Timeout wrapper for page operations
//!
//! `goto` and the load event can hang forever on pages with long-polling or
//! streaming responses. Every navigation step goes through here.

use anyhow::{Result, anyhow};
use std::future::Future;
use std::time::Duration;

/// Run `operation` under `limit`.
///
/// On expiry the error names `operation_name` and the bound, so a timeout is
/// distinguishable from the operation's own failure.
pub async fn with_page_timeout<F, T>(operation: F, limit: Duration, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(limit, operation)
        .await
        .unwrap_or_else(|_| Err(anyhow!("{operation_name} timed out after {limit:?}")))
}
