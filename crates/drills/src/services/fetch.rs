//! Async data source used by the async-assertion drills

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

/// A rejected fetch, with the reason the source gave
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FetchError {
    pub reason: String,
}

/// Where `fetch_data` gets its numbers from
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load(&self) -> Result<Vec<i32>, FetchError>;
}

/// The built-in sample set, `[1, 2, 3]`
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

#[async_trait]
impl DataSource for SampleData {
    async fn load(&self) -> Result<Vec<i32>, FetchError> {
        tokio::task::yield_now().await;
        Ok(vec![1, 2, 3])
    }
}

/// Fetch a non-empty list of numbers from `source`.
///
/// # Errors
///
/// Returns the source's `FetchError`, or one of its own if the source
/// resolved to nothing.
pub async fn fetch_data(source: &dyn DataSource) -> Result<Vec<i32>, FetchError> {
    let data = source.load().await.inspect_err(|e| {
        warn!(reason = %e.reason, "data source rejected fetch");
    })?;
    if data.is_empty() {
        return Err(FetchError {
            reason: "fetch failed: source returned no data".to_string(),
        });
    }
    Ok(data)
}
