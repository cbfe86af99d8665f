//! Timeout enforcement.

use std::future::Future;
use std::time::Duration;

use tokio::time::error::Elapsed;

/// Run `fut`, giving up after `limit` when one is set.
pub async fn with_timeout<F>(limit: Option<Duration>, fut: F) -> Result<F::Output, Elapsed>
where
    F: Future,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut).await,
        None => Ok(fut.await),
    }
}

/// Convert a `*_secs` config value to a deadline; zero disables it.
pub fn from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
