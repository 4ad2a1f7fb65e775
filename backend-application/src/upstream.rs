use std::future::Future;
use std::time::Duration;

use anyhow::anyhow;

use crate::AppState;

/// Per-call bound for outbound requests.
pub fn upstream_limit(state: &AppState) -> Duration {
    Duration::from_secs(state.config.upstream_timeout_seconds.max(1))
}

pub async fn bounded<T, F>(limit: Duration, future: F) -> anyhow::Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => Err(anyhow!("timed out after {}s", limit.as_secs())),
    }
}
