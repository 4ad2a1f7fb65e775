use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

use backend_domain::RuntimeConfig;

/// Shared outbound client: configured user agent, per-request timeout.
pub fn build_http_client(config: &RuntimeConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.upstream_timeout_seconds.max(1)))
        .build()?;
    Ok(client)
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
