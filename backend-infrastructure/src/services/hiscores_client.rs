use anyhow::{bail, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use backend_domain::{PlayerName, RuntimeConfig, ScoreboardSource};

use crate::utils::build_http_client;

pub struct HiscoresClient {
    client: Client,
    base_url: String,
}

impl HiscoresClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self::new(build_http_client(config)?, &config.hiscores_url))
    }
}

#[async_trait]
impl ScoreboardSource for HiscoresClient {
    async fn fetch_scoreboard(&self, player: &PlayerName) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("player", player.as_str())])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            bail!("hiscores responded {}", status);
        }
        let body = response.text().await?;
        debug!(player = %player, bytes = body.len(), "hiscores payload received");
        Ok(body)
    }
}
