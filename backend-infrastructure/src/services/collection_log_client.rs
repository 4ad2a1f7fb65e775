use anyhow::{bail, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use backend_domain::{CollectionLogCounts, CollectionLogSource, PlayerName, RuntimeConfig};

use crate::utils::{build_http_client, join_url};

pub struct CollectionLogClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CollectionLogEnvelope {
    #[serde(rename = "collectionLog")]
    collection_log: Option<CollectionLogBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionLogBody {
    total_obtained: Option<i64>,
    total_items: Option<i64>,
}

impl CollectionLogClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self::new(
            build_http_client(config)?,
            &config.collection_log_url,
        ))
    }

    fn user_url(&self, player: &PlayerName) -> String {
        join_url(
            &self.base_url,
            &format!("collectionlog/user/{}", player.as_str()),
        )
    }
}

/// `None` when the body carries no `collectionLog` object.
pub fn parse_collection_log(body: &str) -> Result<Option<CollectionLogCounts>> {
    let envelope: CollectionLogEnvelope = serde_json::from_str(body)?;
    Ok(envelope.collection_log.map(|log| CollectionLogCounts {
        obtained: log.total_obtained,
        total: log.total_items,
    }))
}

#[async_trait]
impl CollectionLogSource for CollectionLogClient {
    async fn fetch_collection_log(
        &self,
        player: &PlayerName,
    ) -> Result<Option<CollectionLogCounts>> {
        let response = self.client.get(self.user_url(player)).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            bail!("collection log responded {}", status);
        }
        let body = response.text().await?;
        parse_collection_log(&body)
    }
}
