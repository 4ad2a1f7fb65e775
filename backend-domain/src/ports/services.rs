use async_trait::async_trait;

use crate::entities::CollectionLogCounts;
use crate::value_objects::PlayerName;

/// Live hiscores. Returns the raw positional payload.
#[async_trait]
pub trait ScoreboardSource: Send + Sync {
    async fn fetch_scoreboard(&self, player: &PlayerName) -> anyhow::Result<String>;
}

/// Opt-in collection log tracker. `Ok(None)` means the player has no record.
#[async_trait]
pub trait CollectionLogSource: Send + Sync {
    async fn fetch_collection_log(
        &self,
        player: &PlayerName,
    ) -> anyhow::Result<Option<CollectionLogCounts>>;
}

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_snapshot_store(&self) -> anyhow::Result<bool>;
}
