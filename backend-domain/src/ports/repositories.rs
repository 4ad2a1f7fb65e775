use async_trait::async_trait;

use crate::entities::{ChecklistState, Snapshot};
use crate::value_objects::PlayerName;

#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;
    async fn insert_snapshot(&self, snapshot: &Snapshot) -> anyhow::Result<()>;
    /// Oldest snapshot for `player` recorded at or after `since_ms`.
    async fn earliest_snapshot_since(
        &self,
        player: &PlayerName,
        since_ms: i64,
    ) -> anyhow::Result<Option<Snapshot>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    async fn load_checklist(&self, path: &str) -> anyhow::Result<ChecklistState>;
    async fn save_checklist(&self, path: &str, state: &ChecklistState) -> anyhow::Result<()>;
}
