use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::{PlayerName, Snapshot, SnapshotRepository};

/// Process-local snapshot store. Contents are lost on restart.
#[derive(Default)]
pub struct MemorySnapshotRepository {
    rows: RwLock<Vec<Snapshot>>,
}

impl MemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotRepository for MemorySnapshotRepository {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        self.rows.write().await.push(snapshot.clone());
        Ok(())
    }

    async fn earliest_snapshot_since(
        &self,
        player: &PlayerName,
        since_ms: i64,
    ) -> Result<Option<Snapshot>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.player == player.as_str() && row.recorded_at_ms >= since_ms)
            .min_by_key(|row| row.recorded_at_ms)
            .cloned())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(player: &str, total: i64, at: i64) -> Snapshot {
        Snapshot {
            lookup_id: format!("{}-{}", player, at),
            player: player.to_string(),
            total_experience: total,
            raw_payload: String::new(),
            recorded_at_ms: at,
        }
    }

    #[tokio::test]
    async fn earliest_since_picks_oldest_row_at_or_after_cutoff() {
        let repo = MemorySnapshotRepository::new();
        repo.insert_snapshot(&snapshot("zezima", 300, 3_000)).await.expect("insert");
        repo.insert_snapshot(&snapshot("zezima", 100, 1_000)).await.expect("insert");
        repo.insert_snapshot(&snapshot("zezima", 200, 2_000)).await.expect("insert");
        repo.insert_snapshot(&snapshot("lynx", 50, 2_500)).await.expect("insert");

        let player = PlayerName::parse("Zezima").expect("name");
        let found = repo
            .earliest_snapshot_since(&player, 2_000)
            .await
            .expect("query")
            .expect("row");
        assert_eq!(found.total_experience, 200);
        assert_eq!(found.recorded_at_ms, 2_000);
    }

    #[tokio::test]
    async fn nothing_after_cutoff_returns_none() {
        let repo = MemorySnapshotRepository::new();
        repo.insert_snapshot(&snapshot("zezima", 100, 1_000)).await.expect("insert");
        let player = PlayerName::parse("zezima").expect("name");
        let found = repo.earliest_snapshot_since(&player, 1_001).await.expect("query");
        assert!(found.is_none());
    }
}
