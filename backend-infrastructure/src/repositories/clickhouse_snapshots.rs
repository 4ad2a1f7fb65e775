use anyhow::Result;
use async_trait::async_trait;
use clickhouse::Client;

use backend_domain::{DbConfig, PlayerName, Snapshot, SnapshotRepository, SnapshotRow};

const SNAPSHOT_TABLE: &str = "player_snapshots";

#[derive(Clone)]
pub struct ClickhouseSnapshotRepository {
    client: Client,
    database: String,
}

impl ClickhouseSnapshotRepository {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub fn from_config(config: &DbConfig) -> Self {
        let mut client = Client::default()
            .with_url(&config.clickhouse_url)
            .with_database(&config.clickhouse_database);
        if let Some(user) = &config.clickhouse_user {
            client = client.with_user(user);
        }
        if let Some(password) = &config.clickhouse_password {
            client = client.with_password(password);
        }
        Self::new(client, config.clickhouse_database.clone())
    }
}

#[async_trait]
impl SnapshotRepository for ClickhouseSnapshotRepository {
    async fn ensure_schema(&self) -> Result<()> {
        let create_db = format!("CREATE DATABASE IF NOT EXISTS {}", self.database);
        self.client.query(&create_db).execute().await?;

        // Rows are kept indefinitely; retention is managed outside the service.
        let create_snapshots = r#"
CREATE TABLE IF NOT EXISTS player_snapshots (
    recorded_at DateTime64(3),
    lookup_id String,
    player String,
    total_experience Int64,
    raw_payload String
) ENGINE = MergeTree
ORDER BY (player, recorded_at)
"#;
        self.client.query(create_snapshots).execute().await?;
        Ok(())
    }

    async fn insert_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let mut insert = self.client.insert(SNAPSHOT_TABLE)?;
        insert.write(&SnapshotRow::from(snapshot)).await?;
        insert.end().await?;
        Ok(())
    }

    async fn earliest_snapshot_since(
        &self,
        player: &PlayerName,
        since_ms: i64,
    ) -> Result<Option<Snapshot>> {
        let rows = self
            .client
            .query(
                "SELECT ?fields FROM player_snapshots \
                 WHERE player = ? AND recorded_at >= fromUnixTimestamp64Milli(toInt64(?)) \
                 ORDER BY recorded_at ASC LIMIT 1",
            )
            .bind(player.as_str())
            .bind(since_ms)
            .fetch_all::<SnapshotRow>()
            .await?;
        Ok(rows.into_iter().next().map(Snapshot::from))
    }

    async fn ping(&self) -> Result<()> {
        let _: u8 = self.client.query("SELECT toUInt8(1)").fetch_one().await?;
        Ok(())
    }
}
