// Fake ports for application tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::ports::{
    ChecklistRepository, CollectionLogSource, HealthCheckService, ScoreboardSource,
    SnapshotRepository,
};
use backend_domain::{
    ChecklistState, CollectionLogCounts, PlayerName, RuntimeConfig, Snapshot,
};

use crate::{AppState, Metrics};

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:3234".to_string(),
        hiscores_url: "http://hiscores.invalid".to_string(),
        collection_log_url: "http://collectionlog.invalid".to_string(),
        wise_old_man_url: "http://wiseoldman.invalid".to_string(),
        temple_url: "http://temple.invalid".to_string(),
        user_agent: "skillscape-test".to_string(),
        upstream_timeout_seconds: 2,
        max_body_bytes: 1024,
        request_timeout_seconds: 5,
        checklist_path: "checklist.json".to_string(),
        refresh_account: None,
        refresh_output_path: "stats.json".to_string(),
        refresh_interval_minutes: 0,
        refresh_fallback_obtained: 0,
    }
}

/// 24 skill rows followed by activity rows through row 84.
pub fn scoreboard_payload(total_experience: i64, bosses: &[(usize, i64)]) -> String {
    let mut lines = vec![format!("1200,1850,{}", total_experience)];
    for row in 1..24 {
        lines.push(format!("{},70,737627", 5000 + row));
    }
    for row in 24..=84 {
        let score = bosses
            .iter()
            .find(|(index, _)| *index == row)
            .map(|(_, score)| *score)
            .unwrap_or(-1);
        lines.push(format!("-1,{}", score));
    }
    lines.join("\n")
}

pub fn snapshot_at(player: &str, total_experience: i64, recorded_at_ms: i64) -> Snapshot {
    Snapshot {
        lookup_id: format!("seed-{}-{}", player, recorded_at_ms),
        player: player.to_string(),
        total_experience,
        raw_payload: String::new(),
        recorded_at_ms,
    }
}

#[derive(Default)]
pub struct FakeScoreboard {
    response: Mutex<Option<Result<String, String>>>,
    last_player: Mutex<Option<String>>,
    hang: AtomicBool,
    calls: AtomicUsize,
}

impl FakeScoreboard {
    pub fn respond_with(&self, payload: String) {
        *self.response.lock().expect("lock") = Some(Ok(payload));
    }

    pub fn fail_with(&self, reason: &str) {
        *self.response.lock().expect("lock") = Some(Err(reason.to_string()));
    }

    /// Never answers.
    pub fn hang(&self) {
        self.hang.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_player(&self) -> Option<String> {
        self.last_player.lock().expect("lock").clone()
    }
}

#[async_trait]
impl ScoreboardSource for FakeScoreboard {
    async fn fetch_scoreboard(&self, player: &PlayerName) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_player.lock().expect("lock") = Some(player.to_string());
        if self.hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        match self.response.lock().expect("lock").clone() {
            Some(Ok(payload)) => Ok(payload),
            Some(Err(reason)) => Err(anyhow!(reason)),
            None => Err(anyhow!("no scoreboard configured")),
        }
    }
}

#[derive(Default)]
pub struct FakeCollectionLog {
    response: Mutex<Option<Result<Option<CollectionLogCounts>, String>>>,
    hang: AtomicBool,
    calls: AtomicUsize,
}

impl FakeCollectionLog {
    pub fn respond_with(&self, counts: Option<CollectionLogCounts>) {
        *self.response.lock().expect("lock") = Some(Ok(counts));
    }

    pub fn fail_with(&self, reason: &str) {
        *self.response.lock().expect("lock") = Some(Err(reason.to_string()));
    }

    pub fn hang(&self) {
        self.hang.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollectionLogSource for FakeCollectionLog {
    async fn fetch_collection_log(
        &self,
        _player: &PlayerName,
    ) -> anyhow::Result<Option<CollectionLogCounts>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        match self.response.lock().expect("lock").clone() {
            Some(Ok(counts)) => Ok(counts),
            Some(Err(reason)) => Err(anyhow!(reason)),
            None => Ok(None),
        }
    }
}

#[derive(Default)]
pub struct FakeSnapshots {
    rows: Mutex<Vec<Snapshot>>,
    unreachable: AtomicBool,
    insert_calls: AtomicUsize,
    query_calls: AtomicUsize,
}

impl FakeSnapshots {
    pub fn seed(&self, snapshot: Snapshot) {
        self.rows.lock().expect("lock").push(snapshot);
    }

    pub fn set_unreachable(&self) {
        self.unreachable.store(true, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<Snapshot> {
        self.rows.lock().expect("lock").clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotRepository for FakeSnapshots {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn insert_snapshot(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(anyhow!("connection refused"));
        }
        self.rows.lock().expect("lock").push(snapshot.clone());
        Ok(())
    }

    async fn earliest_snapshot_since(
        &self,
        player: &PlayerName,
        since_ms: i64,
    ) -> anyhow::Result<Option<Snapshot>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(anyhow!("connection refused"));
        }
        Ok(self
            .rows
            .lock()
            .expect("lock")
            .iter()
            .filter(|row| row.player == player.as_str() && row.recorded_at_ms >= since_ms)
            .min_by_key(|row| row.recorded_at_ms)
            .cloned())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(anyhow!("connection refused"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeChecklistStore {
    saved: Mutex<Option<ChecklistState>>,
    fail: AtomicBool,
}

impl FakeChecklistStore {
    pub fn saved(&self) -> Option<ChecklistState> {
        self.saved.lock().expect("lock").clone()
    }

    pub fn set_failing(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChecklistRepository for FakeChecklistStore {
    async fn load_checklist(&self, _path: &str) -> anyhow::Result<ChecklistState> {
        Ok(self.saved().unwrap_or_default())
    }

    async fn save_checklist(&self, _path: &str, state: &ChecklistState) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("read-only file system"));
        }
        *self.saved.lock().expect("lock") = Some(state.clone());
        Ok(())
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheckService for AlwaysHealthy {
    async fn check_snapshot_store(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

pub struct TestHarness {
    pub state: AppState,
    pub scoreboard: Arc<FakeScoreboard>,
    pub collection_log: Arc<FakeCollectionLog>,
    pub snapshots: Arc<FakeSnapshots>,
    pub checklist_store: Arc<FakeChecklistStore>,
}

impl TestHarness {
    pub fn new() -> Self {
        let scoreboard = Arc::new(FakeScoreboard::default());
        let collection_log = Arc::new(FakeCollectionLog::default());
        let snapshots = Arc::new(FakeSnapshots::default());
        let checklist_store = Arc::new(FakeChecklistStore::default());
        let state = AppState {
            config: runtime_config(),
            scoreboard: scoreboard.clone(),
            collection_log: collection_log.clone(),
            snapshot_repo: snapshots.clone(),
            checklist_repo: checklist_store.clone(),
            health_service: Arc::new(AlwaysHealthy),
            checklist: Arc::new(RwLock::new(ChecklistState::default())),
            metrics: Arc::new(Metrics::default()),
        };
        Self {
            state,
            scoreboard,
            collection_log,
            snapshots,
            checklist_store,
        }
    }
}
