use std::sync::Arc;

use backend_domain::ports::{
    ChecklistRepository, CollectionLogSource, HealthCheckService, ScoreboardSource,
    SnapshotRepository,
};
use backend_domain::{ChecklistState, RuntimeConfig};
use tokio::sync::RwLock;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub scoreboard: Arc<dyn ScoreboardSource>,
    pub collection_log: Arc<dyn CollectionLogSource>,
    pub snapshot_repo: Arc<dyn SnapshotRepository>,
    pub checklist_repo: Arc<dyn ChecklistRepository>,
    pub health_service: Arc<dyn HealthCheckService>,
    pub checklist: Arc<RwLock<ChecklistState>>,
    pub metrics: Arc<Metrics>,
}
