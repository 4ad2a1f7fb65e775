use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::{info, warn};

use backend_application::{AppState, Metrics};
use backend_domain::{ChecklistRepository, SnapshotRepository};
use backend_infrastructure::{
    AppConfig, ChecklistFileRepository, ClickhouseSnapshotRepository, CollectionLogClient,
    DefaultHealthService, HiscoresClient, MemorySnapshotRepository,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let snapshot_repo: Arc<dyn SnapshotRepository> = match db_config.snapshot_store.as_str()
        {
            "memory" => {
                warn!("using in-memory snapshot store, gains reset on restart");
                Arc::new(MemorySnapshotRepository::new())
            }
            _ => Arc::new(ClickhouseSnapshotRepository::from_config(&db_config)),
        };
        match snapshot_repo.ensure_schema().await {
            Ok(()) => info!(store = %db_config.snapshot_store, "snapshot store ready"),
            Err(err) => warn!(
                store = %db_config.snapshot_store,
                "snapshot schema not ensured, serving without baselines: {}", err
            ),
        }

        let checklist_repo = Arc::new(ChecklistFileRepository::new());
        let checklist = match checklist_repo
            .load_checklist(&runtime_config.checklist_path)
            .await
        {
            Ok(state) => state,
            Err(err) => {
                warn!(path = %runtime_config.checklist_path, "checklist not loaded: {}", err);
                Default::default()
            }
        };

        let state = AppState {
            scoreboard: Arc::new(HiscoresClient::from_config(&runtime_config)?),
            collection_log: Arc::new(CollectionLogClient::from_config(&runtime_config)?),
            health_service: Arc::new(DefaultHealthService::new(snapshot_repo.clone())),
            snapshot_repo,
            checklist_repo,
            checklist: Arc::new(RwLock::new(checklist)),
            metrics: Arc::new(Metrics::default()),
            config: runtime_config,
        };

        Ok(Self { state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend_domain::HealthCheckService;

    #[tokio::test]
    async fn starts_when_snapshot_store_is_unreachable() {
        let checklist = std::env::temp_dir()
            .join(format!("skillscape-context-{}.json", std::process::id()));
        let config = AppConfig {
            snapshot_store: "clickhouse".to_string(),
            clickhouse_url: "http://127.0.0.1:1".to_string(),
            checklist_path: checklist.to_string_lossy().into_owned(),
            ..AppConfig::default()
        };

        let context = AppContext::new(&config).await.expect("startup");

        assert!(context
            .state
            .health_service
            .check_snapshot_store()
            .await
            .is_err());
        assert!(context.state.checklist.read().await.items.is_empty());
    }
}
