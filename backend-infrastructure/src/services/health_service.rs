use std::sync::Arc;

use async_trait::async_trait;
use backend_domain::ports::{HealthCheckService, SnapshotRepository};

pub struct DefaultHealthService {
    snapshot_repo: Arc<dyn SnapshotRepository>,
}

impl DefaultHealthService {
    pub fn new(snapshot_repo: Arc<dyn SnapshotRepository>) -> Self {
        Self { snapshot_repo }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_snapshot_store(&self) -> anyhow::Result<bool> {
        self.snapshot_repo.ping().await.map(|_| true)
    }
}
