use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use backend_domain::{ChecklistRepository, ChecklistState};

pub struct ChecklistFileRepository;

impl ChecklistFileRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChecklistFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChecklistRepository for ChecklistFileRepository {
    async fn load_checklist(&self, path: &str) -> anyhow::Result<ChecklistState> {
        if !Path::new(path).exists() {
            return Ok(ChecklistState::default());
        }
        let content = fs::read_to_string(path).await?;
        if content.trim().is_empty() {
            return Ok(ChecklistState::default());
        }
        let state: ChecklistState = serde_json::from_str(&content)?;
        Ok(state)
    }

    async fn save_checklist(&self, path: &str, state: &ChecklistState) -> anyhow::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(state)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("skillscape-{}", Uuid::new_v4()))
            .join(name)
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn missing_file_loads_empty_state() {
        let repo = ChecklistFileRepository::new();
        let state = repo
            .load_checklist(&scratch_path("checklist.json"))
            .await
            .expect("load");
        assert!(state.items.is_empty());
    }

    #[tokio::test]
    async fn saved_state_is_read_back() {
        let repo = ChecklistFileRepository::new();
        let path = scratch_path("nested/checklist.json");
        let mut state = ChecklistState::default();
        state.items.insert("fire_cape".to_string(), true);
        state.items.insert("quest_cape".to_string(), false);

        repo.save_checklist(&path, &state).await.expect("save");
        let loaded = repo.load_checklist(&path).await.expect("load");
        assert_eq!(loaded, state);
        let _ = fs::remove_dir_all(Path::new(&path).parent().and_then(Path::parent).expect("dir")).await;
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let repo = ChecklistFileRepository::new();
        let path = scratch_path("checklist.json");
        fs::create_dir_all(Path::new(&path).parent().expect("dir"))
            .await
            .expect("mkdir");
        fs::write(&path, "not json").await.expect("write");
        assert!(repo.load_checklist(&path).await.is_err());
    }
}
