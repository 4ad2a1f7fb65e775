use backend_domain::ChecklistState;

use crate::AppState;

pub async fn get_checklist(state: &AppState) -> ChecklistState {
    state.checklist.read().await.clone()
}
