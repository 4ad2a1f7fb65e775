use std::collections::BTreeMap;

use tracing::info;

use backend_domain::{ChecklistPayload, ChecklistState, ChecklistUpdateQuery};

use crate::{AppError, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateMode {
    Merge,
    Replace,
}

fn parse_mode(raw: Option<&str>) -> Result<UpdateMode, AppError> {
    match raw.map(|mode| mode.trim().to_lowercase()).as_deref() {
        None | Some("") | Some("merge") => Ok(UpdateMode::Merge),
        Some("replace") => Ok(UpdateMode::Replace),
        Some(other) => Err(AppError::InvalidInput(format!(
            "unsupported checklist mode '{}'",
            other
        ))),
    }
}

fn normalize_items(items: BTreeMap<String, bool>) -> BTreeMap<String, bool> {
    items
        .into_iter()
        .map(|(id, done)| (id.trim().to_lowercase(), done))
        .filter(|(id, _)| !id.is_empty())
        .collect()
}

pub async fn update_checklist(
    state: &AppState,
    query: ChecklistUpdateQuery,
    payload: ChecklistPayload,
) -> Result<ChecklistState, AppError> {
    let mode = parse_mode(query.mode.as_deref())?;
    let incoming = normalize_items(payload.items);

    let mut guard = state.checklist.write().await;
    let mut next = match mode {
        UpdateMode::Merge => guard.clone(),
        UpdateMode::Replace => ChecklistState::default(),
    };
    next.items.extend(incoming);

    state
        .checklist_repo
        .save_checklist(&state.config.checklist_path, &next)
        .await?;
    *guard = next.clone();
    info!(
        items = next.items.len(),
        completed = next.completed_count(),
        "checklist updated"
    );
    Ok(next)
}
