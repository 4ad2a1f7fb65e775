use axum::extract::{Query, State};
use axum::Json;

use backend_application::commands::checklist_commands;
use backend_application::queries::checklist_queries;
use backend_application::AppState;
use backend_domain::{ChecklistPayload, ChecklistState, ChecklistUpdateQuery};

use crate::error::HttpError;

pub async fn get_checklist(State(state): State<AppState>) -> Json<ChecklistState> {
    Json(checklist_queries::get_checklist(&state).await)
}

pub async fn update_checklist(
    State(state): State<AppState>,
    Query(query): Query<ChecklistUpdateQuery>,
    Json(payload): Json<ChecklistPayload>,
) -> Result<Json<ChecklistState>, HttpError> {
    let updated = checklist_commands::update_checklist(&state, query, payload).await?;
    Ok(Json(updated))
}
