use axum::extract::{Query, State};
use axum::Json;

use backend_application::commands::aggregate_commands;
use backend_application::queries::profile_queries;
use backend_application::AppState;
use backend_domain::{AggregateResult, PlayerProfile, PlayerQuery};

use crate::error::HttpError;

pub async fn player_stats(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<AggregateResult>, HttpError> {
    let result = aggregate_commands::aggregate_player(&state, query.username.as_deref()).await?;
    Ok(Json(result))
}

pub async fn player_profile(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<PlayerProfile>, HttpError> {
    let profile = profile_queries::player_profile(&state, query.username.as_deref()).await?;
    Ok(Json(profile))
}
