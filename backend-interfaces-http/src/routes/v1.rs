use axum::routing::get;
use axum::Router;

use backend_application::AppState;

use crate::handlers::{checklist_handlers, ops_handlers, player_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Path kept for the dashboard client.
        .route("/api/proxy", get(player_handlers::player_stats))
        .route("/v1/player/stats", get(player_handlers::player_stats))
        .route("/v1/player/profile", get(player_handlers::player_profile))
        .route(
            "/v1/checklist",
            get(checklist_handlers::get_checklist).put(checklist_handlers::update_checklist),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
