use tracing::{info, warn};
use uuid::Uuid;

use backend_domain::{
    current_millis, gains_since, start_of_today_millis, AggregateResult, CollectionLogCounts,
    CollectionLogSummary, PlayerName, ScoreboardRecord, Snapshot,
};

use crate::upstream::{bounded, upstream_limit};
use crate::{AppError, AppState};

/// Builds the dashboard payload for one player and records a snapshot.
///
/// Only the scoreboard is mandatory. The collection log, the snapshot write and
/// the same-day baseline query all degrade to defaults when they fail.
pub async fn aggregate_player(
    state: &AppState,
    raw_username: Option<&str>,
) -> Result<AggregateResult, AppError> {
    let player = PlayerName::parse(raw_username.unwrap_or_default()).map_err(|err| {
        state.metrics.record_lookup_error();
        AppError::InvalidInput(err.to_string())
    })?;
    state.metrics.record_lookup();
    info!(player = %player, "aggregating player stats");

    let limit = upstream_limit(state);
    let since_ms = start_of_today_millis();
    let (scoreboard, collection_log, baseline) = tokio::join!(
        bounded(limit, state.scoreboard.fetch_scoreboard(&player)),
        bounded(limit, state.collection_log.fetch_collection_log(&player)),
        bounded(
            limit,
            state.snapshot_repo.earliest_snapshot_since(&player, since_ms)
        ),
    );

    let csv = scoreboard.map_err(|err| upstream_unavailable(state, &player, err.to_string()))?;
    let record = ScoreboardRecord::parse(&csv)
        .map_err(|err| upstream_unavailable(state, &player, err.to_string()))?;
    let total_experience = record.total_experience();

    let log_stats = resolve_collection_log(state, &player, collection_log);

    let snapshot = Snapshot {
        lookup_id: Uuid::new_v4().to_string(),
        player: player.to_string(),
        total_experience,
        raw_payload: csv.clone(),
        recorded_at_ms: current_millis(),
    };
    if let Err(err) = bounded(limit, state.snapshot_repo.insert_snapshot(&snapshot)).await {
        state.metrics.record_snapshot_write_failure();
        warn!(player = %player, lookup_id = %snapshot.lookup_id, "snapshot insert failed: {}", err);
    }

    let baseline = match baseline {
        Ok(found) => found,
        Err(err) => {
            state.metrics.record_baseline_query_failure();
            warn!(player = %player, "baseline snapshot query failed: {}", err);
            None
        }
    };
    let gains = gains_since(total_experience, baseline.as_ref());

    Ok(AggregateResult {
        csv,
        gains,
        log_stats,
        boss_data: record.boss_kill_counts(),
    })
}

fn upstream_unavailable(state: &AppState, player: &PlayerName, reason: String) -> AppError {
    state.metrics.record_upstream_failure();
    state.metrics.record_lookup_error();
    warn!(player = %player, "scoreboard lookup failed: {}", reason);
    AppError::UpstreamUnavailable(format!("scoreboard lookup failed for '{}'", player))
}

fn resolve_collection_log(
    state: &AppState,
    player: &PlayerName,
    fetched: anyhow::Result<Option<CollectionLogCounts>>,
) -> CollectionLogSummary {
    match fetched {
        Ok(Some(counts)) => CollectionLogSummary::from(counts),
        Ok(None) => {
            state.metrics.record_collection_log_fallback();
            info!(player = %player, "no collection log record, using defaults");
            CollectionLogSummary::default()
        }
        Err(err) => {
            state.metrics.record_collection_log_fallback();
            warn!(player = %player, "collection log lookup failed: {}", err);
            CollectionLogSummary::default()
        }
    }
}
