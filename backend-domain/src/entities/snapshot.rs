// Snapshot entity
// Append-only time series of a player's total experience.

use clickhouse::Row;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::utils::{millis_to_utc, utc_to_millis};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub lookup_id: String,
    pub player: String,
    pub total_experience: i64,
    pub raw_payload: String,
    pub recorded_at_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Row)]
pub struct SnapshotRow {
    #[serde(with = "clickhouse::serde::time::datetime64::millis")]
    pub recorded_at: OffsetDateTime,
    pub lookup_id: String,
    pub player: String,
    pub total_experience: i64,
    pub raw_payload: String,
}

impl From<&Snapshot> for SnapshotRow {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            recorded_at: millis_to_utc(snapshot.recorded_at_ms),
            lookup_id: snapshot.lookup_id.clone(),
            player: snapshot.player.clone(),
            total_experience: snapshot.total_experience,
            raw_payload: snapshot.raw_payload.clone(),
        }
    }
}

impl From<SnapshotRow> for Snapshot {
    fn from(row: SnapshotRow) -> Self {
        Self {
            lookup_id: row.lookup_id,
            player: row.player,
            total_experience: row.total_experience,
            raw_payload: row.raw_payload,
            recorded_at_ms: utc_to_millis(row.recorded_at),
        }
    }
}
