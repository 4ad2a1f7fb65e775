// Collection log entity

use serde::{Deserialize, Serialize};

/// Item total used when the upstream has no record for the player.
pub const DEFAULT_COLLECTION_LOG_TOTAL: i64 = 1515;

/// Raw counts as reported by a collection-log source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionLogCounts {
    pub obtained: Option<i64>,
    pub total: Option<i64>,
}

/// Percentage is always derived from `obtained / total`, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectionLogSummary {
    pub obtained: i64,
    pub total: i64,
    pub percentage: f64,
}

impl CollectionLogSummary {
    pub fn from_counts(obtained: i64, total: i64) -> Self {
        let total = if total > 0 {
            total
        } else {
            DEFAULT_COLLECTION_LOG_TOTAL
        };
        let obtained = obtained.max(0);
        Self {
            obtained,
            total,
            percentage: completion_percentage(obtained, total),
        }
    }
}

impl From<CollectionLogCounts> for CollectionLogSummary {
    fn from(counts: CollectionLogCounts) -> Self {
        Self::from_counts(
            counts.obtained.unwrap_or_default(),
            counts.total.unwrap_or_default(),
        )
    }
}

impl Default for CollectionLogSummary {
    fn default() -> Self {
        Self::from_counts(0, DEFAULT_COLLECTION_LOG_TOTAL)
    }
}

pub fn completion_percentage(obtained: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let ratio = obtained as f64 / total as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}
