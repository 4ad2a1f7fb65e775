// Aggregation result entity

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::CollectionLogSummary;

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerQuery {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub csv: String,
    pub gains: i64,
    #[serde(rename = "logStats")]
    pub log_stats: CollectionLogSummary,
    #[serde(rename = "bossData")]
    pub boss_data: BTreeMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_with_dashboard_keys() {
        let result = AggregateResult {
            csv: "1,1850,95000000".to_string(),
            gains: 120,
            log_stats: CollectionLogSummary::from_counts(393, 1515),
            boss_data: BTreeMap::from([("cox".to_string(), 12)]),
        };
        let value = serde_json::to_value(&result).expect("json");
        let object = value.as_object().expect("object");
        let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, ["bossData", "csv", "gains", "logStats"]);
        assert_eq!(value["logStats"]["obtained"], 393);
        assert_eq!(value["logStats"]["total"], 1515);
        assert_eq!(value["logStats"]["percentage"], 25.94);
        assert_eq!(value["bossData"]["cox"], 12);
    }

    #[test]
    fn username_parameter_is_optional() {
        let query: PlayerQuery = serde_json::from_str("{}").expect("query");
        assert!(query.username.is_none());
    }
}
