// Stats document entity
// File written by the refresh job and read by the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{CollectionLogSummary, SkillLevel};
use crate::services::Milestones;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDocument {
    pub last_updated: String,
    pub account_name: String,
    pub skills: BTreeMap<String, SkillLevel>,
    /// Absent in documents written before milestones existed.
    #[serde(default)]
    pub milestones: Milestones,
    pub collection_log: CollectionLogSummary,
}
