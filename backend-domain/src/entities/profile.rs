// Player profile entity
// Derived view of one scoreboard payload; never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::services::Milestones;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub level: i64,
    pub xp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub account_name: String,
    pub skills: BTreeMap<String, SkillLevel>,
    pub combat_level: u32,
    pub total_experience: i64,
    pub bosses: BTreeMap<String, i64>,
    pub milestones: Milestones,
}
