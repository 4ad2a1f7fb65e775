// Checklist state entity
// Key → completed flag for the progression checklist. The checklist catalog
// itself lives in the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChecklistState {
    #[serde(default)]
    pub items: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistPayload {
    pub items: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistUpdateQuery {
    pub mode: Option<String>,
}

impl ChecklistState {
    pub fn completed_count(&self) -> usize {
        self.items.values().filter(|done| **done).count()
    }
}
