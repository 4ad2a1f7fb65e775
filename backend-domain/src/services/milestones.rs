// Account milestones derived from a skills map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::SkillLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestones {
    pub total_level: i64,
    pub total_xp: i64,
    pub skills_99: usize,
    pub skills_90: usize,
    pub skills_80: usize,
    pub skills_70: usize,
    pub num_skills: usize,
    pub maxed: bool,
}

/// Totals come from the `overall` entry when it carries a level, otherwise
/// from the individual skills. Threshold counts never include `overall`.
pub fn milestones(skills: &BTreeMap<String, SkillLevel>) -> Milestones {
    let (overall, individual): (Vec<_>, Vec<_>) = skills
        .iter()
        .partition(|(name, _)| name.eq_ignore_ascii_case("overall"));
    let individual = individual
        .into_iter()
        .map(|(_, entry)| *entry)
        .collect::<Vec<_>>();

    let (total_level, total_xp) = match overall.first() {
        Some((_, entry)) if entry.level > 0 => (entry.level, entry.xp.max(0)),
        _ => (
            individual.iter().map(|entry| entry.level.max(0)).sum(),
            individual.iter().map(|entry| entry.xp.max(0)).sum(),
        ),
    };

    let at_least = |level: i64| individual.iter().filter(|entry| entry.level >= level).count();
    let skills_99 = at_least(99);
    let num_skills = individual.len();

    Milestones {
        total_level,
        total_xp,
        skills_99,
        skills_90: at_least(90),
        skills_80: at_least(80),
        skills_70: at_least(70),
        num_skills,
        maxed: num_skills > 0 && skills_99 == num_skills,
    }
}
