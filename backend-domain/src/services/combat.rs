use std::collections::BTreeMap;

use crate::entities::{ScoreboardRecord, SkillLevel};
use crate::value_objects::Skill;

/// Levels that feed the combat formula. `None` falls back to the level a fresh
/// account starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatSkills {
    pub attack: Option<i64>,
    pub strength: Option<i64>,
    pub defence: Option<i64>,
    pub hitpoints: Option<i64>,
    pub ranged: Option<i64>,
    pub magic: Option<i64>,
    pub prayer: Option<i64>,
}

impl CombatSkills {
    pub fn from_scoreboard(record: &ScoreboardRecord) -> Self {
        let level = |skill: Skill| record.skill(skill).map(|entry| entry.level).filter(|l| *l > 0);
        Self {
            attack: level(Skill::Attack),
            strength: level(Skill::Strength),
            defence: level(Skill::Defence),
            hitpoints: level(Skill::Hitpoints),
            ranged: level(Skill::Ranged),
            magic: level(Skill::Magic),
            prayer: level(Skill::Prayer),
        }
    }

    pub fn from_levels(skills: &BTreeMap<String, SkillLevel>) -> Self {
        let level = |skill: Skill| {
            skills
                .get(skill.as_str())
                .map(|entry| entry.level)
                .filter(|l| *l > 0)
        };
        Self {
            attack: level(Skill::Attack),
            strength: level(Skill::Strength),
            defence: level(Skill::Defence),
            hitpoints: level(Skill::Hitpoints),
            ranged: level(Skill::Ranged),
            magic: level(Skill::Magic),
            prayer: level(Skill::Prayer),
        }
    }
}

pub fn combat_level(skills: &CombatSkills) -> u32 {
    let attack = skills.attack.unwrap_or(1);
    let strength = skills.strength.unwrap_or(1);
    let defence = skills.defence.unwrap_or(1);
    let hitpoints = skills.hitpoints.unwrap_or(10);
    let ranged = skills.ranged.unwrap_or(1);
    let magic = skills.magic.unwrap_or(1);
    let prayer = skills.prayer.unwrap_or(1);

    let base = 0.25 * (defence + hitpoints + prayer.div_euclid(2)) as f64;
    let melee = 0.325 * (attack + strength) as f64;
    let range = 0.325 * (3 * ranged).div_euclid(2) as f64;
    let mage = 0.325 * (3 * magic).div_euclid(2) as f64;

    (base + melee.max(range).max(mage)).floor() as u32
}
