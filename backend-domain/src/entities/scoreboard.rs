// Scoreboard entity
// Newline-delimited, comma-separated table from the live hiscores. Rows are
// identified by position only: skills first (see Skill::ALL), then
// activity/boss rows (see BOSS_ROWS).

use std::collections::BTreeMap;

use thiserror::Error;

use crate::value_objects::{Boss, Skill, BOSS_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    #[error("scoreboard payload is empty")]
    Empty,
    #[error("row {row} column {column} is not an integer: '{value}'")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("overall row has no experience column")]
    MissingTotalExperience,
}

/// One scoreboard row. Skill rows carry `rank,level,experience`; activity rows
/// carry `rank,score` and leave `experience` empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRow {
    pub rank: i64,
    pub value: i64,
    pub experience: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub rank: i64,
    pub level: i64,
    pub experience: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardRecord {
    rows: Vec<ScoreRow>,
    total_experience: i64,
}

impl ScoreboardRecord {
    pub fn parse(payload: &str) -> Result<Self, ScoreboardError> {
        let mut lines = payload.lines().collect::<Vec<_>>();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(ScoreboardError::Empty);
        }

        let rows = lines
            .iter()
            .enumerate()
            .map(|(index, line)| parse_row(index, line))
            .collect::<Result<Vec<_>, _>>()?;

        let total_experience = rows
            .first()
            .and_then(|row| row.experience)
            .ok_or(ScoreboardError::MissingTotalExperience)?;

        Ok(Self {
            rows,
            total_experience,
        })
    }

    pub fn total_experience(&self) -> i64 {
        self.total_experience
    }

    pub fn row(&self, index: usize) -> Option<&ScoreRow> {
        self.rows.get(index)
    }

    pub fn skill(&self, skill: Skill) -> Option<SkillEntry> {
        let row = self.rows.get(skill.row_index())?;
        Some(SkillEntry {
            rank: row.rank,
            level: row.value,
            experience: row.experience.unwrap_or_default().max(0),
        })
    }

    pub fn kill_count(&self, boss: Boss) -> i64 {
        self.rows
            .get(boss.row_index())
            .map(|row| row.value.max(0))
            .unwrap_or_default()
    }

    pub fn boss_kill_counts(&self) -> BTreeMap<String, i64> {
        BOSS_ROWS
            .iter()
            .map(|(boss, _)| (boss.key().to_string(), self.kill_count(*boss)))
            .collect()
    }
}

// An empty cell keeps its position and reads as missing.
fn parse_row(index: usize, line: &str) -> Result<ScoreRow, ScoreboardError> {
    let mut columns: Vec<Option<i64>> = Vec::with_capacity(3);
    for (column, raw) in line.trim().split(',').enumerate() {
        let raw = raw.trim();
        if raw.is_empty() {
            columns.push(None);
            continue;
        }
        let value = raw
            .parse::<i64>()
            .map_err(|_| ScoreboardError::InvalidNumber {
                row: index,
                column,
                value: raw.to_string(),
            })?;
        columns.push(Some(value));
    }
    let cell = |position: usize| columns.get(position).copied().flatten();
    Ok(ScoreRow {
        rank: cell(0).unwrap_or(-1),
        value: cell(1).unwrap_or(-1),
        experience: cell(2),
    })
}
