// Boss value object
// Kill-count rows are positional in the scoreboard payload. BOSS_ROWS is the
// only place that knows those positions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boss {
    Cox,
    Vorkath,
    Tob,
    Toa,
    Zulrah,
}

/// Boss → scoreboard row index. Kill-count is column 1 of the row.
pub const BOSS_ROWS: [(Boss, usize); 5] = [
    (Boss::Cox, 44),
    (Boss::Vorkath, 79),
    (Boss::Tob, 80),
    (Boss::Toa, 81),
    (Boss::Zulrah, 84),
];

impl Boss {
    pub fn key(&self) -> &'static str {
        match self {
            Boss::Cox => "cox",
            Boss::Vorkath => "vorkath",
            Boss::Tob => "tob",
            Boss::Toa => "toa",
            Boss::Zulrah => "zulrah",
        }
    }

    pub fn row_index(&self) -> usize {
        BOSS_ROWS
            .iter()
            .find(|(boss, _)| boss == self)
            .map(|(_, index)| *index)
            .unwrap_or_default()
    }
}
