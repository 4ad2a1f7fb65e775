// Identifier value objects

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerNameError {
    #[error("username is required")]
    Empty,
}

/// Case-insensitive player name, stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(raw: &str) -> Result<Self, PlayerNameError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(PlayerNameError::Empty);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases_and_trims() {
        let name = PlayerName::parse("  FoolinSlays ").expect("name");
        assert_eq!(name.as_str(), "foolinslays");
    }

    #[test]
    fn parse_keeps_interior_spaces() {
        let name = PlayerName::parse("Iron Foolin").expect("name");
        assert_eq!(name.as_str(), "iron foolin");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(PlayerName::parse(""), Err(PlayerNameError::Empty));
        assert_eq!(PlayerName::parse("   "), Err(PlayerNameError::Empty));
    }
}
