use std::fmt;

use serde::{Deserialize, Serialize};

use super::snapshot::Side;

/// Number of rounds the round selector offers.
pub const ROUND_OPTIONS: usize = 10;

/// Selectable round numbers, 1 through [`ROUND_OPTIONS`].
pub fn round_options() -> impl Iterator<Item = usize> {
    1..=ROUND_OPTIONS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Lose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreInputError {
    TooLong(usize),
    NotDigits(String),
}

impl fmt::Display for ScoreInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreInputError::TooLong(len) => {
                write!(f, "score must be at most 2 digits (got {})", len)
            }
            ScoreInputError::NotDigits(value) => {
                write!(f, "score must contain only digits: {:?}", value)
            }
        }
    }
}

impl std::error::Error for ScoreInputError {}

/// Accepts an empty string or one to two ASCII digits (0-99).
pub fn validate_score(value: &str) -> Result<(), ScoreInputError> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ScoreInputError::NotDigits(value.to_string()));
    }
    if value.len() > 2 {
        return Err(ScoreInputError::TooLong(value.len()));
    }
    Ok(())
}

/// Whole-match metadata. Not tied to any round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_name: String,
    pub our_score: String,
    pub enemy_score: String,
    pub our_result: Option<MatchResult>,
    pub enemy_result: Option<MatchResult>,
}

impl MatchInfo {
    pub fn score(&self, side: Side) -> &str {
        match side {
            Side::Our => &self.our_score,
            Side::Enemy => &self.enemy_score,
        }
    }

    /// Replace a side's running score. Rejected input keeps the old value.
    pub fn set_score(&mut self, side: Side, value: &str) -> Result<(), ScoreInputError> {
        validate_score(value)?;
        let slot = match side {
            Side::Our => &mut self.our_score,
            Side::Enemy => &mut self.enemy_score,
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn result(&self, side: Side) -> Option<MatchResult> {
        match side {
            Side::Our => self.our_result,
            Side::Enemy => self.enemy_result,
        }
    }

    pub fn set_result(&mut self, side: Side, result: Option<MatchResult>) {
        match side {
            Side::Our => self.our_result = result,
            Side::Enemy => self.enemy_result = result,
        }
    }
}
