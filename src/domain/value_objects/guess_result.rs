//! Per-stat feedback for a guess

use serde::{Deserialize, Serialize};

/// Outcome of comparing one stat of a guess against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuessResult {
    /// Exact match
    Correct,
    /// Partial overlap of a set-valued stat
    Close,
    /// The guess ranks above the target
    Higher,
    /// The guess ranks below the target
    Lower,
    Incorrect,
}

impl GuessResult {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}
