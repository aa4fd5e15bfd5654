//! Data models for the review scheduler

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::vocabulary::{Level, MAX_LEVEL};

/// Result of reviewing a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewOutcome {
    /// Recalled the meaning; level goes up by one
    Remembered,
    /// Did not recall; level resets to 0
    Forgotten,
}

/// What the learner chose for a presented word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewAnswer {
    Remembered,
    Forgotten,
    /// Leave the word untouched for now
    Skip,
}

impl ReviewAnswer {
    /// The outcome to apply, `None` for a skip
    pub fn outcome(self) -> Option<ReviewOutcome> {
        match self {
            Self::Remembered => Some(ReviewOutcome::Remembered),
            Self::Forgotten => Some(ReviewOutcome::Forgotten),
            Self::Skip => None,
        }
    }
}

/// State change produced by applying an outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    pub word: String,
    pub outcome: ReviewOutcome,
    pub previous_level: Level,
    pub level: Level,
    pub last_review: NaiveDate,
    pub next_due: NaiveDate,
}

/// Progress overview for the whole store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_words: usize,
    /// Number of words at each level, indexed by level
    pub level_counts: [usize; MAX_LEVEL as usize + 1],
    pub due_today: usize,
}

impl ReviewStats {
    /// Words at the top level
    pub fn mastered(&self) -> usize {
        self.level_counts[MAX_LEVEL as usize]
    }
}
