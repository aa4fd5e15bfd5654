//! Review session state held by the caller
//!
//! A session snapshots the words due at start time and walks through them
//! one at a time. The store is borrowed only while an answer is applied, so
//! the caller stays free to persist it between answers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::algorithm::{apply_outcome, due_records};
use super::models::{ReviewAnswer, ReviewResult};
use crate::vocabulary::{VocabularyStore, WordRecord};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Review session is already finished")]
    Finished,

    #[error("Word not found in vocabulary: {0}")]
    WordMissing(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Counts of answers given during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub remembered: usize,
    pub forgotten: usize,
    pub skipped: usize,
}

impl SessionSummary {
    pub fn answered(&self) -> usize {
        self.remembered + self.forgotten + self.skipped
    }
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    today: NaiveDate,
    queue: Vec<String>,
    position: usize,
    summary: SessionSummary,
}

impl ReviewSession {
    /// Start a session over every word due on `today`
    pub fn start(store: &VocabularyStore, today: NaiveDate) -> Self {
        let queue = due_records(store, today)
            .into_iter()
            .map(|record| record.word.clone())
            .collect::<Vec<_>>();

        log::info!("Starting review session with {} due words", queue.len());

        Self {
            today,
            queue,
            position: 0,
            summary: SessionSummary::default(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Total number of words in this session
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Zero-based index of the word being presented
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.queue.len()
    }

    /// Word currently being presented
    pub fn current_word(&self) -> Option<&str> {
        self.queue.get(self.position).map(String::as_str)
    }

    /// Record currently being presented
    pub fn current<'a>(&self, store: &'a VocabularyStore) -> Option<&'a WordRecord> {
        self.current_word().and_then(|word| store.find_by_word(word))
    }

    /// Apply the learner's answer to the current word and move on.
    ///
    /// Returns the level change, or `None` for a skip.
    pub fn answer(
        &mut self,
        store: &mut VocabularyStore,
        answer: ReviewAnswer,
    ) -> Result<Option<ReviewResult>> {
        let word = self.current_word().ok_or(SessionError::Finished)?.to_string();

        let result = match answer.outcome() {
            Some(outcome) => {
                let today = self.today;
                let result = store
                    .update(&word, |record| apply_outcome(record, outcome, today))
                    .ok_or_else(|| SessionError::WordMissing(word.clone()))?;
                Some(result)
            }
            None => None,
        };

        match answer {
            ReviewAnswer::Remembered => self.summary.remembered += 1,
            ReviewAnswer::Forgotten => self.summary.forgotten += 1,
            ReviewAnswer::Skip => self.summary.skipped += 1,
        }
        self.position += 1;

        Ok(result)
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }
}
