//! Random card and multiple-choice selection
//!
//! Distractors are sampled without replacement from a deduplicated candidate
//! set whose size is checked up front, so selection always terminates and
//! either yields exactly `DISTRACTOR_COUNT` options or fails.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vocabulary::{VocabularyStore, WordRecord};

/// Wrong answers offered next to the correct one
pub const DISTRACTOR_COUNT: usize = 3;

/// Smallest store a quiz can be built from
pub const MIN_QUIZ_WORDS: usize = DISTRACTOR_COUNT + 1;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("Need at least {needed} words for a quiz, found {available}")]
    NotEnoughWords { needed: usize, available: usize },

    #[error("No word has a meaning to quiz on")]
    NoMeanings,

    #[error("Need {needed} distinct wrong meanings, only {available} available")]
    InsufficientCandidates { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, QuizError>;

fn meaning_of(record: &WordRecord) -> Option<&str> {
    let meaning = record.meaning_local.trim();
    if meaning.is_empty() {
        None
    } else {
        Some(meaning)
    }
}

/// Distinct meanings of every other word, excluding the target's own meaning
fn distractor_candidates<'a>(store: &'a VocabularyStore, target: &WordRecord) -> Vec<&'a str> {
    let correct = target.meaning_local.trim();
    let mut seen = HashSet::new();

    store
        .all()
        .iter()
        .filter(|record| record.word != target.word)
        .filter_map(meaning_of)
        .filter(|meaning| *meaning != correct)
        .filter(|meaning| seen.insert(*meaning))
        .collect()
}

/// Pick `DISTRACTOR_COUNT` distinct wrong meanings for `target`
pub fn select_distractors<R: Rng + ?Sized>(
    store: &VocabularyStore,
    target: &WordRecord,
    rng: &mut R,
) -> Result<Vec<String>> {
    let candidates = distractor_candidates(store, target);
    if candidates.len() < DISTRACTOR_COUNT {
        return Err(QuizError::InsufficientCandidates {
            needed: DISTRACTOR_COUNT,
            available: candidates.len(),
        });
    }

    Ok(candidates
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|meaning| meaning.to_string())
        .collect())
}

/// Pick a random word for a flashcard, `None` when the store is empty
pub fn pick_flashcard<'a, R: Rng + ?Sized>(
    store: &'a VocabularyStore,
    rng: &mut R,
) -> Option<&'a WordRecord> {
    store.all().choose(rng)
}

/// A multiple-choice question: pick the meaning of `word`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub word: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Quiz {
    /// Build a quiz for a random word that has a meaning
    pub fn generate<R: Rng + ?Sized>(store: &VocabularyStore, rng: &mut R) -> Result<Self> {
        if store.len() < MIN_QUIZ_WORDS {
            return Err(QuizError::NotEnoughWords {
                needed: MIN_QUIZ_WORDS,
                available: store.len(),
            });
        }

        let with_meaning: Vec<&WordRecord> = store
            .all()
            .iter()
            .filter(|record| meaning_of(record).is_some())
            .collect();
        let target = with_meaning.choose(rng).ok_or(QuizError::NoMeanings)?;

        Self::for_word(store, target, rng)
    }

    /// Build a quiz for a specific word
    pub fn for_word<R: Rng + ?Sized>(
        store: &VocabularyStore,
        target: &WordRecord,
        rng: &mut R,
    ) -> Result<Self> {
        let correct = meaning_of(target).ok_or(QuizError::NoMeanings)?.to_string();

        let mut options = select_distractors(store, target, rng)?;
        options.push(correct.clone());
        options.shuffle(rng);

        let correct_index = options
            .iter()
            .position(|option| *option == correct)
            .unwrap_or(options.len() - 1);

        Ok(Self {
            word: target.word.clone(),
            options,
            correct_index,
        })
    }

    /// Whether the zero-based `choice` is the right meaning
    pub fn check(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// The right meaning, `None` when `correct_index` is out of range
    pub fn correct_answer(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store_with(meanings: &[(&str, &str)]) -> VocabularyStore {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        meanings
            .iter()
            .map(|(word, meaning)| WordRecord::new(word, today).with_meaning(*meaning))
            .collect()
    }

    #[test]
    fn test_distractors_are_distinct_and_wrong() {
        let store = store_with(&[
            ("run", "chạy"),
            ("walk", "đi bộ"),
            ("swim", "bơi"),
            ("jump", "nhảy"),
            ("fly", "bay"),
            ("sprint", "chạy"),
        ]);
        let target = store.find_by_word("run").unwrap();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let distractors = select_distractors(&store, target, &mut rng).unwrap();

            assert_eq!(distractors.len(), DISTRACTOR_COUNT);
            assert!(!distractors.contains(&"chạy".to_string()));
            let unique: HashSet<&String> = distractors.iter().collect();
            assert_eq!(unique.len(), DISTRACTOR_COUNT);
        }
    }

    #[test]
    fn test_three_distinct_meanings_fail_explicitly() {
        let store = store_with(&[
            ("run", "chạy"),
            ("sprint", "chạy"),
            ("walk", "đi bộ"),
            ("stroll", "đi bộ"),
            ("swim", "bơi"),
        ]);
        let mut rng = StdRng::seed_from_u64(7);

        for target in store.all() {
            let err = select_distractors(&store, target, &mut rng).unwrap_err();
            assert_eq!(
                err,
                QuizError::InsufficientCandidates { needed: 3, available: 2 }
            );
        }
        assert!(matches!(
            Quiz::generate(&store, &mut rng),
            Err(QuizError::InsufficientCandidates { .. })
        ));
    }

    #[test]
    fn test_blank_meanings_are_not_candidates() {
        let store = store_with(&[
            ("run", "chạy"),
            ("walk", ""),
            ("swim", "bơi"),
            ("jump", "   "),
            ("fly", "bay"),
        ]);
        let target = store.find_by_word("run").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            select_distractors(&store, target, &mut rng),
            Err(QuizError::InsufficientCandidates { needed: 3, available: 2 })
        );
    }

    #[test]
    fn test_quiz_contains_correct_answer() {
        let store = store_with(&[
            ("run", "chạy"),
            ("walk", "đi bộ"),
            ("swim", "bơi"),
            ("jump", "nhảy"),
        ]);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let quiz = Quiz::generate(&store, &mut rng).unwrap();
            let expected = store.find_by_word(&quiz.word).unwrap().meaning_local.as_str();

            assert_eq!(quiz.options.len(), MIN_QUIZ_WORDS);
            assert_eq!(quiz.correct_answer(), Some(expected));
            assert!(quiz.check(quiz.correct_index));
            assert!(!quiz.check((quiz.correct_index + 1) % quiz.options.len()));
        }
    }

    #[test]
    fn test_out_of_range_answer_index() {
        let quiz: Quiz =
            serde_json::from_str(r#"{"word": "run", "options": ["chạy"], "correctIndex": 4}"#)
                .unwrap();

        assert_eq!(quiz.correct_answer(), None);
        assert!(!quiz.check(0));
    }

    #[test]
    fn test_quiz_needs_four_words() {
        let store = store_with(&[("run", "chạy"), ("walk", "đi bộ"), ("swim", "bơi")]);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            Quiz::generate(&store, &mut rng),
            Err(QuizError::NotEnoughWords { needed: 4, available: 3 })
        );
    }

    #[test]
    fn test_pick_flashcard() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(pick_flashcard(&VocabularyStore::new(), &mut rng).is_none());

        let store = store_with(&[("run", "chạy"), ("walk", "đi bộ")]);
        let card = pick_flashcard(&store, &mut rng).unwrap();
        assert!(store.find_by_word(&card.word).is_some());
    }
}
