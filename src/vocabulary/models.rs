//! Data models for the vocabulary record set

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest mastery level a word can reach
pub const MAX_LEVEL: u8 = 3;

/// Mastery rank of a word, always within `0..=MAX_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Level(u8);

impl Level {
    /// Just learned or just forgotten
    pub const NEW: Level = Level(0);
    pub const MAX: Level = Level(MAX_LEVEL);

    /// Build a level from any integer, clamping into range
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, MAX_LEVEL as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Next level up, saturating at `Level::MAX`
    pub fn promoted(self) -> Self {
        Self((self.0 + 1).min(MAX_LEVEL))
    }

}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        level.0 as i64
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored date of the last review
///
/// A `LastReview` cell that is not a date is kept verbatim so it can be
/// written back unchanged. It reads as reviewed `today` on whatever day the
/// record is inspected, until a save or review stamps a real date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewDate {
    On(NaiveDate),
    Unparsed(String),
}

impl ReviewDate {
    /// The effective review date as seen on `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::On(date) => *date,
            Self::Unparsed(_) => today,
        }
    }
}

impl From<NaiveDate> for ReviewDate {
    fn from(date: NaiveDate) -> Self {
        Self::On(date)
    }
}

/// Normalize a word to its store key (trimmed, lower-cased)
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// One learned word with its review state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub word: String,
    /// Meaning in the learner's language
    #[serde(default)]
    pub meaning_local: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub example_source: String,
    #[serde(default)]
    pub example_local: String,
    /// Date of the most recent review decision or save
    pub last_review: ReviewDate,
    #[serde(default)]
    pub level: Level,
}

impl WordRecord {
    /// A freshly saved word: level 0, reviewed `today`
    pub fn new(word: &str, today: NaiveDate) -> Self {
        Self {
            word: normalize_word(word),
            meaning_local: String::new(),
            synonyms: Vec::new(),
            example_source: String::new(),
            example_local: String::new(),
            last_review: ReviewDate::On(today),
            level: Level::NEW,
        }
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning_local = meaning.into();
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn with_examples(mut self, source: impl Into<String>, local: impl Into<String>) -> Self {
        self.example_source = source.into();
        self.example_local = local.into();
        self
    }

    pub fn with_last_review(mut self, date: impl Into<ReviewDate>) -> Self {
        self.last_review = date.into();
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Overwrite everything except the key with `other`'s values
    pub(crate) fn overwrite_from(&mut self, other: WordRecord) {
        self.meaning_local = other.meaning_local;
        self.synonyms = other.synonyms;
        self.example_source = other.example_source;
        self.example_local = other.example_local;
        self.last_review = other.last_review;
        self.level = other.level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_clamps() {
        assert_eq!(Level::new(-4), Level::NEW);
        assert_eq!(Level::new(2).value(), 2);
        assert_eq!(Level::new(9), Level::MAX);
    }

    #[test]
    fn test_level_promotion_saturates() {
        assert_eq!(Level::NEW.promoted().value(), 1);
        assert_eq!(Level::new(2).promoted(), Level::MAX);
        assert_eq!(Level::MAX.promoted(), Level::MAX);
    }

    #[test]
    fn test_new_record_is_normalized() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let record = WordRecord::new("  Run ", today);

        assert_eq!(record.word, "run");
        assert_eq!(record.level, Level::NEW);
        assert_eq!(record.last_review, ReviewDate::On(today));
    }

    #[test]
    fn test_unparsed_review_date_resolves_to_today() {
        let unparsed = ReviewDate::Unparsed("garbage".to_string());
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        assert_eq!(unparsed.resolve(monday), monday);
        assert_eq!(unparsed.resolve(friday), friday);
        assert_eq!(ReviewDate::On(monday).resolve(friday), monday);
    }

    #[test]
    fn test_level_deserializes_out_of_range() {
        let level: Level = serde_json::from_str("7").unwrap();
        assert_eq!(level, Level::MAX);
    }
}
