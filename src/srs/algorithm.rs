//! Fixed-interval spaced repetition
//!
//! Each word carries a mastery level from 0 to 3. The level picks the number
//! of days that must pass after the last review before the word is due again:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0     | 1 day    |
//! | 1     | 3 days   |
//! | 2     | 7 days   |
//! | 3     | 14 days  |
//!
//! Remembering a word moves it up one level (staying at 3 once there).
//! Forgetting it drops it back to level 0. Either way the review date is
//! stamped, which restarts the interval.

use chrono::{Duration, NaiveDate};

use super::models::{ReviewOutcome, ReviewResult, ReviewStats};
use crate::vocabulary::{Level, ReviewDate, VocabularyStore, WordRecord, MAX_LEVEL};

/// Review interval in days, indexed by level
pub const INTERVALS: [i64; MAX_LEVEL as usize + 1] = [1, 3, 7, 14];

/// Interval in days for a level
pub fn interval_for(level: Level) -> i64 {
    let idx = (level.value() as usize).min(INTERVALS.len() - 1);
    INTERVALS[idx]
}

/// Date on which the record becomes due, as seen on `today`
///
/// A record whose review date could not be read counts as reviewed `today`.
pub fn next_due_date(record: &WordRecord, today: NaiveDate) -> NaiveDate {
    record.last_review.resolve(today) + Duration::days(interval_for(record.level))
}

/// Check whether a record is due for review on `today`
///
/// The boundary day itself counts as due.
pub fn is_due(record: &WordRecord, today: NaiveDate) -> bool {
    today >= next_due_date(record, today)
}

/// Days left until the record is due; zero or negative means due
pub fn days_until_due(record: &WordRecord, today: NaiveDate) -> i64 {
    (next_due_date(record, today) - today).num_days()
}

/// All records due on `today`, in store order
pub fn due_records(store: &VocabularyStore, today: NaiveDate) -> Vec<&WordRecord> {
    store
        .all()
        .iter()
        .filter(|record| is_due(record, today))
        .collect()
}

/// Apply a review outcome to a record
///
/// # Arguments
/// * `record` - Record being reviewed, updated in place
/// * `outcome` - Whether the learner remembered the word
/// * `today` - Date of the review
///
/// # Returns
/// ReviewResult describing the level change and the next due date
pub fn apply_outcome(
    record: &mut WordRecord,
    outcome: ReviewOutcome,
    today: NaiveDate,
) -> ReviewResult {
    let previous_level = record.level;

    let level = match outcome {
        ReviewOutcome::Remembered => previous_level.promoted(),
        ReviewOutcome::Forgotten => Level::NEW,
    };

    record.level = level;
    record.last_review = ReviewDate::On(today);

    log::debug!(
        "Reviewed {:?}: {:?}, level {} -> {}",
        record.word,
        outcome,
        previous_level,
        level
    );

    ReviewResult {
        word: record.word.clone(),
        outcome,
        previous_level,
        level,
        last_review: today,
        next_due: next_due_date(record, today),
    }
}

/// Count words per level and how many are due on `today`
pub fn review_stats(store: &VocabularyStore, today: NaiveDate) -> ReviewStats {
    let mut stats = ReviewStats {
        total_words: store.len(),
        ..ReviewStats::default()
    };

    for record in store.all() {
        stats.level_counts[record.level.value() as usize] += 1;
        if is_due(record, today) {
            stats.due_today += 1;
        }
    }

    stats
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i64) -> String {
    if days <= 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_at(level: i64, last_review: NaiveDate) -> WordRecord {
        WordRecord::new("run", last_review).with_level(Level::new(level))
    }

    #[test]
    fn test_interval_table() {
        assert_eq!(interval_for(Level::new(0)), 1);
        assert_eq!(interval_for(Level::new(1)), 3);
        assert_eq!(interval_for(Level::new(2)), 7);
        assert_eq!(interval_for(Level::new(3)), 14);
        assert_eq!(interval_for(Level::new(42)), 14);
    }

    #[test]
    fn test_due_boundary_for_every_level() {
        let reviewed = date(2024, 1, 1);
        for level in 0..=3 {
            let record = record_at(level, reviewed);
            let interval = INTERVALS[level as usize];

            let before = reviewed + Duration::days(interval - 1);
            let boundary = reviewed + Duration::days(interval);
            assert!(!is_due(&record, before), "level {} due too early", level);
            assert!(is_due(&record, boundary), "level {} not due on boundary", level);
            assert!(is_due(&record, boundary + Duration::days(10)));
        }
    }

    #[test]
    fn test_new_word_due_next_day() {
        let record = record_at(0, date(2024, 1, 1));
        assert!(!is_due(&record, date(2024, 1, 1)));
        assert!(is_due(&record, date(2024, 1, 2)));
    }

    #[test]
    fn test_remembered_advances_level() {
        let mut record = record_at(0, date(2024, 1, 1));
        let result = apply_outcome(&mut record, ReviewOutcome::Remembered, date(2024, 1, 2));

        assert_eq!(record.level, Level::new(1));
        assert_eq!(record.last_review, ReviewDate::On(date(2024, 1, 2)));
        assert_eq!(result.previous_level, Level::NEW);
        assert_eq!(result.next_due, date(2024, 1, 5));
        assert_eq!(next_due_date(&record, date(2024, 1, 3)), date(2024, 1, 5));
    }

    #[test]
    fn test_remembered_saturates_at_max() {
        for level in 0..=3 {
            let mut record = record_at(level, date(2024, 1, 1));
            apply_outcome(&mut record, ReviewOutcome::Remembered, date(2024, 2, 1));
            assert_eq!(record.level.value() as i64, (level + 1).min(3));
        }
    }

    #[test]
    fn test_forgotten_resets_from_any_level() {
        for level in 0..=3 {
            let mut record = record_at(level, date(2024, 1, 1));
            let result = apply_outcome(&mut record, ReviewOutcome::Forgotten, date(2024, 3, 1));

            assert_eq!(record.level, Level::NEW);
            assert_eq!(record.last_review, ReviewDate::On(date(2024, 3, 1)));
            assert_eq!(result.next_due, date(2024, 3, 2));
        }
    }

    #[test]
    fn test_mastered_word_forgotten_is_due_in_one_day() {
        let mut record = record_at(3, date(2024, 1, 1));
        apply_outcome(&mut record, ReviewOutcome::Forgotten, date(2024, 1, 15));

        assert!(!is_due(&record, date(2024, 1, 15)));
        assert!(is_due(&record, date(2024, 1, 16)));
    }

    #[test]
    fn test_due_records_keeps_store_order() {
        let mut store = VocabularyStore::new();
        store.upsert(WordRecord::new("zebra", date(2024, 1, 1)));
        store.upsert(WordRecord::new("apple", date(2024, 1, 10)));
        store.upsert(WordRecord::new("mango", date(2024, 1, 1)).with_level(Level::new(1)));
        store.upsert(WordRecord::new("kiwi", date(2024, 1, 1)).with_level(Level::MAX));

        let due: Vec<&str> = due_records(&store, date(2024, 1, 5))
            .into_iter()
            .map(|r| r.word.as_str())
            .collect();
        assert_eq!(due, vec!["zebra", "mango"]);

        assert!(due_records(&VocabularyStore::new(), date(2024, 1, 5)).is_empty());
    }

    #[test]
    fn test_unreadable_review_date_is_never_due() {
        let mut record = record_at(0, date(2024, 1, 1))
            .with_last_review(ReviewDate::Unparsed("garbage".to_string()));

        for day in 1..=30 {
            let today = date(2024, 1, day);
            assert!(!is_due(&record, today));
            assert_eq!(next_due_date(&record, today), today + Duration::days(1));
        }

        apply_outcome(&mut record, ReviewOutcome::Remembered, date(2024, 2, 1));
        assert_eq!(record.last_review, ReviewDate::On(date(2024, 2, 1)));
        assert!(is_due(&record, date(2024, 2, 4)));
    }

    #[test]
    fn test_days_until_due() {
        let record = record_at(2, date(2024, 1, 1));
        assert_eq!(days_until_due(&record, date(2024, 1, 1)), 7);
        assert_eq!(days_until_due(&record, date(2024, 1, 8)), 0);
        assert_eq!(days_until_due(&record, date(2024, 1, 10)), -2);
    }

    #[test]
    fn test_review_stats() {
        let mut store = VocabularyStore::new();
        store.upsert(WordRecord::new("a", date(2024, 1, 1)));
        store.upsert(WordRecord::new("b", date(2024, 1, 1)).with_level(Level::new(1)));
        store.upsert(WordRecord::new("c", date(2024, 1, 1)).with_level(Level::MAX));
        store.upsert(WordRecord::new("d", date(2024, 1, 4)));

        let stats = review_stats(&store, date(2024, 1, 4));
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.level_counts, [2, 1, 0, 1]);
        assert_eq!(stats.due_today, 2);
        assert_eq!(stats.mastered(), 1);
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(0), "now");
        assert_eq!(format_interval(1), "1d");
        assert_eq!(format_interval(3), "3d");
        assert_eq!(format_interval(7), "1w");
        assert_eq!(format_interval(14), "2w");
        assert_eq!(format_interval(30), "1mo");
        assert_eq!(format_interval(365), "1y");
    }
}
