//! In-memory vocabulary record set

use std::collections::HashMap;

use super::models::{normalize_word, WordRecord};

/// All learned words, keyed by normalized word text.
///
/// Records keep their insertion order, so iteration is stable for the
/// lifetime of a loaded store.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    records: Vec<WordRecord>,
    index: HashMap<String, usize>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a record by word (case-insensitive)
    pub fn find_by_word(&self, word: &str) -> Option<&WordRecord> {
        self.index
            .get(&normalize_word(word))
            .map(|&pos| &self.records[pos])
    }

    /// Modify the record for `word` in place, `None` when the word is absent.
    ///
    /// The record's key is restored after `f` runs, so the index always
    /// matches the stored words.
    pub fn update<T>(&mut self, word: &str, f: impl FnOnce(&mut WordRecord) -> T) -> Option<T> {
        let pos = *self.index.get(&normalize_word(word))?;
        let record = &mut self.records[pos];

        let key = record.word.clone();
        let out = f(record);
        if record.word != key {
            log::warn!("Ignoring key change {:?} -> {:?} during update", key, record.word);
            record.word = key;
        }
        Some(out)
    }

    /// Insert a record, or overwrite the existing record with the same word.
    ///
    /// Returns `true` when the word was not in the store before.
    pub fn upsert(&mut self, mut record: WordRecord) -> bool {
        record.word = normalize_word(&record.word);

        if let Some(&pos) = self.index.get(&record.word) {
            self.records[pos].overwrite_from(record);
            return false;
        }

        self.index.insert(record.word.clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// All records in insertion order
    pub fn all(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<WordRecord> for VocabularyStore {
    fn from_iter<I: IntoIterator<Item = WordRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.upsert(record);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::models::{Level, ReviewDate};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_upsert_then_find() {
        let mut store = VocabularyStore::new();
        let record = WordRecord::new("run", date(2024, 1, 1)).with_meaning("chạy");

        assert!(store.upsert(record.clone()));
        assert_eq!(store.find_by_word("run"), Some(&record));
        assert_eq!(store.find_by_word("RUN "), Some(&record));
        assert!(store.find_by_word("walk").is_none());
    }

    #[test]
    fn test_upsert_same_word_updates_in_place() {
        let mut store = VocabularyStore::new();
        store.upsert(WordRecord::new("run", date(2024, 1, 1)).with_level(Level::new(2)));
        store.upsert(WordRecord::new("walk", date(2024, 1, 1)));

        let replacement = WordRecord::new("Run", date(2024, 2, 1)).with_meaning("chạy bộ");
        assert!(!store.upsert(replacement));

        assert_eq!(store.len(), 2);
        let first = &store.all()[0];
        assert_eq!(first.word, "run");
        assert_eq!(first.meaning_local, "chạy bộ");
        assert_eq!(first.level, Level::NEW);
        assert_eq!(first.last_review, ReviewDate::On(date(2024, 2, 1)));
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let store: VocabularyStore = ["cat", "apple", "bird", "apple"]
            .iter()
            .map(|w| WordRecord::new(w, date(2024, 1, 1)))
            .collect();

        let words: Vec<&str> = store.all().iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "apple", "bird"]);
    }

    #[test]
    fn test_update_in_place() {
        let mut store = VocabularyStore::new();
        store.upsert(WordRecord::new("run", date(2024, 1, 1)));

        let old = store.update("RUN", |record| std::mem::replace(&mut record.level, Level::MAX));
        assert_eq!(old, Some(Level::NEW));
        assert_eq!(store.find_by_word("run").unwrap().level, Level::MAX);
        assert_eq!(store.update("walk", |_| ()), None);
    }

    #[test]
    fn test_update_cannot_change_key() {
        let mut store = VocabularyStore::new();
        store.upsert(WordRecord::new("run", date(2024, 1, 1)));

        store.update("run", |record| record.word = "walk".to_string());
        assert!(store.upsert(WordRecord::new("walk", date(2024, 1, 2))));

        let words: Vec<&str> = store.all().iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["run", "walk"]);
        assert_eq!(store.find_by_word("run").unwrap().word, "run");
    }
}
