//! Saving looked-up words into the vocabulary
//!
//! A word is only created once a lookup succeeded. Saving a word that is
//! already known refreshes its content and restarts it at level 0.

use chrono::NaiveDate;

use super::client::{DictionaryLookup, LookupError};
use super::models::DictionaryEntry;
use super::translate::{translate_or_empty, Translator};
use crate::vocabulary::{normalize_word, VocabularyStore, WordRecord};

/// Result of saving a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub record: WordRecord,
    /// `false` when an existing word was refreshed
    pub inserted: bool,
}

/// Build a record from a dictionary entry and upsert it
///
/// # Arguments
/// * `store` - Vocabulary to update
/// * `entry` - Successful lookup result
/// * `user_meaning` - Meaning typed by the learner; takes precedence over translation
/// * `translator` - Optional translation service for meaning and example
/// * `today` - Save date, becomes the record's review date
pub async fn save_word(
    store: &mut VocabularyStore,
    entry: &DictionaryEntry,
    user_meaning: Option<&str>,
    translator: Option<&dyn Translator>,
    today: NaiveDate,
) -> SaveOutcome {
    let meaning_local = match user_meaning.map(str::trim).filter(|m| !m.is_empty()) {
        Some(meaning) => meaning.to_string(),
        None => translate_or_empty(translator, &entry.meaning).await,
    };
    let example_local = translate_or_empty(translator, &entry.example).await;

    let record = WordRecord::new(&entry.word, today)
        .with_meaning(meaning_local)
        .with_synonyms(entry.synonyms.clone())
        .with_examples(entry.example.clone(), example_local);

    let inserted = store.upsert(record.clone());
    if inserted {
        log::info!("Saved new word {:?}", record.word);
    } else {
        log::info!("Refreshed word {:?}, level reset to 0", record.word);
    }

    SaveOutcome { record, inserted }
}

/// Look up `word` and save it. On lookup failure the store is untouched.
pub async fn lookup_and_save(
    store: &mut VocabularyStore,
    dictionary: &dyn DictionaryLookup,
    word: &str,
    user_meaning: Option<&str>,
    translator: Option<&dyn Translator>,
    today: NaiveDate,
) -> Result<SaveOutcome, LookupError> {
    let word = normalize_word(word);
    let mut entry = dictionary.lookup(&word).await?;
    // The store is keyed by what the learner asked for, not the API headword
    entry.word = word;

    Ok(save_word(store, &entry, user_meaning, translator, today).await)
}
