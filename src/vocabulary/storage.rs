//! CSV persistence for the vocabulary record set
//!
//! File layout (one row per word, header required):
//! ```text
//! Word,MeaningVI,Synonyms,ExampleEN,ExampleVI,LastReview,Level
//! run,chạy,"sprint, dash",I run every day,,2024-01-01,0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{normalize_word, Level, ReviewDate, WordRecord};
use super::store::VocabularyStore;

/// Date format used for `LastReview`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SYNONYM_SEPARATOR: &str = ", ";

const HEADERS: [&str; 7] = [
    "Word",
    "MeaningVI",
    "Synonyms",
    "ExampleEN",
    "ExampleVI",
    "LastReview",
    "Level",
];

#[derive(Error, Debug)]
pub enum VocabStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to finalize CSV writer: {0}")]
    Flush(String),
}

pub type Result<T> = std::result::Result<T, VocabStorageError>;

/// Raw row as it appears on disk. Every field is kept as text so a single
/// bad cell never rejects the whole row.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Word", default)]
    word: String,
    #[serde(rename = "MeaningVI", default)]
    meaning_vi: String,
    #[serde(rename = "Synonyms", default)]
    synonyms: String,
    #[serde(rename = "ExampleEN", default)]
    example_en: String,
    #[serde(rename = "ExampleVI", default)]
    example_vi: String,
    #[serde(rename = "LastReview", default)]
    last_review: String,
    #[serde(rename = "Level", default)]
    level: String,
}

impl CsvRow {
    fn into_record(self) -> WordRecord {
        let last_review = match parse_review_date(&self.last_review) {
            Some(date) => ReviewDate::On(date),
            None => {
                log::warn!(
                    "Unparseable LastReview {:?} for word {:?}, treating as reviewed today",
                    self.last_review,
                    self.word
                );
                ReviewDate::Unparsed(self.last_review)
            }
        };

        WordRecord {
            word: normalize_word(&self.word),
            meaning_local: self.meaning_vi,
            synonyms: split_synonyms(&self.synonyms),
            example_source: self.example_en,
            example_local: self.example_vi,
            last_review,
            level: parse_level(&self.level),
        }
    }

    fn from_record(record: &WordRecord) -> Self {
        Self {
            word: record.word.clone(),
            meaning_vi: record.meaning_local.clone(),
            synonyms: record.synonyms.join(SYNONYM_SEPARATOR),
            example_en: record.example_source.clone(),
            example_vi: record.example_local.clone(),
            last_review: match &record.last_review {
                ReviewDate::On(date) => date.format(DATE_FORMAT).to_string(),
                ReviewDate::Unparsed(raw) => raw.clone(),
            },
            level: record.level.to_string(),
        }
    }
}

/// Parse a `YYYY-MM-DD` review date, `None` when absent or malformed
pub fn parse_review_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parse a stored level. Empty or malformed cells mean level 0; spreadsheet
/// style floats ("2.0") are truncated.
fn parse_level(value: &str) -> Level {
    let value = value.trim();
    if let Ok(n) = value.parse::<i64>() {
        return Level::new(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() => Level::new(f as i64),
        _ => Level::NEW,
    }
}

fn split_synonyms(value: &str) -> Vec<String> {
    value
        .split(SYNONYM_SEPARATOR)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Loads and saves the vocabulary CSV file
pub struct VocabularyStorage {
    path: PathBuf,
}

impl VocabularyStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records. A missing file yields an empty store.
    ///
    /// Review dates that cannot be parsed are kept as text and written back
    /// unchanged by `save`.
    pub fn load(&self) -> Result<VocabularyStore> {
        if !self.path.exists() {
            log::info!("No vocabulary file at {:?}, starting empty", self.path);
            return Ok(VocabularyStore::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let store = parse_csv(&content)?;
        log::debug!("Loaded {} words from {:?}", store.len(), self.path);
        Ok(store)
    }

    /// Write all records, replacing the file atomically (write .tmp, then rename)
    pub fn save(&self, store: &VocabularyStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = to_csv(store)?;
        let tmp_path = self.path.with_extension("csv.tmp");
        fs::write(&tmp_path, bytes)?;
        fs::rename(&tmp_path, &self.path)?;

        log::debug!("Saved {} words to {:?}", store.len(), self.path);
        Ok(())
    }
}

fn parse_csv(content: &str) -> Result<VocabularyStore> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut store = VocabularyStore::new();
    for (row_idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping unreadable vocabulary row {}: {}", row_idx + 1, e);
                continue;
            }
        };

        if row.word.trim().is_empty() {
            continue;
        }

        store.upsert(row.into_record());
    }

    Ok(store)
}

fn to_csv(store: &VocabularyStore) -> Result<Vec<u8>> {
    // Headers are written by hand so an empty store still gets them
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for record in store.all() {
        writer.serialize(CsvRow::from_record(record))?;
    }

    writer
        .into_inner()
        .map_err(|e| VocabStorageError::Flush(e.to_string()))
}
