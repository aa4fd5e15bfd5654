//! Dictionary lookups and word enrichment
//!
//! This module provides:
//! - The `DictionaryLookup` boundary and an HTTP client for dictionaryapi.dev
//! - The `Translator` boundary
//! - Saving looked-up words into the vocabulary

pub mod client;
pub mod enrich;
pub mod models;
pub mod translate;

pub use client::{DictionaryLookup, FreeDictionaryClient, LookupError};
pub use enrich::{lookup_and_save, save_word, SaveOutcome};
pub use models::DictionaryEntry;
pub use translate::{TranslateError, Translator};
