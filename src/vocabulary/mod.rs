//! Vocabulary record set
//!
//! This module provides:
//! - Word records with a clamped mastery level
//! - The in-memory store keyed by normalized word
//! - CSV persistence

pub mod models;
pub mod storage;
pub mod store;

pub use models::*;
pub use storage::{VocabStorageError, VocabularyStorage};
pub use store::VocabularyStore;
