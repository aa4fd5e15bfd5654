use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use vocab_lib::config::Config;
use vocab_lib::vocabulary::{VocabularyStorage, VocabularyStore};

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub storage: VocabularyStorage,
    pub store: VocabularyStore,
    pub today: NaiveDate,
}

impl App {
    /// Load config and the vocabulary file
    pub fn new(
        config_path: Option<&Path>,
        data_file: Option<PathBuf>,
        today: Option<NaiveDate>,
    ) -> Result<Self> {
        let config = Config::load(config_path).context("Failed to load config")?;
        let today = today.unwrap_or_else(vocab_lib::today);

        let data_file = data_file.unwrap_or_else(|| config.data_file.clone());
        let storage = VocabularyStorage::new(data_file);
        let store = storage.load().with_context(|| {
            format!("Failed to load vocabulary from {}", storage.path().display())
        })?;

        Ok(Self {
            config,
            storage,
            store,
            today,
        })
    }

    /// Persist the whole vocabulary
    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.store).with_context(|| {
            format!("Failed to save vocabulary to {}", self.storage.path().display())
        })
    }
}
