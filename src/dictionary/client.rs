use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::models::{ApiEntry, DictionaryEntry, NO_DEFINITION};
use crate::config::DictionaryConfig;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Word not found: {0}")]
    NotFound(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server error: {status} for {word}")]
    Server { status: u16, word: String },
    #[error("Unexpected response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;

/// Source of word definitions
#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    /// Look up a word. Any error means "no enrichment data available".
    async fn lookup(&self, word: &str) -> Result<DictionaryEntry>;
}

/// Client for the free dictionary API (dictionaryapi.dev)
pub struct FreeDictionaryClient {
    client: Client,
    base_url: String,
}

impl FreeDictionaryClient {
    pub fn new(config: &DictionaryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn entry_url(base_url: &str, word: &str) -> String {
    format!("{}/{}", base_url, urlencoding::encode(word))
}

#[async_trait]
impl DictionaryLookup for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<DictionaryEntry> {
        let url = entry_url(&self.base_url, word);
        log::debug!("Looking up {:?} at {}", word, url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(word.to_string()));
        }
        if !status.is_success() {
            log::warn!("Dictionary request failed with status {} for {:?}", status, word);
            return Err(LookupError::Server {
                status: status.as_u16(),
                word: word.to_string(),
            });
        }

        let body = response.text().await?;
        parse_entries(word, &body)
    }
}

/// Extract the first meaning's first definition from an API response body
pub fn parse_entries(word: &str, body: &str) -> Result<DictionaryEntry> {
    let entries: Vec<ApiEntry> =
        serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NotFound(word.to_string()))?;

    let meaning = entry
        .meanings
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Malformed(format!("no meanings for {}", word)))?;

    let definition = meaning
        .definitions
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Malformed(format!("no definitions for {}", word)))?;

    Ok(DictionaryEntry {
        word: if entry.word.is_empty() {
            word.to_string()
        } else {
            entry.word
        },
        meaning: definition
            .definition
            .unwrap_or_else(|| NO_DEFINITION.to_string()),
        example: definition.example.unwrap_or_default(),
        synonyms: meaning.synonyms,
    })
}
