//! Dictionary data models

use serde::{Deserialize, Serialize};

/// Text used when the service returns a meaning without a definition
pub const NO_DEFINITION: &str = "No definition found";

/// Enrichment data for a single word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    /// Definition in the source language
    pub meaning: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

// Wire format of api.dictionaryapi.dev, only the fields we read.

#[derive(Debug, Deserialize)]
pub(crate) struct ApiEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiMeaning {
    #[serde(default)]
    pub definitions: Vec<ApiDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDefinition {
    pub definition: Option<String>,
    pub example: Option<String>,
}
