//! Translation boundary
//!
//! No translation service ships with the crate; callers that have one plug it
//! in through `Translator`. A failed translation never blocks saving a word.

use async_trait::async_trait;
use thiserror::Error;

/// Language of dictionary definitions and examples
pub const SOURCE_LANG: &str = "en";

/// Language of the learner's own meanings
pub const LOCAL_LANG: &str = "vi";

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Translation failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        dest: &str,
    ) -> Result<String, TranslateError>;
}

/// Translate `text`, falling back to an empty string on any failure
pub async fn translate_or_empty(translator: Option<&dyn Translator>, text: &str) -> String {
    let Some(translator) = translator else {
        return String::new();
    };
    if text.trim().is_empty() {
        return String::new();
    }

    match translator.translate(text, SOURCE_LANG, LOCAL_LANG).await {
        Ok(translated) => translated,
        Err(e) => {
            log::warn!("Leaving translation empty: {}", e);
            String::new()
        }
    }
}
