use std::io::IsTerminal;

use anyhow::Result;

use vocab_lib::dictionary::{save_word, DictionaryLookup, FreeDictionaryClient};
use vocab_lib::vocabulary::normalize_word;

use super::prompt;
use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub async fn run(
    app: &mut App,
    word: &str,
    save: bool,
    meaning: Option<String>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let word = normalize_word(word);
    if word.is_empty() {
        eprintln!("Please enter a word.");
        return Ok(());
    }

    let client = FreeDictionaryClient::new(&app.config.dictionary)?;
    let mut entry = match client.lookup(&word).await {
        Ok(entry) => entry,
        Err(e) => {
            log::info!("Lookup for {:?} failed: {}", word, e);
            eprintln!("No dictionary data for \"{}\". Try another word.", word);
            return Ok(());
        }
    };
    entry.word = word;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        OutputFormat::Plain => {
            println!("{}", paint(&entry.word, Color::BOLD, use_color));
            println!("  Meaning (EN): {}", entry.meaning);
            if !entry.example.is_empty() {
                println!("  Example (EN): {}", paint(&entry.example, Color::CYAN, use_color));
            }
            if !entry.synonyms.is_empty() {
                println!("  Synonyms:     {}", entry.synonyms.join(", "));
            }
        }
    }

    if !save {
        return Ok(());
    }

    let meaning = match meaning {
        Some(m) => Some(m),
        None if asks_for_meaning(format, std::io::stdin().is_terminal()) => {
            prompt("Your meaning (Enter to leave empty): ")?
        }
        None => None,
    };

    let outcome = save_word(&mut app.store, &entry, meaning.as_deref(), None, app.today).await;
    app.save()?;

    let message = if outcome.inserted {
        format!("Saved \"{}\" to your vocabulary.", outcome.record.word)
    } else {
        format!("Updated \"{}\" and reset it to level 0.", outcome.record.word)
    };
    eprintln!("{}", paint(&message, Color::GREEN, use_color));

    Ok(())
}

/// The meaning prompt writes to stdout, so JSON output never gets one
fn asks_for_meaning(format: &OutputFormat, interactive: bool) -> bool {
    interactive && matches!(format, OutputFormat::Plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_skips_meaning_prompt() {
        assert!(asks_for_meaning(&OutputFormat::Plain, true));
        assert!(!asks_for_meaning(&OutputFormat::Plain, false));
        assert!(!asks_for_meaning(&OutputFormat::Json, true));
    }
}
