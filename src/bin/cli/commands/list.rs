use anyhow::Result;

use vocab_lib::srs::next_due_date;

use crate::app::App;
use crate::render::terminal::render_due;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let records = app.store.all();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = records
                .iter()
                .map(|record| {
                    serde_json::json!({
                        "word": record.word,
                        "meaningLocal": record.meaning_local,
                        "level": record.level,
                        "lastReview": record.last_review,
                        "nextDue": next_due_date(record, app.today),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if records.is_empty() {
                println!("No words saved yet.");
                return Ok(());
            }

            let word_width = records
                .iter()
                .map(|r| r.word.chars().count())
                .max()
                .unwrap_or(4)
                .clamp(4, 24);
            let meaning_width = 30;

            println!(
                "{:<ww$} {:<5} {:<mw$} {}",
                "Word",
                "Level",
                "Meaning",
                "Review",
                ww = word_width,
                mw = meaning_width
            );
            println!(
                "{} {} {} {}",
                "\u{2500}".repeat(word_width),
                "\u{2500}".repeat(5),
                "\u{2500}".repeat(meaning_width),
                "\u{2500}".repeat(10)
            );

            for record in records {
                println!(
                    "{:<ww$} {:<5} {:<mw$} {}",
                    truncate(&record.word, word_width),
                    record.level.to_string(),
                    truncate(&record.meaning_local, meaning_width),
                    render_due(record, app.today, use_color),
                    ww = word_width,
                    mw = meaning_width
                );
            }
        }
    }

    Ok(())
}

/// Cut `text` to at most `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
