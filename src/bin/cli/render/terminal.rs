use chrono::NaiveDate;

use vocab_lib::srs::algorithm::{days_until_due, format_interval};
use vocab_lib::vocabulary::WordRecord;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in a color when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Word heading, e.g. "run  [level 1]"
pub fn render_heading(record: &WordRecord, use_color: bool) -> String {
    format!(
        "{}  {}",
        paint(&record.word, Color::BOLD, use_color),
        paint(&format!("[level {}]", record.level), Color::GRAY, use_color)
    )
}

/// Meaning, example and synonyms of a word, one per line, skipping empty fields
pub fn render_details(record: &WordRecord, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    let meaning = if record.meaning_local.is_empty() {
        paint("(no meaning saved)", Color::DIM, use_color)
    } else {
        record.meaning_local.clone()
    };
    lines.push(format!("  Meaning:  {}", meaning));

    if !record.example_source.is_empty() {
        let example = paint(&record.example_source, Color::CYAN, use_color);
        lines.push(format!("  Example:  {}", example));
    }
    if !record.example_local.is_empty() {
        lines.push(format!("            {}", record.example_local));
    }
    if !record.synonyms.is_empty() {
        lines.push(format!("  Synonyms: {}", record.synonyms.join(", ")));
    }

    lines
}

/// "due now" or "due in 3d"
pub fn render_due(record: &WordRecord, today: NaiveDate, use_color: bool) -> String {
    let days = days_until_due(record, today);
    if days <= 0 {
        paint("due now", Color::YELLOW, use_color)
    } else {
        format!("due in {}", format_interval(days))
    }
}
