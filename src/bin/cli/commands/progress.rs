use anyhow::Result;

use vocab_lib::srs::algorithm::format_interval;
use vocab_lib::srs::{review_stats, INTERVALS};

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

const BAR_WIDTH: usize = 30;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stats = review_stats(&app.store, app.today);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!("Total words: {}", stats.total_words);
            if stats.total_words == 0 {
                return Ok(());
            }

            let largest = stats.level_counts.iter().copied().max().unwrap_or(0).max(1);
            for (level, count) in stats.level_counts.iter().enumerate() {
                let width = count * BAR_WIDTH / largest;
                println!(
                    "  Level {} ({:>3}) {:>4} {}",
                    level,
                    format_interval(INTERVALS[level]),
                    count,
                    paint(&"\u{2588}".repeat(width), Color::CYAN, use_color)
                );
            }
            println!("Due today: {}", stats.due_today);
        }
    }

    Ok(())
}
