use anyhow::{Context, Result};

use vocab_lib::srs::algorithm::format_interval;
use vocab_lib::srs::{ReviewAnswer, ReviewOutcome, ReviewSession, INTERVALS};

use super::prompt;
use crate::app::App;
use crate::render::terminal::{paint, render_details, render_heading, Color};

fn parse_answer(input: &str) -> Option<ReviewAnswer> {
    match input.to_lowercase().as_str() {
        "r" | "y" | "remembered" => Some(ReviewAnswer::Remembered),
        "f" | "n" | "forgotten" => Some(ReviewAnswer::Forgotten),
        "s" | "skip" => Some(ReviewAnswer::Skip),
        _ => None,
    }
}

pub fn run(app: &mut App, use_color: bool) -> Result<()> {
    let mut session = ReviewSession::start(&app.store, app.today);

    if session.is_empty() {
        println!("Nothing to review today.");
        return Ok(());
    }

    let intervals = INTERVALS
        .iter()
        .map(|days| format_interval(*days))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{} word(s) to review (intervals: {})\n", session.len(), intervals);

    while !session.is_finished() {
        let record = session
            .current(&app.store)
            .context("Due word disappeared from the vocabulary")?;

        println!("{}. {}", session.position() + 1, render_heading(record, use_color));
        if app.config.review.reveal_before_answer
            && prompt("   Press Enter to show the meaning...")?.is_none()
        {
            break;
        }
        for line in render_details(record, use_color) {
            println!("{}", line);
        }

        let answer = loop {
            match prompt("   [r]emembered / [f]orgotten / [s]kip: ")? {
                None => break None,
                Some(input) => match parse_answer(&input) {
                    Some(answer) => break Some(answer),
                    None => println!("   Please answer r, f or s."),
                },
            }
        };
        let Some(answer) = answer else {
            break;
        };

        if let Some(result) = session.answer(&mut app.store, answer)? {
            // Persist after every answer so an interrupted session keeps its progress
            app.save()?;
            let (text, color) = match result.outcome {
                ReviewOutcome::Remembered => (
                    format!(
                        "   Level {} -> {}, next review {}",
                        result.previous_level, result.level, result.next_due
                    ),
                    Color::GREEN,
                ),
                ReviewOutcome::Forgotten => (
                    format!("   Reset to level 0, next review {}", result.next_due),
                    Color::RED,
                ),
            };
            println!("{}\n", paint(&text, color, use_color));
        } else {
            println!();
        }
    }

    let summary = session.summary();
    println!(
        "Reviewed {} of {}: {} remembered, {} forgotten, {} skipped.",
        summary.answered(),
        session.len(),
        summary.remembered,
        summary.forgotten,
        summary.skipped
    );

    Ok(())
}
