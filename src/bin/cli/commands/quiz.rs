use anyhow::Result;

use vocab_lib::quiz::{Quiz, QuizError};

use super::prompt;
use crate::app::App;
use crate::render::terminal::{paint, Color};

pub fn run(app: &App, use_color: bool) -> Result<()> {
    let mut rng = rand::thread_rng();
    let quiz = match Quiz::generate(&app.store, &mut rng) {
        Ok(quiz) => quiz,
        Err(e @ QuizError::NotEnoughWords { .. }) => {
            println!("{}. Save more words first.", e);
            return Ok(());
        }
        Err(e) => {
            println!("Cannot build a quiz: {}.", e);
            return Ok(());
        }
    };

    println!("Word: {}", paint(&quiz.word, Color::BOLD, use_color));
    for (i, option) in quiz.options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }

    let choice = loop {
        let Some(input) = prompt("Your answer: ")? else {
            return Ok(());
        };
        match input.parse::<usize>() {
            Ok(n) if (1..=quiz.options.len()).contains(&n) => break n - 1,
            _ => println!("Enter a number from 1 to {}.", quiz.options.len()),
        }
    };

    if quiz.check(choice) {
        println!("{}", paint("Correct!", Color::GREEN, use_color));
    } else {
        let message = match quiz.correct_answer() {
            Some(answer) => format!("Wrong. The answer was: {}", answer),
            None => "Wrong.".to_string(),
        };
        println!("{}", paint(&message, Color::RED, use_color));
    }

    Ok(())
}
