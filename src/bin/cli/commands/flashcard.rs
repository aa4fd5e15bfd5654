use anyhow::Result;

use vocab_lib::quiz::pick_flashcard;

use super::prompt;
use crate::app::App;
use crate::render::terminal::{paint, render_details, Color};

pub fn run(app: &App, use_color: bool) -> Result<()> {
    let mut rng = rand::thread_rng();
    let Some(record) = pick_flashcard(&app.store, &mut rng) else {
        println!("No words yet. Save some with `vocab lookup <word> --save`.");
        return Ok(());
    };

    println!("{}", paint(&record.word, Color::BOLD, use_color));
    if prompt("Press Enter to show the answer...")?.is_none() {
        return Ok(());
    }
    for line in render_details(record, use_color) {
        println!("{}", line);
    }

    Ok(())
}
