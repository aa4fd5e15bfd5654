pub mod due;
pub mod flashcard;
pub mod list;
pub mod lookup;
pub mod progress;
pub mod quiz;
pub mod review;

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Print `message` and read one trimmed line. `None` on end of input.
pub fn prompt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
