use anyhow::Result;

use vocab_lib::srs::due_records;

use crate::app::App;
use crate::render::terminal::render_heading;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let due = due_records(&app.store, app.today);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&due)?);
        }
        OutputFormat::Plain => {
            if due.is_empty() {
                println!("Nothing to review today.");
                return Ok(());
            }

            println!("{} word(s) due on {}:", due.len(), app.today);
            for record in due {
                println!("  {}", render_heading(record, use_color));
            }
        }
    }

    Ok(())
}
