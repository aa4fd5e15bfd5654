mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use vocab_lib::vocabulary::storage::parse_review_date;

#[derive(Parser)]
#[command(name = "vocab", about = "Vocabulary trainer with spaced repetition", version)]
struct Cli {
    /// Vocabulary CSV file (overrides the config file)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Config file (default: <config dir>/vocab/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a word in the dictionary, optionally saving it
    Lookup {
        /// Word to look up
        word: String,
        /// Save the word to the vocabulary
        #[arg(long)]
        save: bool,
        /// Meaning in your language (prompted for when saving interactively)
        #[arg(long)]
        meaning: Option<String>,
    },

    /// List words due for review today
    Due,

    /// Review due words interactively
    Review,

    /// Show a random flashcard
    Flashcard,

    /// Multiple-choice quiz on a random word
    Quiz,

    /// Show progress by level
    Progress,

    /// List all saved words
    List,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_review_date(value).ok_or_else(|| format!("'{}' is not a YYYY-MM-DD date", value))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    let mut app = app::App::new(cli.config.as_deref(), cli.data_file, cli.today)?;

    match cli.command {
        Command::Lookup { word, save, meaning } => {
            commands::lookup::run(&mut app, &word, save, meaning, &cli.format, use_color).await?;
        }
        Command::Due => {
            commands::due::run(&app, &cli.format, use_color)?;
        }
        Command::Review => {
            commands::review::run(&mut app, use_color)?;
        }
        Command::Flashcard => {
            commands::flashcard::run(&app, use_color)?;
        }
        Command::Quiz => {
            commands::quiz::run(&app, use_color)?;
        }
        Command::Progress => {
            commands::progress::run(&app, &cli.format, use_color)?;
        }
        Command::List => {
            commands::list::run(&app, &cli.format, use_color)?;
        }
    }

    Ok(())
}
