//! wordquiz CLI — printable vocabulary quiz sheet generator.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use wordquiz_core::error::QuizError;
use wordquiz_core::prompt::parse_document_count;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "wordquiz",
    version,
    about = "Printable vocabulary quiz sheet generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate quiz sheets (the default when no command is given)
    Generate(GenerateArgs),

    /// Check a vocabulary table and report unusable rows
    Validate {
        /// Vocabulary CSV file
        #[arg(long)]
        source: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and sample vocabulary table
    Init,
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Vocabulary CSV file
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Number of quiz sheets; asked interactively when omitted
    #[arg(long, value_parser = parse_document_count)]
    pub count: Option<usize>,

    /// Words per quiz sheet
    #[arg(long, value_parser = parse_items_per_quiz)]
    pub items: Option<usize>,

    /// Random seed for reproducible sheets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: html, json, all (comma-separated)
    #[arg(long)]
    pub format: Option<String>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_items_per_quiz(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("a quiz sheet needs at least one word".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid word count", s.trim())),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordquiz=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::generate::execute(GenerateArgs::default()),
        Some(Commands::Generate(args)) => commands::generate::execute(args),
        Some(Commands::Validate { source, config }) => commands::validate::execute(source, config),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("{}", describe_failure(&e));
        process::exit(1);
    }
}

/// Turn a failed run into the message shown to the user.
fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<QuizError>() {
        Some(QuizError::SourceNotFound { path }) => format!(
            "Error: vocabulary file not found: {}\nRun `wordquiz init` to create a sample, or pass --source.",
            path.display()
        ),
        Some(QuizError::EmptyPool) => {
            "Error: the vocabulary file has no rows with both a word and a meaning.".to_string()
        }
        _ => format!("Error: {err:#}"),
    }
}
