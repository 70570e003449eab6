//! The `wordquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use wordquiz_core::loader::{distinct_terms, load_vocabulary, validate_vocabulary};

use crate::config::load_config_from;

pub fn execute(source: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let source = source.unwrap_or(config.source);

    let vocabulary = load_vocabulary(&source, &(&config.columns).into())?;
    let distinct = distinct_terms(&vocabulary);

    println!("Vocabulary: {}", source.display());

    let mut table = Table::new();
    table.set_header(vec!["Usable words", "Skipped rows", "Distinct terms", "Per sheet"]);
    table.add_row(vec![
        Cell::new(vocabulary.records.len()),
        Cell::new(vocabulary.skipped_rows),
        Cell::new(distinct),
        Cell::new(config.items_per_quiz.min(vocabulary.records.len())),
    ]);
    println!("{table}");

    vocabulary.ensure_not_empty()?;

    let warnings = validate_vocabulary(&vocabulary);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.term, w.message);
    }

    if vocabulary.records.len() < config.items_per_quiz {
        println!(
            "Note: only {} words available, sheets will have fewer than {} items.",
            vocabulary.records.len(),
            config.items_per_quiz
        );
    }

    if warnings.is_empty() {
        println!("All words valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
