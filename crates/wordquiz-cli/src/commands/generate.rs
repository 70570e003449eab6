//! The `wordquiz generate` command.

use std::io;
use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordquiz_core::engine::{GenerationSummary, ProgressReporter, QuizEngine, QuizEngineConfig};
use wordquiz_core::loader::load_vocabulary;
use wordquiz_core::prompt::prompt_document_count;
use wordquiz_core::traits::DocumentRenderer;
use wordquiz_report::{create_renderer, FORMATS};

use crate::config::load_config_from;
use crate::GenerateArgs;

/// Console progress reporter.
struct ConsoleReporter {
    printable: bool,
}

impl ProgressReporter for ConsoleReporter {
    fn on_document_written(&self, number: usize, path: &Path, item_count: usize) {
        println!(
            "Quiz sheet {number} written: {} ({item_count} words)",
            path.display()
        );
    }

    fn on_run_complete(&self, summary: &GenerationSummary) {
        println!(
            "\n{} quiz sheet(s) generated in '{}'.",
            summary.documents,
            summary.output_dir.display()
        );
        if self.printable {
            println!("Open the HTML files in a browser to print them or save them as PDF.");
        }
    }
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let mut config = load_config_from(args.config.as_deref())?;

    if let Some(source) = args.source {
        config.source = source;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }
    if let Some(items) = args.items {
        config.items_per_quiz = items;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(format) = &args.format {
        config.formats = if format == "all" {
            FORMATS.iter().map(|f| f.to_string()).collect()
        } else {
            format.split(',').map(|f| f.trim().to_string()).collect()
        };
    }

    // Resolve renderers before touching the filesystem.
    let renderers = config
        .formats
        .iter()
        .map(|f| create_renderer(f, &config.title))
        .collect::<Result<Vec<Box<dyn DocumentRenderer>>>>()?;
    let printable = renderers.iter().any(|r| r.name() == "html");

    let vocabulary = load_vocabulary(&config.source, &(&config.columns).into())?;
    println!(
        "Loaded {} words from {}",
        vocabulary.records.len(),
        config.source.display()
    );
    if vocabulary.skipped_rows > 0 {
        println!(
            "Skipped {} row(s) missing a word or meaning",
            vocabulary.skipped_rows
        );
    }
    vocabulary.ensure_not_empty()?;

    let count = match args.count {
        Some(count) => count,
        None => {
            println!();
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            match prompt_document_count(&mut stdin.lock(), &mut stdout)? {
                Some(count) => count,
                None => {
                    println!("Cancelled, no quiz sheets generated.");
                    return Ok(());
                }
            }
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let engine = QuizEngine::new(
        &vocabulary.records,
        renderers,
        QuizEngineConfig {
            items_per_quiz: config.items_per_quiz,
            output_dir: config.output_dir.clone(),
            file_stem: config.file_stem.clone(),
        },
    );
    engine.run(count, &mut rng, &ConsoleReporter { printable })?;

    Ok(())
}
