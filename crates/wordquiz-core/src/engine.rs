//! Quiz sheet generation loop.
//!
//! Samples the vocabulary pool once per sheet, renders the sample with every
//! configured renderer and writes the results to the output directory. Sheets
//! are produced strictly one after another.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::Rng;

use crate::error::QuizError;
use crate::model::{QuizDocument, VocabularyRecord};
use crate::sampler::sample;
use crate::traits::DocumentRenderer;

/// Default number of items on each sheet.
pub const DEFAULT_ITEMS_PER_QUIZ: usize = 20;

/// Configuration for the quiz engine.
#[derive(Debug, Clone)]
pub struct QuizEngineConfig {
    /// Items requested per sheet; capped at the pool size.
    pub items_per_quiz: usize,
    /// Directory the sheets are written to. Created when missing.
    pub output_dir: PathBuf,
    /// File name prefix, giving `<stem>_<N>.<ext>`.
    pub file_stem: String,
}

impl Default for QuizEngineConfig {
    fn default() -> Self {
        Self {
            items_per_quiz: DEFAULT_ITEMS_PER_QUIZ,
            output_dir: PathBuf::from("output"),
            file_stem: "quiz".to_string(),
        }
    }
}

impl QuizEngineConfig {
    /// Path of the file for sheet `number` in the given extension.
    pub fn document_path(&self, number: usize, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.{}", self.file_stem, number, extension))
    }
}

/// Progress reporting trait.
pub trait ProgressReporter {
    fn on_document_written(&self, number: usize, path: &Path, item_count: usize);
    fn on_run_complete(&self, summary: &GenerationSummary);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_document_written(&self, _: usize, _: &Path, _: usize) {}
    fn on_run_complete(&self, _: &GenerationSummary) {}
}

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of sheets generated.
    pub documents: usize,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
    pub output_dir: PathBuf,
}

/// The quiz generation engine.
pub struct QuizEngine<'a> {
    pool: &'a [VocabularyRecord],
    renderers: Vec<Box<dyn DocumentRenderer>>,
    config: QuizEngineConfig,
}

impl<'a> QuizEngine<'a> {
    pub fn new(
        pool: &'a [VocabularyRecord],
        renderers: Vec<Box<dyn DocumentRenderer>>,
        config: QuizEngineConfig,
    ) -> Self {
        Self {
            pool,
            renderers,
            config,
        }
    }

    /// Build sheet `number` from a fresh sample of the pool.
    pub fn build_document<R: Rng + ?Sized>(
        &self,
        number: usize,
        rng: &mut R,
    ) -> Result<QuizDocument> {
        let picked = sample(self.pool, self.config.items_per_quiz, rng)?;
        Ok(QuizDocument::from_sample(number, &picked))
    }

    /// Generate sheets 1..=`documents`.
    pub fn run<R: Rng + ?Sized>(
        &self,
        documents: usize,
        rng: &mut R,
        progress: &dyn ProgressReporter,
    ) -> Result<GenerationSummary> {
        if self.pool.is_empty() {
            return Err(QuizError::EmptyPool.into());
        }
        anyhow::ensure!(
            self.config.items_per_quiz >= 1,
            "items per quiz must be at least 1"
        );
        anyhow::ensure!(!self.renderers.is_empty(), "no output format selected");

        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("failed to create output directory: {}", output_dir.display())
        })?;

        let mut files = Vec::new();
        for number in 1..=documents {
            let document = self.build_document(number, rng)?;

            for renderer in &self.renderers {
                let path = self.config.document_path(number, renderer.extension());
                let content = renderer
                    .render(&document)
                    .with_context(|| format!("failed to render {}", path.display()))?;
                std::fs::write(&path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::debug!(
                    format = renderer.name(),
                    items = document.len(),
                    "wrote {}",
                    path.display()
                );
                progress.on_document_written(number, &path, document.len());
                files.push(path);
            }
        }

        let summary = GenerationSummary {
            documents,
            files,
            output_dir: output_dir.clone(),
        };
        progress.on_run_complete(&summary);
        Ok(summary)
    }
}
