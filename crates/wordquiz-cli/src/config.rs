//! Configuration file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use wordquiz_core::engine::DEFAULT_ITEMS_PER_QUIZ;
use wordquiz_core::loader::ColumnNames;
use wordquiz_report::html::DEFAULT_TITLE;

/// Header names of the vocabulary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    #[serde(default = "default_term_column")]
    pub term: String,
    #[serde(default = "default_meaning_column")]
    pub meaning: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            term: default_term_column(),
            meaning: default_meaning_column(),
        }
    }
}

impl From<&ColumnConfig> for ColumnNames {
    fn from(c: &ColumnConfig) -> Self {
        ColumnNames {
            term: c.term.clone(),
            meaning: c.meaning.clone(),
        }
    }
}

/// Top-level wordquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordquizConfig {
    /// Vocabulary table to read.
    #[serde(default = "default_source")]
    pub source: PathBuf,
    /// Directory quiz sheets are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Items per sheet, capped at the number of loaded words.
    #[serde(default = "default_items_per_quiz")]
    pub items_per_quiz: usize,
    /// Output file prefix.
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
    /// Heading printed on each sheet.
    #[serde(default = "default_title")]
    pub title: String,
    /// Output formats written for every sheet.
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    /// Fixed random seed, for reproducible sheets.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub columns: ColumnConfig,
}

fn default_source() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
fn default_items_per_quiz() -> usize {
    DEFAULT_ITEMS_PER_QUIZ
}
fn default_file_stem() -> String {
    "quiz".to_string()
}
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_formats() -> Vec<String> {
    vec!["html".to_string()]
}
fn default_term_column() -> String {
    "word".to_string()
}
fn default_meaning_column() -> String {
    "meaning(KOR)".to_string()
}

impl Default for WordquizConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output_dir: default_output_dir(),
            items_per_quiz: default_items_per_quiz(),
            file_stem: default_file_stem(),
            title: default_title(),
            formats: default_formats(),
            seed: None,
            columns: ColumnConfig::default(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `wordquiz.toml` in the current directory
/// 2. `~/.config/wordquiz/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<WordquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("wordquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<WordquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => WordquizConfig::default(),
    };

    anyhow::ensure!(
        config.items_per_quiz >= 1,
        "items_per_quiz must be at least 1"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("wordquiz"))
}
