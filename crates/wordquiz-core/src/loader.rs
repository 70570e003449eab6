//! Vocabulary table loader.
//!
//! Reads a UTF-8 CSV file (an optional byte-order mark is ignored) whose
//! header names a term column and a meaning column, and validates the result.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use crate::error::QuizError;
use crate::model::{first_character_hint, VocabularyRecord};

const UTF8_BOM: char = '\u{feff}';

/// Header names of the two columns the loader reads. Other columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub term: String,
    pub meaning: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            term: "word".to_string(),
            meaning: "meaning(KOR)".to_string(),
        }
    }
}

/// Records that survived loading, plus how many data rows were dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadedVocabulary {
    /// Usable records in file order.
    pub records: Vec<VocabularyRecord>,
    /// Data rows with a missing or blank term or meaning.
    pub skipped_rows: usize,
}

impl LoadedVocabulary {
    /// Fail with [`QuizError::EmptyPool`] when nothing can be sampled.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(QuizError::EmptyPool.into());
        }
        Ok(())
    }
}

/// Load records from `path` using the default `word` / `meaning(KOR)` columns.
pub fn load_records(path: &Path) -> Result<Vec<VocabularyRecord>> {
    Ok(load_vocabulary(path, &ColumnNames::default())?.records)
}

/// Load a vocabulary table, keeping track of dropped rows.
pub fn load_vocabulary(path: &Path, columns: &ColumnNames) -> Result<LoadedVocabulary> {
    let bytes = std::fs::read(path).map_err(|e| {
        tracing::debug!("cannot read {}: {}", path.display(), e);
        QuizError::SourceNotFound {
            path: path.to_path_buf(),
        }
    })?;

    let content = String::from_utf8(bytes).map_err(|e| QuizError::MalformedSource {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8 ({e})"),
    })?;

    let loaded = parse_vocabulary_str(&content, path, columns)?;
    tracing::info!(
        records = loaded.records.len(),
        skipped = loaded.skipped_rows,
        "loaded vocabulary from {}",
        path.display()
    );
    Ok(loaded)
}

/// Parse CSV text into records (useful for testing).
pub fn parse_vocabulary_str(
    content: &str,
    source_path: &Path,
    columns: &ColumnNames,
) -> Result<LoadedVocabulary> {
    let malformed = |reason: String| QuizError::MalformedSource {
        path: source_path.to_path_buf(),
        reason,
    };

    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| malformed(format!("unreadable header row: {e}")))?
        .clone();

    let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let (term_idx, meaning_idx) = match (find(&columns.term), find(&columns.meaning)) {
        (Some(t), Some(m)) => (t, m),
        (t, m) => {
            let missing: Vec<&str> = [(t, columns.term.as_str()), (m, columns.meaning.as_str())]
                .into_iter()
                .filter(|(idx, _)| idx.is_none())
                .map(|(_, name)| name)
                .collect();
            return Err(malformed(format!(
                "header is missing required column(s): {}",
                missing.join(", ")
            ))
            .into());
        }
    };

    let mut loaded = LoadedVocabulary::default();
    for row in reader.records() {
        let row = row.map_err(|e| malformed(e.to_string()))?;
        let term = row.get(term_idx).unwrap_or_default();
        let meaning = row.get(meaning_idx).unwrap_or_default();

        if term.is_empty() || meaning.is_empty() {
            loaded.skipped_rows += 1;
            continue;
        }
        loaded.records.push(VocabularyRecord::new(term, meaning));
    }

    Ok(loaded)
}

/// A warning from vocabulary validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The term concerned.
    pub term: String,
    /// Warning message.
    pub message: String,
}

/// Check a loaded vocabulary for entries that make poor quiz items.
pub fn validate_vocabulary(vocabulary: &LoadedVocabulary) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen: HashMap<String, usize> = HashMap::new();
    for record in &vocabulary.records {
        let count = seen.entry(record.term.to_lowercase()).or_default();
        *count += 1;
        if *count == 2 {
            warnings.push(ValidationWarning {
                term: record.term.clone(),
                message: format!("duplicate term: {}", record.term),
            });
        }
    }

    for record in &vocabulary.records {
        let hint = first_character_hint(&record.term);
        if !hint.chars().all(char::is_alphabetic) {
            warnings.push(ValidationWarning {
                term: record.term.clone(),
                message: format!("hint '{hint}' is not a letter"),
            });
        }
    }

    warnings
}

/// Number of distinct terms, compared case-insensitively.
pub fn distinct_terms(vocabulary: &LoadedVocabulary) -> usize {
    vocabulary
        .records
        .iter()
        .map(|r| r.term.to_lowercase())
        .collect::<std::collections::HashSet<_>>()
        .len()
}
