//! Core data model types for wordquiz.
//!
//! A vocabulary pool is loaded once and stays read-only; quiz documents are
//! built from a sample of it, rendered, and dropped.

use serde::{Deserialize, Serialize};

/// One usable row of the vocabulary table.
///
/// Both fields are non-empty; the loader drops rows where either is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    /// The word the learner has to recall.
    pub term: String,
    /// The meaning shown on the sheet.
    pub definition: String,
}

impl VocabularyRecord {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// A single row of a quiz sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    /// 1-based position on the sheet.
    pub sequence_number: usize,
    /// Lowercased first character of the term.
    pub first_character: String,
    /// Meaning, carried through unmodified.
    pub definition: String,
    /// Full term, lowercased. Never printed on the sheet.
    pub answer: String,
}

impl QuizItem {
    fn from_record(sequence_number: usize, record: &VocabularyRecord) -> Self {
        Self {
            sequence_number,
            first_character: first_character_hint(&record.term),
            definition: record.definition.clone(),
            answer: record.term.to_lowercase(),
        }
    }
}

/// An ordered set of quiz items plus the number identifying the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDocument {
    /// 1-based document index, used for the title and the file name.
    pub number: usize,
    pub items: Vec<QuizItem>,
}

impl QuizDocument {
    /// Number the sampled records 1..N in the order given.
    pub fn from_sample(number: usize, sample: &[VocabularyRecord]) -> Self {
        let items = sample
            .iter()
            .enumerate()
            .map(|(i, record)| QuizItem::from_record(i + 1, record))
            .collect();
        Self { number, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Lowercase the first character of `term`.
///
/// Some characters lowercase to more than one code point, so the hint is a
/// string rather than a `char`.
pub fn first_character_hint(term: &str) -> String {
    term.chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}
