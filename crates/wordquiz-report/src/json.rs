//! JSON export of a quiz sheet, answers included.

use anyhow::{Context, Result};
use serde::Serialize;

use wordquiz_core::model::{QuizDocument, QuizItem};
use wordquiz_core::traits::DocumentRenderer;

#[derive(Serialize)]
struct JsonQuiz<'a> {
    quiz: usize,
    item_count: usize,
    items: &'a [QuizItem],
}

/// Renders quiz sheets as pretty-printed JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn render(&self, document: &QuizDocument) -> Result<String> {
        generate_json(document)
    }
}

/// Serialize a document as pretty-printed JSON.
pub fn generate_json(document: &QuizDocument) -> Result<String> {
    let quiz = JsonQuiz {
        quiz: document.number,
        item_count: document.len(),
        items: &document.items,
    };
    serde_json::to_string_pretty(&quiz)
        .with_context(|| format!("failed to serialize quiz {}", document.number))
}
