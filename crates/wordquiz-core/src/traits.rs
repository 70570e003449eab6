//! Renderer trait implemented by the `wordquiz-report` crate.

use anyhow::Result;

use crate::model::QuizDocument;

/// Turns a quiz document into the text of one output file.
///
/// Implementations must be pure: the same document always renders to the
/// same bytes.
pub trait DocumentRenderer {
    /// Short format name (e.g. "html").
    fn name(&self) -> &str;

    /// File extension without the leading dot.
    fn extension(&self) -> &str;

    /// Render a complete, self-contained document.
    fn render(&self, document: &QuizDocument) -> Result<String>;
}
