//! Quiz generation error types.
//!
//! Loader and sampler failures are raised through `anyhow` as [`QuizError`]
//! so the CLI can downcast and pick the right user-facing message without
//! string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of a generation run.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The vocabulary table does not exist or cannot be read.
    #[error("vocabulary source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The vocabulary table could not be interpreted.
    #[error("malformed vocabulary source {}: {reason}", path.display())]
    MalformedSource { path: PathBuf, reason: String },

    /// No usable records survived loading.
    #[error("no usable vocabulary records to sample from")]
    EmptyPool,
}

/// Why a line typed at the document-count prompt was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountInputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("at least one document must be generated")]
    NotPositive,
}
