//! Error types for the scoring core.

use thiserror::Error;

/// Errors reported to the caller before any computation starts.
#[derive(Debug, Error)]
pub enum LexError {
    /// A numeric scoring parameter was non-numeric, NaN or infinite.
    #[error("invalid parameter {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    /// A session edit addressed a document that does not exist.
    #[error("document not found: {0}")]
    DocumentNotFound(usize),

    /// Configuration text could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be rendered as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias.
pub type LexResult<T> = Result<T, LexError>;
