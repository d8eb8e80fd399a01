// ============================================================
// Layer 3 - Pipeline Errors
// ============================================================
// The data layer reports failures with a typed enum so callers
// (and tests) can match on the exact cause, e.g. an unknown
// label. The application and CLI layers wrap these in anyhow
// with extra context.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Error Handling)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepError {
    /// A label value that is not part of the configured class order
    #[error("unknown label '{label}' (expected one of {classes:?})")]
    UnknownLabel { label: String, classes: Vec<String> },

    #[error("column '{column}' not found in input header")]
    MissingColumn { column: String },

    #[error("class order must contain at least one class")]
    EmptyClassOrder,

    #[error("class '{0}' appears more than once in the class order")]
    DuplicateClass(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub type PrepResult<T> = std::result::Result<T, PrepError>;
