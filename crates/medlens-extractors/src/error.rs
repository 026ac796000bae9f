//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during document text extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Declared media type has no extraction adapter.
    #[error("Unsupported media type: {0}")]
    UnsupportedType(String),

    /// Parser could not read the document structure.
    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    /// Parser succeeded but the document holds no extractable text.
    /// Distinct from a gate failure: this is an intake fault, raised
    /// before any analysis is attempted.
    #[error("Document contains no extractable text")]
    EmptyDocument,

    /// Extraction exceeded its configured time budget.
    #[error("Extraction exceeded {0}s time budget")]
    Timeout(u64),

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
