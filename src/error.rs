/// Error handling module for the reply pipeline.
///
/// Almost everything in this crate is total: malformed text falls through to
/// the least-specific rule instead of failing. The only fallible operations
/// live at the session boundary (buffer limits, pushing into a finished turn)
/// and in parsing category names received from the transport layer.
use thiserror::Error;

/// Main error type for the reply pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplyError {
    /// The accumulated turn text grew past the configured limit.
    #[error("accumulated turn text of {size} bytes exceeds maximum allowed size of {limit} bytes")]
    BufferLimit { size: usize, limit: usize },

    /// A fragment arrived after the turn was finalized.
    #[error("turn already finished; no further fragments accepted")]
    TurnFinished,

    /// A category name from the transport layer did not match any known
    /// category.
    #[error("unknown message category: {name:?}")]
    UnknownCategory { name: String },
}

/// Convenience type alias for Results in the reply pipeline.
pub type Result<T> = std::result::Result<T, ReplyError>;

impl ReplyError {
    /// Creates a new buffer-limit error.
    pub fn buffer_limit(size: usize, limit: usize) -> Self {
        ReplyError::BufferLimit { size, limit }
    }

    /// Creates a new unknown-category error.
    pub fn unknown_category(name: impl Into<String>) -> Self {
        ReplyError::UnknownCategory { name: name.into() }
    }
}
