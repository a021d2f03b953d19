//! Error types for the logging pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while enqueuing or persisting log entries
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The pending buffer reached its capacity
    #[error("Log buffer is full (capacity: {capacity})")]
    BufferFull {
        /// Maximum number of pending entries
        capacity: usize,
    },

    /// Transaction id was empty or whitespace
    #[error("Invalid transaction id: {0:?}")]
    InvalidTransaction(String),

    /// Reading or writing persisted entries failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    /// Check if this error came from the persistence layer
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Serialization(_))
    }
}
