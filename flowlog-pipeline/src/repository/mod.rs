//! Repository layer
//!
//! Repositories persist flushed log entries and read them back. They hold no
//! buffering or transaction logic; that lives in the service layer.
//!
//! All repositories are trait-based to enable testing and substitution.

mod logs;

// Re-export traits
pub use logs::LogRepository;

// Re-export implementations
pub use logs::{InMemoryLogRepository, JsonLinesLogRepository};
