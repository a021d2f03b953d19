//! Flowlog Pipeline
//!
//! The logging pipeline that workflow log entries are handed to.
//!
//! Architecture:
//! - Builder: Fluent assembly of a single log entry
//! - Services: Transaction context, in-memory buffering, enqueue/flush
//! - Repositories: Persistence targets for flushed entries (JSON lines, memory)
//! - Configuration: Output location and buffer capacity
//!
//! Entries are buffered on enqueue and only persisted when the caller flushes,
//! so one unit of work produces one write.

pub mod builder;
pub mod config;
pub mod error;
pub mod repository;
pub mod service;

pub use builder::LogBuilder;
pub use config::Config;
pub use error::{PipelineError, Result};
pub use repository::{InMemoryLogRepository, JsonLinesLogRepository, LogRepository};
pub use service::{BufferedPipeline, InMemoryLogBuffer, LogBufferService, LogPipeline, TransactionContext};
