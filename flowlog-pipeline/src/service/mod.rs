//! Service layer
//!
//! Services hold the pipeline's state: the ambient transaction, the buffer
//! of pending entries, and the enqueue/flush orchestration on top of a
//! repository.
//!
//! All services are trait-based so callers can substitute test doubles.

mod log_buffer;
mod pipeline;
mod transaction;

// Re-export traits
pub use log_buffer::LogBufferService;
pub use pipeline::LogPipeline;
pub use transaction::TransactionContext;

// Re-export implementations
pub use log_buffer::InMemoryLogBuffer;
pub use pipeline::BufferedPipeline;
