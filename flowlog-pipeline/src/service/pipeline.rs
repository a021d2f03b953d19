//! Buffered logging pipeline
//!
//! Entries are stamped with the active transaction and buffered on enqueue.
//! Nothing reaches the repository until `flush` is called.

use flowlog_core::text::is_blank;

use super::log_buffer::{InMemoryLogBuffer, LogBufferService};
use super::transaction::TransactionContext;
use crate::builder::LogBuilder;
use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::repository::{JsonLinesLogRepository, LogRepository};

/// A logging pipeline: transaction scope plus enqueue and flush
pub trait LogPipeline: TransactionContext {
    /// Buffers the entry assembled by `builder`; does not persist it
    fn enqueue(&mut self, builder: LogBuilder) -> Result<()>;

    /// Persists every buffered entry and returns how many were written
    fn flush(&mut self) -> Result<usize>;
}

/// Pipeline that buffers in memory and flushes to a repository
pub struct BufferedPipeline<R: LogRepository> {
    buffer: InMemoryLogBuffer,
    repository: R,
    transaction_id: Option<String>,
    max_buffered_entries: Option<usize>,
}

impl<R: LogRepository> BufferedPipeline<R> {
    /// Creates a pipeline flushing into `repository`
    ///
    /// # Arguments
    /// * `repository` - Where flushed entries are persisted
    /// * `max_buffered_entries` - Enqueue fails once this many entries are pending;
    ///   `None` for an unbounded buffer
    pub fn new(repository: R, max_buffered_entries: Option<usize>) -> Self {
        Self {
            buffer: InMemoryLogBuffer::new(),
            repository,
            transaction_id: None,
            max_buffered_entries,
        }
    }

    /// Handle to the pending-entry buffer
    pub fn buffer(&self) -> &InMemoryLogBuffer {
        &self.buffer
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl BufferedPipeline<JsonLinesLogRepository> {
    /// Creates a pipeline writing JSON lines to the configured output
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            JsonLinesLogRepository::new(config.output.clone()),
            config.max_buffered_entries,
        )
    }
}

impl<R: LogRepository> TransactionContext for BufferedPipeline<R> {
    fn current_transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    fn resume_transaction(&mut self, transaction_id: &str) -> Result<()> {
        if is_blank(Some(transaction_id)) {
            return Err(PipelineError::InvalidTransaction(transaction_id.to_string()));
        }

        tracing::debug!("Resuming transaction: {}", transaction_id);
        self.transaction_id = Some(transaction_id.to_string());

        Ok(())
    }

    fn start_transaction(&mut self) -> String {
        let transaction_id = uuid::Uuid::new_v4().to_string();

        tracing::debug!("Started transaction: {}", transaction_id);
        self.transaction_id = Some(transaction_id.clone());

        transaction_id
    }
}

impl<R: LogRepository> LogPipeline for BufferedPipeline<R> {
    fn enqueue(&mut self, builder: LogBuilder) -> Result<()> {
        let pending = self.buffer.len();
        if let Some(capacity) = self.max_buffered_entries.filter(|&cap| pending >= cap) {
            return Err(PipelineError::BufferFull { capacity });
        }

        let entry = builder.build(self.transaction_id.clone());
        tracing::debug!(
            severity = %entry.level,
            category = %entry.category,
            transaction_id = ?entry.transaction_id,
            "Enqueued log entry"
        );
        self.buffer.add_entry(entry);

        Ok(())
    }

    fn flush(&mut self) -> Result<usize> {
        let entries = self.buffer.drain();
        if entries.is_empty() {
            return Ok(0);
        }

        // Entries drained before a failed save are lost; there is no requeue.
        self.repository.save(&entries)?;

        tracing::debug!("Flushed {} log entries", entries.len());

        Ok(entries.len())
    }
}
