//! Log buffer service
//!
//! Holds entries that were enqueued but not yet flushed. The buffer is
//! shareable so a handle can report pending entries while the pipeline owns
//! the writing side.

use flowlog_core::domain::log::LogEntry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Service for managing log buffers
pub trait LogBufferService: Send + Sync {
    /// Adds a log entry to the buffer
    ///
    /// # Arguments
    /// * `entry` - The log entry to add
    fn add_entry(&self, entry: LogEntry);

    /// Drains all log entries from the buffer
    ///
    /// This returns all buffered entries in insertion order and clears the buffer.
    fn drain(&self) -> Vec<LogEntry>;

    /// Number of entries currently buffered
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory implementation of LogBufferService
///
/// Uses Arc<Mutex<Vec<LogEntry>>> so clones observe the same buffer.
#[derive(Clone, Default)]
pub struct InMemoryLogBuffer {
    buffer: Arc<Mutex<Vec<LogEntry>>>,
}

impl InMemoryLogBuffer {
    /// Creates a new in-memory log buffer
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogBufferService for InMemoryLogBuffer {
    fn add_entry(&self, entry: LogEntry) {
        self.lock().push(entry);
    }

    fn drain(&self) -> Vec<LogEntry> {
        self.lock().drain(..).collect()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::LogBuilder;

    #[test]
    fn test_drain_preserves_order_and_clears() {
        let buffer = InMemoryLogBuffer::new();
        let handle = buffer.clone();

        for summary in ["a", "b", "c"] {
            buffer.add_entry(LogBuilder::new().summary(summary.to_string()).build(None));
        }
        assert_eq!(handle.len(), 3);

        let drained = handle.drain();
        let summaries: Vec<_> = drained.iter().map(|e| e.summary.clone().unwrap()).collect();
        assert_eq!(summaries, vec!["a", "b", "c"]);
        assert!(buffer.is_empty());
    }
}
