//! Logs repository
//!
//! Persistence targets for flushed log entries.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use flowlog_core::domain::log::LogEntry;

use crate::error::Result;

/// Repository trait for persisted log entries
pub trait LogRepository: Send {
    /// Persists a batch of entries, in order
    ///
    /// # Arguments
    /// * `entries` - The entries to persist
    fn save(&mut self, entries: &[LogEntry]) -> Result<()>;

    /// Reads every persisted entry, oldest first
    fn find_all(&self) -> Result<Vec<LogEntry>>;

    /// Reads the persisted entries belonging to one transaction
    fn find_by_transaction(&self, transaction_id: &str) -> Result<Vec<LogEntry>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|entry| entry.transaction_id.as_deref() == Some(transaction_id))
            .collect())
    }
}

/// Appends entries to a file, one JSON object per line
#[derive(Debug, Clone)]
pub struct JsonLinesLogRepository {
    path: PathBuf,
}

impl JsonLinesLogRepository {
    /// Creates a repository backed by `path`
    ///
    /// The file and its parent directories are created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogRepository for JsonLinesLogRepository {
    fn save(&mut self, entries: &[LogEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        for entry in entries {
            serde_json::to_writer(&mut writer, entry)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} log entries to {}", entries.len(), self.path.display());

        Ok(())
    }

    fn find_all(&self) -> Result<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }

        Ok(entries)
    }
}

/// Keeps persisted entries in memory
///
/// Clones share the same storage, so a handle kept by the caller observes
/// what the pipeline saved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogRepository {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl InMemoryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogRepository for InMemoryLogRepository {
    fn save(&mut self, entries: &[LogEntry]) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(entries);
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<LogEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::LogBuilder;
    use flowlog_core::domain::level::Level;

    fn temp_log_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("flowlog-test-{}", uuid::Uuid::new_v4()))
            .join("logs.jsonl")
    }

    fn entry(summary: &str, transaction_id: &str) -> LogEntry {
        LogBuilder::new()
            .summary(summary.to_string())
            .level(Level::Warning)
            .build(Some(transaction_id.to_string()))
    }

    #[test]
    fn test_json_lines_save_and_read_back() {
        let path = temp_log_path();
        let mut repository = JsonLinesLogRepository::new(&path);

        repository.save(&[entry("one", "tx-a"), entry("two", "tx-b")]).unwrap();
        repository.save(&[entry("three", "tx-a")]).unwrap();

        let all = repository.find_all().unwrap();
        let summaries: Vec<_> = all.iter().map(|e| e.summary.as_deref().unwrap()).collect();
        assert_eq!(summaries, vec!["one", "two", "three"]);
        assert_eq!(all[0].level, Level::Warning);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);

        let tx_a = repository.find_by_transaction("tx-a").unwrap();
        assert_eq!(tx_a.len(), 2);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_json_lines_missing_file_reads_empty() {
        let repository = JsonLinesLogRepository::new(temp_log_path());
        assert!(repository.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_json_lines_empty_save_creates_nothing() {
        let path = temp_log_path();
        let mut repository = JsonLinesLogRepository::new(&path);
        repository.save(&[]).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_in_memory_clones_share_storage() {
        let handle = InMemoryLogRepository::new();
        let mut repository = handle.clone();

        repository.save(&[entry("one", "tx-a")]).unwrap();

        assert_eq!(handle.find_all().unwrap().len(), 1);
        assert!(handle.find_by_transaction("tx-b").unwrap().is_empty());
    }
}
