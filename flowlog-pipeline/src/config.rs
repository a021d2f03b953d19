//! Pipeline configuration
//!
//! Defines where flushed entries are persisted and, optionally, how many
//! entries may be pending between flushes.

use std::path::PathBuf;

/// Default location of the JSON-lines log file
pub const DEFAULT_OUTPUT: &str = "flowlog.jsonl";

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON-lines file flushed entries are appended to
    pub output: PathBuf,

    /// Cap on pending entries; enqueue is rejected once it is reached.
    /// `None` leaves the buffer unbounded.
    pub max_buffered_entries: Option<usize>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            max_buffered_entries: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - FLOWLOG_OUTPUT (optional, default: flowlog.jsonl)
    /// - FLOWLOG_MAX_BUFFERED_ENTRIES (optional, default: unbounded)
    ///
    /// The result is not validated; callers apply their overrides first and
    /// then call [`Config::validate`].
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let output = lookup("FLOWLOG_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let max_buffered_entries = lookup("FLOWLOG_MAX_BUFFERED_ENTRIES")
            .map(|raw| {
                raw.parse::<usize>().map_err(|e| {
                    anyhow::anyhow!("FLOWLOG_MAX_BUFFERED_ENTRIES is not a number: {}", e)
                })
            })
            .transpose()?;

        Ok(Self {
            output,
            max_buffered_entries,
        })
    }

    /// Overrides the buffer capacity
    pub fn with_max_buffered_entries(mut self, max_buffered_entries: usize) -> Self {
        self.max_buffered_entries = Some(max_buffered_entries);
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.output.as_os_str().is_empty() {
            anyhow::bail!("output path cannot be empty");
        }

        if self.max_buffered_entries == Some(0) {
            anyhow::bail!("max_buffered_entries must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}
