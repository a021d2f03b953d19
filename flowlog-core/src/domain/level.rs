//! Severity levels

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseEnumError;

/// Severity of a log entry, ordered from most to least severe
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Error,
    Warning,
    #[default]
    Info,
    Debug,
    Fine,
    Finer,
    Finest,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
        Level::Fine,
        Level::Finer,
        Level::Finest,
    ];

    /// Canonical label, as written by workflow authors
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Fine => "FINE",
            Level::Finer => "FINER",
            Level::Finest => "FINEST",
        }
    }

    /// Entries at this level request a tracking issue
    pub fn is_highest(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseEnumError::Blank { kind: "level" });
        }

        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseEnumError::unknown("level", s))
    }
}
