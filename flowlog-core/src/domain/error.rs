//! Domain parse errors

use thiserror::Error;

/// Raised when a label does not name a known enumerated value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// No value was given, or only whitespace
    #[error("blank {kind} value")]
    Blank { kind: &'static str },

    /// The value is not one of the known labels
    #[error("unknown {kind} value: {value}")]
    Unknown { kind: &'static str, value: String },
}

impl ParseEnumError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::Unknown {
            kind,
            value: value.to_string(),
        }
    }
}
