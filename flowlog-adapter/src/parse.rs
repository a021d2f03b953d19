//! Fallible parsing of workflow-supplied labels
//!
//! The caller decides which default to use and whether to note the fallback.

use flowlog_core::domain::category::Category;
use flowlog_core::domain::error::ParseEnumError;
use flowlog_core::domain::level::Level;

/// Parses a severity label; absent or blank input is an error
pub fn parse_level(value: Option<&str>) -> Result<Level, ParseEnumError> {
    value
        .ok_or(ParseEnumError::Blank { kind: "level" })?
        .parse()
}

/// Parses a category label; absent or blank input is an error
pub fn parse_category(value: Option<&str>) -> Result<Category, ParseEnumError> {
    value
        .ok_or(ParseEnumError::Blank { kind: "category" })?
        .parse()
}

/// Parses a JSON object of custom attributes
pub fn parse_attributes(
    raw: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
    serde_json::from_str(raw)
}
