//! Text helpers shared across crates

/// True when the value is absent, empty, or whitespace only
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

/// The value, when it carries any non-whitespace text
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
