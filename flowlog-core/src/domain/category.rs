//! Log categories

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseEnumError;

/// Broad origin of a log entry
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Flow,
    Service,
    Integration,
    Event,
    Frontend,
    Debug,
    Warning,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Flow,
        Category::Service,
        Category::Integration,
        Category::Event,
        Category::Frontend,
        Category::Debug,
        Category::Warning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Flow => "Flow",
            Category::Service => "Service",
            Category::Integration => "Integration",
            Category::Event => "Event",
            Category::Frontend => "Frontend",
            Category::Debug => "Debug",
            Category::Warning => "Warning",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseEnumError::Blank { kind: "category" });
        }

        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseEnumError::unknown("category", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("Integration".parse::<Category>(), Ok(Category::Integration));
        assert_eq!("flow".parse::<Category>(), Ok(Category::Flow));
    }

    #[test]
    fn test_parse_bogus_category() {
        assert!(matches!(
            "Bogus".parse::<Category>(),
            Err(ParseEnumError::Unknown { value, .. }) if value == "Bogus"
        ));
    }

    #[test]
    fn test_default_category_is_flow() {
        assert_eq!(Category::default(), Category::Flow);
    }
}
