//! Log entry builder
//!
//! Fluent assembly of a [`LogEntry`]. Setters may be called in any order and
//! later calls overwrite earlier ones. The transaction id and creation time
//! are not set here; the pipeline stamps them on enqueue.

use chrono::Utc;
use flowlog_core::domain::category::Category;
use flowlog_core::domain::level::Level;
use flowlog_core::domain::log::{LogEntry, PostProcessing};

/// Builder for a single log entry
#[derive(Debug, Clone, Default)]
pub struct LogBuilder {
    category: Category,
    log_type: Option<String>,
    area: Option<String>,
    summary: Option<String>,
    details: Option<String>,
    interview_id: Option<String>,
    workflow_name: Option<String>,
    operation: Option<String>,
    stacktrace: Option<String>,
    post_processing: PostProcessing,
    level: Level,
    attributes: serde_json::Map<String, serde_json::Value>,
    create_issue: bool,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn log_type(mut self, log_type: impl Into<Option<String>>) -> Self {
        self.log_type = log_type.into();
        self
    }

    pub fn area(mut self, area: impl Into<Option<String>>) -> Self {
        self.area = area.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<Option<String>>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn details(mut self, details: impl Into<Option<String>>) -> Self {
        self.details = details.into();
        self
    }

    /// Identifier of the workflow run (interview) that produced the entry
    pub fn interview_id(mut self, interview_id: impl Into<Option<String>>) -> Self {
        self.interview_id = interview_id.into();
        self
    }

    pub fn workflow_name(mut self, workflow_name: impl Into<Option<String>>) -> Self {
        self.workflow_name = workflow_name.into();
        self
    }

    pub fn operation(mut self, operation: impl Into<Option<String>>) -> Self {
        self.operation = operation.into();
        self
    }

    pub fn stacktrace(mut self, stacktrace: impl Into<Option<String>>) -> Self {
        self.stacktrace = stacktrace.into();
        self
    }

    pub fn post_processing(mut self, post_processing: PostProcessing) -> Self {
        self.post_processing = post_processing;
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets a custom attribute, replacing any previous value for the key
    pub fn attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Flags the entry so that a tracking issue is opened for it
    pub fn create_issue(mut self) -> Self {
        self.create_issue = true;
        self
    }

    /// Finishes the entry, stamping it with the given transaction id
    pub fn build(self, transaction_id: Option<String>) -> LogEntry {
        LogEntry {
            category: self.category,
            log_type: self.log_type,
            area: self.area,
            summary: self.summary,
            details: self.details,
            interview_id: self.interview_id,
            workflow_name: self.workflow_name,
            operation: self.operation,
            stacktrace: self.stacktrace,
            post_processing: self.post_processing,
            level: self.level,
            attributes: self.attributes,
            create_issue: self.create_issue,
            transaction_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let entry = LogBuilder::new().build(None);
        assert_eq!(entry.category, Category::Flow);
        assert_eq!(entry.level, Level::Info);
        assert!(!entry.create_issue);
        assert!(entry.attributes.is_empty());
        assert_eq!(entry.post_processing, PostProcessing::default());
    }

    #[test]
    fn test_fluent_fields() {
        let entry = LogBuilder::new()
            .category(Category::Integration)
            .log_type("Autolaunched".to_string())
            .area("Billing".to_string())
            .summary("Invoice sync".to_string())
            .details(None)
            .interview_id("run-1".to_string())
            .workflow_name("Invoice_Sync".to_string())
            .operation("sync".to_string())
            .stacktrace("trace".to_string())
            .post_processing(PostProcessing::all())
            .attribute("x", json!(1))
            .create_issue()
            .level(Level::Error)
            .build(Some("tx-1".to_string()));

        assert_eq!(entry.category, Category::Integration);
        assert_eq!(entry.log_type.as_deref(), Some("Autolaunched"));
        assert_eq!(entry.area.as_deref(), Some("Billing"));
        assert_eq!(entry.details, None);
        assert_eq!(entry.interview_id.as_deref(), Some("run-1"));
        assert_eq!(entry.stacktrace.as_deref(), Some("trace"));
        assert_eq!(entry.attributes.get("x"), Some(&json!(1)));
        assert!(entry.create_issue);
        assert_eq!(entry.level, Level::Error);
        assert_eq!(entry.transaction_id.as_deref(), Some("tx-1"));
    }

    #[test]
    fn test_details_overwrite() {
        let entry = LogBuilder::new()
            .details("first".to_string())
            .details("second".to_string())
            .build(None);
        assert_eq!(entry.details.as_deref(), Some("second"));
    }
}
