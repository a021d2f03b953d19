//! Log domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::level::Level;

/// A fully assembled log entry
///
/// Entries are produced by the pipeline's builder and are immutable once
/// enqueued. `transaction_id` and `created_at` are stamped by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub category: Category,
    #[serde(rename = "type")]
    pub log_type: Option<String>,
    pub area: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub interview_id: Option<String>,
    pub workflow_name: Option<String>,
    pub operation: Option<String>,
    pub stacktrace: Option<String>,
    pub post_processing: PostProcessing,
    pub level: Level,

    /// Caller-supplied custom attributes
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,

    /// Whether a tracking issue should be opened for this entry
    #[serde(default)]
    pub create_issue: bool,

    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Context the pipeline should capture alongside an entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostProcessing {
    pub stack_trace: bool,
    pub user_info: bool,
    pub related_objects: bool,
    pub installed_packages: bool,
    pub pending_jobs: bool,
    pub total_active_sessions: bool,
}

impl PostProcessing {
    /// Every capture enabled
    pub fn all() -> Self {
        Self {
            stack_trace: true,
            user_info: true,
            related_objects: true,
            installed_packages: true,
            pending_jobs: true,
            total_active_sessions: true,
        }
    }
}
