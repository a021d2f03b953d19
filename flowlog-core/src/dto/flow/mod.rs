//! Flow log DTOs

use serde::{Deserialize, Serialize};

use crate::text::is_blank;

/// A log request submitted by a workflow run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowLogRequest {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub log_type: Option<String>,
    pub area: Option<String>,
    pub operation: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub interview_id: Option<String>,
    pub workflow_name: Option<String>,
    pub level: Option<String>,
    pub transaction_id: Option<String>,

    /// JSON-encoded object of extra attributes
    pub additional_fields: Option<String>,

    pub stacktrace: Option<String>,
    pub full_stacktrace: Option<String>,
}

/// Result handed back to the workflow run for each request
///
/// Both fields carry the combined trace: the full stacktrace followed by the
/// partial one, or the partial one alone when no full trace was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowLogResponse {
    pub stacktrace: Option<String>,
    pub full_stacktrace: Option<String>,
}

/// Describes one field of the request record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Wire name (camelCase)
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
}

#[rustfmt::skip]
const REQUEST_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor { name: "category", label: "Category", required: false },
    FieldDescriptor { name: "type", label: "Type", required: false },
    FieldDescriptor { name: "area", label: "Area", required: true },
    FieldDescriptor { name: "operation", label: "Operation", required: false },
    FieldDescriptor { name: "summary", label: "Summary", required: true },
    FieldDescriptor { name: "details", label: "Details", required: false },
    FieldDescriptor { name: "interviewId", label: "Interview GUID", required: false },
    FieldDescriptor { name: "workflowName", label: "Flow API Name", required: false },
    FieldDescriptor { name: "level", label: "Level", required: false },
    FieldDescriptor { name: "transactionId", label: "Transaction ID", required: false },
    FieldDescriptor { name: "additionalFields", label: "Additional Fields (JSON)", required: false },
    FieldDescriptor { name: "stacktrace", label: "Stacktrace", required: false },
    FieldDescriptor { name: "fullStacktrace", label: "Full Stacktrace", required: false },
];

impl FlowLogRequest {
    /// Field descriptors for the request record
    pub fn schema() -> &'static [FieldDescriptor] {
        REQUEST_SCHEMA
    }

    /// Wire names of required fields that are absent or blank
    ///
    /// The adapter never calls this; it is for the caller-facing layer.
    pub fn validate(&self) -> Vec<&'static str> {
        Self::schema()
            .iter()
            .filter(|field| field.required && is_blank(self.field(field.name)))
            .map(|field| field.name)
            .collect()
    }

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "category" => &self.category,
            "type" => &self.log_type,
            "area" => &self.area,
            "operation" => &self.operation,
            "summary" => &self.summary,
            "details" => &self.details,
            "interviewId" => &self.interview_id,
            "workflowName" => &self.workflow_name,
            "level" => &self.level,
            "transactionId" => &self.transaction_id,
            "additionalFields" => &self.additional_fields,
            "stacktrace" => &self.stacktrace,
            "fullStacktrace" => &self.full_stacktrace,
            _ => return None,
        };
        value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_request() {
        let json = r#"{
            "area": "Checkout",
            "summary": "Payment step failed",
            "type": "Autolaunched",
            "interviewId": "0Fo-123",
            "workflowName": "Checkout_Flow",
            "additionalFields": "{\"x\":1}",
            "fullStacktrace": "at step 3"
        }"#;

        let request: FlowLogRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.area.as_deref(), Some("Checkout"));
        assert_eq!(request.log_type.as_deref(), Some("Autolaunched"));
        assert_eq!(request.interview_id.as_deref(), Some("0Fo-123"));
        assert_eq!(request.workflow_name.as_deref(), Some("Checkout_Flow"));
        assert_eq!(request.additional_fields.as_deref(), Some("{\"x\":1}"));
        assert_eq!(request.full_stacktrace.as_deref(), Some("at step 3"));
        assert_eq!(request.level, None);
    }

    #[test]
    fn test_validate_reports_missing_required_fields() {
        let request = FlowLogRequest {
            area: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(request.validate(), vec!["area", "summary"]);

        let request = FlowLogRequest {
            area: Some("Checkout".to_string()),
            summary: Some("done".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_empty());
    }

    #[test]
    fn test_schema_covers_every_field() {
        let request = FlowLogRequest::default();
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), FlowLogRequest::schema().len());
        for field in FlowLogRequest::schema() {
            assert!(object.contains_key(field.name), "missing {}", field.name);
        }
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = FlowLogResponse {
            stacktrace: Some("b".to_string()),
            full_stacktrace: Some("ab".to_string()),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["fullStacktrace"], "ab");
    }
}
