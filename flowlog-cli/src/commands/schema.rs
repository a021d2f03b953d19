//! Schema command handler

use anyhow::Result;
use flowlog_core::dto::flow::FlowLogRequest;

/// Print the request field descriptors as JSON
pub fn handle_schema() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(FlowLogRequest::schema())?
    );
    Ok(())
}
