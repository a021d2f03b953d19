//! Flow log adapter
//!
//! Turns workflow log requests into pipeline entries.

use flowlog_core::domain::category::Category;
use flowlog_core::domain::level::Level;
use flowlog_core::domain::log::PostProcessing;
use flowlog_core::dto::flow::{FlowLogRequest, FlowLogResponse};
use flowlog_core::text::non_blank;
use flowlog_pipeline::{LogBuilder, LogPipeline, Result};

use crate::message::{
    ADDITIONAL_FIELDS_NOT_PARSED, CATEGORY_NOT_FOUND, LEVEL_NOT_FOUND, format_message,
};
use crate::parse::{parse_attributes, parse_category, parse_level};

/// Logs a batch of workflow requests
///
/// Returns one response per request, in order. The pipeline is flushed once
/// after every request has been enqueued, including for an empty batch.
/// Field problems are noted on the entries; only pipeline errors are returned,
/// and entries enqueued before such an error stay buffered.
pub fn log<P>(pipeline: &mut P, requests: &[FlowLogRequest]) -> Result<Vec<FlowLogResponse>>
where
    P: LogPipeline + ?Sized,
{
    let responses = requests
        .iter()
        .map(|request| process_flow_log(pipeline, request))
        .collect::<Result<Vec<_>>>()?;

    let flushed = pipeline.flush()?;

    tracing::info!(
        "Logged {} flow request(s), flushed {} entries",
        responses.len(),
        flushed
    );

    Ok(responses)
}

/// Builds and enqueues the entry for a single request
pub fn process_flow_log<P>(pipeline: &mut P, request: &FlowLogRequest) -> Result<FlowLogResponse>
where
    P: LogPipeline + ?Sized,
{
    let full_stacktrace = combine_stacktraces(request);
    let mut details = request.details.clone();

    let level = parse_level(request.level.as_deref()).unwrap_or_else(|err| {
        tracing::warn!("Falling back to INFO level: {}", err);
        append_note(
            &mut details,
            format_message(LEVEL_NOT_FOUND, &[request.level.as_deref().unwrap_or_default()]),
        );
        Level::Info
    });

    let category = parse_category(request.category.as_deref()).unwrap_or_else(|err| {
        if let Some(given) = non_blank(request.category.as_deref()) {
            tracing::warn!("Falling back to Flow category: {}", err);
            append_note(&mut details, format_message(CATEGORY_NOT_FOUND, &[given]));
        }
        Category::Flow
    });

    match non_blank(request.transaction_id.as_deref()) {
        Some(transaction_id) => pipeline.resume_transaction(transaction_id.trim())?,
        None if pipeline.current_transaction_id().is_none() => {
            pipeline.start_transaction();
        }
        None => {}
    }

    let mut builder = LogBuilder::new()
        .category(category)
        .log_type(request.log_type.clone())
        .area(request.area.clone())
        .summary(request.summary.clone())
        .details(details.clone())
        .interview_id(request.interview_id.clone())
        .workflow_name(request.workflow_name.clone())
        .operation(request.operation.clone())
        .stacktrace(full_stacktrace.clone())
        .post_processing(PostProcessing::all())
        .level(level);

    if level.is_highest() {
        builder = builder.create_issue();
    }

    if let Some(raw) = non_blank(request.additional_fields.as_deref()) {
        match parse_attributes(raw) {
            Ok(attributes) => {
                for (key, value) in attributes {
                    builder = builder.attribute(key, value);
                }
            }
            Err(err) => {
                tracing::warn!("Could not parse additional fields: {}", err);
                append_note(
                    &mut details,
                    format_message(ADDITIONAL_FIELDS_NOT_PARSED, &[raw]),
                );
                builder = builder.details(details);
            }
        }
    }

    pipeline.enqueue(builder)?;

    Ok(FlowLogResponse {
        stacktrace: full_stacktrace.clone(),
        full_stacktrace,
    })
}

/// Full trace followed by the partial one; the partial one alone otherwise
fn combine_stacktraces(request: &FlowLogRequest) -> Option<String> {
    match non_blank(request.full_stacktrace.as_deref()) {
        Some(full) => Some(format!(
            "{}{}",
            full,
            request.stacktrace.as_deref().unwrap_or_default()
        )),
        None => request.stacktrace.clone(),
    }
}

fn append_note(details: &mut Option<String>, note: String) {
    match details {
        Some(text) if !text.trim().is_empty() => {
            text.push('\n');
            text.push_str(&note);
        }
        _ => *details = Some(note),
    }
}
