//! Invoke command handler
//!
//! Reads workflow log requests, checks required fields, and runs the batch
//! through the adapter.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use flowlog_core::dto::flow::{FlowLogRequest, FlowLogResponse};
use flowlog_pipeline::{
    BufferedPipeline, Config, InMemoryLogRepository, LogPipeline, LogRepository,
};
use serde::Deserialize;

use super::show::format_log_entry;

/// Accepted input shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum RequestInput {
    Batch(Vec<FlowLogRequest>),
    Single(Box<FlowLogRequest>),
}

/// Handle the invoke command
///
/// # Arguments
/// * `input` - Request file, or stdin when `None`
/// * `dry_run` - Persist to memory and print entries instead of writing the log file
/// * `strict` - Fail when a request misses a required field
/// * `config` - The pipeline configuration
pub fn handle_invoke(
    input: Option<&Path>,
    dry_run: bool,
    strict: bool,
    config: &Config,
) -> Result<()> {
    let raw = read_input(input)?;
    let requests = parse_requests(&raw)?;

    let responses = if dry_run {
        let mut pipeline =
            BufferedPipeline::new(InMemoryLogRepository::new(), config.max_buffered_entries);
        let responses = invoke_batch(&mut pipeline, &requests, strict)?;

        let entries = pipeline.repository().find_all()?;
        eprintln!(
            "{}",
            format!("Dry run: {} entry(ies) would be persisted", entries.len()).bold()
        );
        for entry in &entries {
            eprintln!("{}", format_log_entry(entry));
        }
        responses
    } else {
        let mut pipeline = BufferedPipeline::from_config(config);
        invoke_batch(&mut pipeline, &requests, strict)?
    };

    println!("{}", serde_json::to_string_pretty(&responses)?);

    Ok(())
}

/// Validates required fields, then logs the batch
fn invoke_batch<P: LogPipeline>(
    pipeline: &mut P,
    requests: &[FlowLogRequest],
    strict: bool,
) -> Result<Vec<FlowLogResponse>> {
    let problems = missing_fields(requests);

    if !problems.is_empty() {
        if strict {
            anyhow::bail!("Invalid requests: {}", problems.join("; "));
        }
        for problem in &problems {
            tracing::warn!("{}", problem);
        }
    }

    flowlog_adapter::log(pipeline, requests).map_err(|err| {
        let context = if err.is_persistence_error() {
            "Failed to persist log entries"
        } else {
            "Failed to log flow requests"
        };
        anyhow::Error::new(err).context(context)
    })
}

/// One message per request that misses required fields
fn missing_fields(requests: &[FlowLogRequest]) -> Vec<String> {
    requests
        .iter()
        .enumerate()
        .filter_map(|(i, request)| {
            let missing = request.validate();
            (!missing.is_empty())
                .then(|| format!("request {} is missing {}", i, missing.join(", ")))
        })
        .collect()
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn parse_requests(raw: &str) -> Result<Vec<FlowLogRequest>> {
    let input: RequestInput =
        serde_json::from_str(raw).context("Input is not a request object or array")?;

    Ok(match input {
        RequestInput::Batch(requests) => requests,
        RequestInput::Single(request) => vec![*request],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowlog_pipeline::JsonLinesLogRepository;

    const BATCH: &str = r#"[
        {"area": "Checkout", "summary": "started", "level": "INFO"},
        {"area": "Checkout", "summary": "failed", "level": "ERROR",
         "fullStacktrace": "full:", "stacktrace": "partial"}
    ]"#;

    #[test]
    fn test_parse_requests_accepts_array_and_object() {
        assert_eq!(parse_requests(BATCH).unwrap().len(), 2);

        let single = parse_requests(r#"{"area": "A", "summary": "S"}"#).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].area.as_deref(), Some("A"));

        assert!(parse_requests("nope").is_err());
    }

    #[test]
    fn test_missing_fields_messages() {
        let requests = parse_requests(r#"[{"area": "A", "summary": "S"}, {"area": "A"}]"#).unwrap();
        assert_eq!(
            missing_fields(&requests),
            vec!["request 1 is missing summary".to_string()]
        );
    }

    #[test]
    fn test_strict_rejects_before_logging() {
        let repository = InMemoryLogRepository::new();
        let mut pipeline = BufferedPipeline::new(repository.clone(), None);
        let requests = parse_requests(r#"[{"level": "INFO"}]"#).unwrap();

        assert!(invoke_batch(&mut pipeline, &requests, true).is_err());
        assert!(repository.find_all().unwrap().is_empty());

        let responses = invoke_batch(&mut pipeline, &requests, false).unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(repository.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_persistence_failure_is_reported() {
        let dir = std::env::temp_dir().join(format!("flowlog-cli-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let config = Config::new(blocker.join("logs.jsonl"));
        let mut pipeline = BufferedPipeline::from_config(&config);

        let err = invoke_batch(&mut pipeline, &parse_requests(BATCH).unwrap(), true).unwrap_err();
        assert_eq!(err.to_string(), "Failed to persist log entries");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invoke_batch_persists_to_json_lines() {
        let dir = std::env::temp_dir().join(format!("flowlog-cli-{}", uuid::Uuid::new_v4()));
        let config = Config::new(dir.join("logs.jsonl"));
        let mut pipeline = BufferedPipeline::from_config(&config);

        let responses = invoke_batch(&mut pipeline, &parse_requests(BATCH).unwrap(), true).unwrap();
        assert_eq!(responses[1].full_stacktrace.as_deref(), Some("full:partial"));

        let saved = JsonLinesLogRepository::new(&config.output).find_all().unwrap();
        assert_eq!(saved.len(), 2);
        assert!(saved[1].create_issue);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
