//! Show command handler
//!
//! Displays entries persisted by earlier invocations.

use anyhow::{Context, Result};
use colored::*;
use flowlog_core::domain::level::Level;
use flowlog_core::domain::log::LogEntry;
use flowlog_pipeline::{Config, JsonLinesLogRepository, LogRepository};

/// Handle the show command
///
/// # Arguments
/// * `transaction` - Restrict output to one transaction
/// * `config` - The pipeline configuration
pub fn handle_show(transaction: Option<&str>, config: &Config) -> Result<()> {
    let repository = JsonLinesLogRepository::new(config.output.clone());

    let entries = match transaction {
        Some(id) => repository.find_by_transaction(id),
        None => repository.find_all(),
    }
    .with_context(|| format!("Failed to read {}", config.output.display()))?;

    if entries.is_empty() {
        println!("{}", "No log entries found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} log entry(ies) in {}:", entries.len(), config.output.display()).bold()
    );
    println!("{}", "─".repeat(80).dimmed());
    for entry in &entries {
        println!("{}", format_log_entry(entry));
    }
    println!("{}", "─".repeat(80).dimmed());

    Ok(())
}

/// Render a log entry as one or more display lines
pub fn format_log_entry(entry: &LogEntry) -> String {
    let level_colored = colorize_level(entry.level);

    let mut out = format!(
        "{} [{}] {} {}: {}",
        entry
            .created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed(),
        level_colored,
        entry.category.to_string().cyan(),
        entry.area.as_deref().unwrap_or("-"),
        entry.summary.as_deref().unwrap_or_default()
    );

    if let Some(workflow) = &entry.workflow_name {
        let interview = entry.interview_id.as_deref().unwrap_or("-");
        out.push_str(&format!("\n    Flow:        {} ({})", workflow, interview.dimmed()));
    }
    if let Some(transaction) = &entry.transaction_id {
        out.push_str(&format!("\n    Transaction: {}", transaction.dimmed()));
    }
    if let Some(details) = &entry.details {
        for line in details.lines() {
            out.push_str(&format!("\n    {}", line));
        }
    }
    for (key, value) in &entry.attributes {
        out.push_str(&format!("\n    {} = {}", key.cyan(), value));
    }
    if entry.create_issue {
        out.push_str(&format!("\n    {}", "issue requested".red()));
    }

    out
}

/// Colorize a level for display
fn colorize_level(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warning => label.yellow(),
        Level::Info => label.cyan(),
        Level::Debug | Level::Fine | Level::Finer | Level::Finest => label.dimmed(),
    }
}
