//! Flowlog CLI
//!
//! Invocable surface for workflow engines: reads log requests as JSON,
//! runs them through the adapter, and prints the responses.
//!
//! Diagnostics go to stderr so stdout stays machine-readable.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use flowlog_pipeline::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flowlog")]
#[command(about = "Workflow log adapter CLI", long_about = None)]
struct Cli {
    /// JSON-lines file log entries are persisted to
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Maximum number of entries pending between flushes
    #[arg(long, global = true)]
    max_buffered_entries: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "flowlog_cli=info,flowlog_adapter=info,flowlog_pipeline=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    tracing::debug!(
        "Loaded configuration: output={}, max_buffered_entries={:?}",
        config.output.display(),
        config.max_buffered_entries
    );

    handle_command(cli.command, &config)
}

/// Environment configuration with command-line overrides applied
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::from_env().context("Failed to load configuration")?;
    apply_overrides(config, cli.output.clone(), cli.max_buffered_entries)
}

/// Applies command-line overrides, then validates the result
fn apply_overrides(
    mut config: Config,
    output: Option<PathBuf>,
    max_buffered_entries: Option<usize>,
) -> Result<Config> {
    if let Some(output) = output {
        config.output = output;
    }
    if let Some(max) = max_buffered_entries {
        config = config.with_max_buffered_entries(max);
    }

    config.validate().context("Invalid configuration")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_blank_env_output() {
        let from_env = Config {
            output: PathBuf::new(),
            max_buffered_entries: None,
        };
        assert!(apply_overrides(from_env.clone(), None, None).is_err());

        let config = apply_overrides(from_env, Some(PathBuf::from("run.jsonl")), Some(10)).unwrap();
        assert_eq!(config.output, PathBuf::from("run.jsonl"));
        assert_eq!(config.max_buffered_entries, Some(10));
    }

    #[test]
    fn test_zero_buffer_override_rejected() {
        assert!(apply_overrides(Config::default(), None, Some(0)).is_err());
    }
}
