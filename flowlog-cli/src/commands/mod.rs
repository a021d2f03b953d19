//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod invoke;
mod schema;
mod show;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use flowlog_pipeline::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Log a batch of workflow requests
    Invoke {
        /// JSON file with a request object or an array of requests (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Keep entries in memory and print them instead of persisting
        #[arg(long)]
        dry_run: bool,

        /// Reject the batch when a request misses a required field
        #[arg(long)]
        strict: bool,
    },
    /// Print the request field descriptors
    Schema,
    /// Display persisted log entries
    Show {
        /// Only entries from this transaction
        #[arg(short, long)]
        transaction: Option<String>,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The pipeline configuration
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Invoke {
            input,
            dry_run,
            strict,
        } => invoke::handle_invoke(input.as_deref(), dry_run, strict, config),
        Commands::Schema => schema::handle_schema(),
        Commands::Show { transaction } => show::handle_show(transaction.as_deref(), config),
    }
}
