//! Flowlog Adapter
//!
//! Entry point for workflow engines submitting log entries.
//!
//! Workflow requests arrive loosely typed. The adapter resolves the severity
//! level and category (falling back to defaults), attaches the workflow run
//! context, merges caller-supplied attributes, and hands each entry to a
//! [`flowlog_pipeline::LogPipeline`]. Bad input never fails a request: the
//! fallback is noted in the entry's details instead.

pub mod flow;
pub mod message;
pub mod parse;

pub use flow::{log, process_flow_log};
