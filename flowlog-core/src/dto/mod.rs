//! Data Transfer Objects exchanged with the workflow engine
//!
//! These records are loosely typed on purpose: every field arrives as
//! optional text and is normalized by the adapter.

pub mod flow;
