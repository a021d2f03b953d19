//! Core domain types
//!
//! This module contains the domain structures shared by the logging pipeline
//! (which buffers and persists entries) and the workflow adapter (which
//! assembles them from workflow requests).

pub mod category;
pub mod error;
pub mod level;
pub mod log;
