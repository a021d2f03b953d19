//! Flowlog Core
//!
//! Core types and abstractions for the Flowlog workflow logging adapter.
//!
//! This crate contains:
//! - Domain types: Log entries, severity levels, categories
//! - DTOs: Request/response records exchanged with the workflow engine

pub mod domain;
pub mod dto;
pub mod text;
