//! tsk - personal task tracker library
//!
//! Core functionality behind the `tsk` CLI: an ordered task list persisted
//! to a single JSON file, with add/list/complete/delete/clear operations
//! that are durable before they return.
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `error`: Error types and result aliases
//! - `output`: Human and JSON output formatting
//! - `store`: The task store and its file persistence
//! - `task`: Task records and priorities

pub mod cli;
pub mod error;
pub mod output;
pub mod store;
pub mod task;

pub use error::{Error, Result};
