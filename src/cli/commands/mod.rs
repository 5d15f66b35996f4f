//! CLI command handlers for `roster`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod report;
