//! Core domain: record models, parsing, the roster, and reports

pub mod config;
pub mod layout;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod roster;

/// Returns the current version of the `roster` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
