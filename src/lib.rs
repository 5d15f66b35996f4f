//! Shared library for `roster`
//! Loads mixed student records, computes tuition, and renders roster reports.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
