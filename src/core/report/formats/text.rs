//! Plain-text report generator
//!
//! Renders each section as a blank line, the title, the column header, a
//! 70-character rule, and one fixed-width row per record.

use crate::core::layout;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Fixed-width text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        let header = layout::header();
        let rule = layout::rule();

        for section in &ctx.sections {
            writeln!(out, "\n{}", section.title)?;
            writeln!(out, "{header}")?;
            writeln!(out, "{rule}")?;
            for record in &section.records {
                writeln!(out, "{record}")?;
            }
        }

        Ok(out)
    }
}
