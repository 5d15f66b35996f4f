//! Markdown report generator
//!
//! Renders each report section as a Markdown table. Suitable for pasting into
//! issue trackers or rendering on GitHub.

use crate::core::layout;
use crate::core::models::Record;
use crate::core::report::{ReportContext, ReportGenerator, ReportSection};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{record_count}}", &ctx.record_count().to_string());
        output = output.replace("{{total_tuition}}", &layout::currency(ctx.total_tuition()));

        let sections: Vec<String> = ctx.sections.iter().map(Self::section_table).collect();
        output = output.replace("{{sections}}", sections.join("\n").trim_end());

        output
    }

    /// A `##` heading followed by the section's table
    fn section_table(section: &ReportSection) -> String {
        let mut table = String::new();
        let title = section.title.trim_end_matches(':');

        let _ = writeln!(table, "## {title}\n");
        table.push_str("| Name | SSN | Year | Credits | Tuition | GPA |\n");
        table.push_str("|---|---|---|---:|---:|---:|\n");

        for record in &section.records {
            let _ = writeln!(table, "{}", Self::row(record));
        }

        table
    }

    fn row(record: &Record) -> String {
        let student = record.student();
        format!(
            "| {} | {} | {} | {} | {} | {:.2} |",
            escape_cell(student.name()),
            escape_cell(student.ssn()),
            escape_cell(record.label()),
            student.credits(),
            layout::currency(record.tuition()),
            student.gpa()
        )
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

/// Escape characters that would break a table cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Student, Undergraduate};
    use crate::core::roster::Roster;

    #[test]
    fn test_render_markdown() {
        let roster: Roster = vec![
            Undergraduate::new(Student::new("Jane Doe", "123456789", 15, 3.75), "Senior").into(),
        ]
        .into();

        let report = MarkdownReporter::new()
            .render(&ReportContext::for_roster(&roster))
            .unwrap();

        assert!(report.starts_with("# Student Roster\n"));
        assert!(report.contains("**Students:** 1 | **Total tuition:** $5700.00"));
        assert!(report.contains("## Original Student List\n"));
        assert!(report.contains("## Students Sorted by GPA\n"));
        assert_eq!(
            report
                .matches("| Jane Doe | 123456789 | Senior | 15 | $5700.00 | 3.75 |")
                .count(),
            2
        );
        assert!(!report.contains("{{"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("plain"), "plain");
    }
}
