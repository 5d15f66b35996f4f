//! Report generation for loaded rosters
//!
//! A report is a sequence of titled sections, each listing records in some
//! order. The standard roster report has two: the rotated load order and the
//! same records sorted by GPA.

pub mod formats;

use crate::core::models::Record;
use crate::core::roster::Roster;
use std::error::Error;
use std::path::Path;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

/// Title of the section listing records in roster order
pub const ORIGINAL_TITLE: &str = "Original Student List:";

/// Title of the section listing records by ascending GPA
pub const SORTED_TITLE: &str = "Students Sorted by GPA:";

/// One titled listing of records
#[derive(Debug, Clone)]
pub struct ReportSection<'a> {
    /// Section title
    pub title: &'static str,
    /// Records in display order
    pub records: Vec<&'a Record>,
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Sections in output order
    pub sections: Vec<ReportSection<'a>>,
}

impl<'a> ReportContext<'a> {
    /// The standard two-section report over `roster` as it currently stands
    ///
    /// The roster is expected to have been rotated already; this only reads it.
    #[must_use]
    pub fn for_roster(roster: &'a Roster) -> Self {
        Self {
            sections: vec![
                ReportSection {
                    title: ORIGINAL_TITLE,
                    records: roster.iter().collect(),
                },
                ReportSection {
                    title: SORTED_TITLE,
                    records: roster.sorted_by_gpa(),
                },
            ],
        }
    }

    /// Number of distinct records listed in the first section
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.sections.first().map_or(0, |s| s.records.len())
    }

    /// Sum of tuition over the first section's records
    #[must_use]
    pub fn total_tuition(&self) -> f32 {
        self.sections
            .first()
            .map_or(0.0, |s| s.records.iter().map(|r| r.tuition()).sum())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// The generator for `format`
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Graduate, Student, Undergraduate};

    fn sample() -> Roster {
        vec![
            Undergraduate::new(Student::new("Alice", "A111", 12, 3.5), "Junior").into(),
            Graduate::new(Student::new("Bob", "B222", 9, 3.9), "Foam").into(),
            Undergraduate::new(Student::new("Cy", "C3", 10, 2.1), "Senior").into(),
        ]
        .into()
    }

    #[test]
    fn test_for_roster_sections() {
        let roster = sample();
        let ctx = ReportContext::for_roster(&roster);

        assert_eq!(ctx.sections.len(), 2);
        assert_eq!(ctx.sections[0].title, ORIGINAL_TITLE);
        assert_eq!(ctx.sections[1].title, SORTED_TITLE);
        let sorted: Vec<&str> = ctx.sections[1].records.iter().map(|r| r.name()).collect();
        assert_eq!(sorted, ["Cy", "Alice", "Bob"]);
    }

    #[test]
    fn test_totals() {
        let roster = sample();
        let ctx = ReportContext::for_roster(&roster);
        assert_eq!(ctx.record_count(), 3);
        assert!((ctx.total_tuition() - (4560.0 + 4500.0 + 3800.0)).abs() < 0.01);
    }

    #[test]
    fn test_empty_roster_context() {
        let roster = Roster::new();
        let ctx = ReportContext::for_roster(&roster);
        assert_eq!(ctx.record_count(), 0);
        assert!(ctx.total_tuition().abs() < f32::EPSILON);
    }
}
