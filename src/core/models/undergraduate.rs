//! Undergraduate student model

use super::kind::Kind;
use super::student::Student;

/// An undergraduate, billed at [`Kind::Undergraduate`]'s rate
#[derive(Debug, Clone, PartialEq)]
pub struct Undergraduate {
    student: Student,
    year: String,
}

impl Undergraduate {
    /// Create an undergraduate record
    ///
    /// # Arguments
    /// * `student` - Shared base fields
    /// * `year` - Class year (e.g., "Freshman"), shown in the report's year column
    #[must_use]
    pub fn new(student: Student, year: impl Into<String>) -> Self {
        Self {
            student,
            year: year.into(),
        }
    }

    /// Shared base fields
    #[must_use]
    pub const fn student(&self) -> &Student {
        &self.student
    }

    /// Class year
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Replace the class year
    pub fn set_year(&mut self, year: impl Into<String>) {
        self.year = year.into();
    }

    /// Tuition: credits times the undergraduate rate
    #[must_use]
    pub fn tuition(&self) -> f32 {
        self.student.tuition_at(Kind::Undergraduate.rate())
    }
}
