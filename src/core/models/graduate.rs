//! Graduate and graduate assistant models

use super::kind::Kind;
use super::student::Student;

/// A graduate student with a free-text thesis, billed at the graduate rate
#[derive(Debug, Clone, PartialEq)]
pub struct Graduate {
    student: Student,
    thesis: String,
}

impl Graduate {
    /// Create a graduate record
    #[must_use]
    pub fn new(student: Student, thesis: impl Into<String>) -> Self {
        Self {
            student,
            thesis: thesis.into(),
        }
    }

    /// Shared base fields
    #[must_use]
    pub const fn student(&self) -> &Student {
        &self.student
    }

    /// Thesis title (may contain spaces)
    #[must_use]
    pub fn thesis(&self) -> &str {
        &self.thesis
    }

    /// Replace the thesis title
    pub fn set_thesis(&mut self, thesis: impl Into<String>) {
        self.thesis = thesis.into();
    }

    /// Tuition: credits times the graduate rate
    #[must_use]
    pub fn tuition(&self) -> f32 {
        self.student.tuition_at(Kind::Graduate.rate())
    }
}

/// A graduate student with an assistantship
///
/// Shares the thesis and tuition rate of [`Graduate`]. `hour_pay` is stored and
/// exposed but does not enter the tuition computation or the report row.
#[derive(Debug, Clone, PartialEq)]
pub struct GraduateAssistant {
    graduate: Graduate,
    task: String,
    superviser: String,
    hour_pay: f32,
}

impl GraduateAssistant {
    /// Create a graduate assistant record
    ///
    /// # Arguments
    /// * `graduate` - The graduate record (base fields and thesis)
    /// * `task` - Assistantship duty (e.g., "Grading")
    /// * `superviser` - Supervising faculty member
    /// * `hour_pay` - Hourly pay
    #[must_use]
    pub fn new(
        graduate: Graduate,
        task: impl Into<String>,
        superviser: impl Into<String>,
        hour_pay: f32,
    ) -> Self {
        Self {
            graduate,
            task: task.into(),
            superviser: superviser.into(),
            hour_pay,
        }
    }

    /// The underlying graduate record
    #[must_use]
    pub const fn graduate(&self) -> &Graduate {
        &self.graduate
    }

    /// Shared base fields
    #[must_use]
    pub const fn student(&self) -> &Student {
        self.graduate.student()
    }

    /// Thesis title
    #[must_use]
    pub fn thesis(&self) -> &str {
        self.graduate.thesis()
    }

    /// Replace the thesis title
    pub fn set_thesis(&mut self, thesis: impl Into<String>) {
        self.graduate.set_thesis(thesis);
    }

    /// Assistantship duty
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Replace the assistantship duty
    pub fn set_task(&mut self, task: impl Into<String>) {
        self.task = task.into();
    }

    /// Supervising faculty member
    #[must_use]
    pub fn superviser(&self) -> &str {
        &self.superviser
    }

    /// Replace the supervisor
    pub fn set_superviser(&mut self, superviser: impl Into<String>) {
        self.superviser = superviser.into();
    }

    /// Hourly pay
    #[must_use]
    pub const fn hour_pay(&self) -> f32 {
        self.hour_pay
    }

    /// Replace the hourly pay
    pub fn set_hour_pay(&mut self, hour_pay: f32) {
        self.hour_pay = hour_pay;
    }

    /// Tuition: same as [`Graduate::tuition`]
    #[must_use]
    pub fn tuition(&self) -> f32 {
        self.graduate.tuition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_assistant(hour_pay: f32) -> GraduateAssistant {
        GraduateAssistant::new(
            Graduate::new(Student::new("Carol", "C333", 6, 3.2), "Deep Learning"),
            "Grading",
            "Dr. Lee",
            hour_pay,
        )
    }

    #[test]
    fn test_graduate_tuition() {
        let grad = Graduate::new(Student::new("Bob", "B222", 9, 3.9), "Quantum foam");
        assert!((grad.tuition() - 4500.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_assistant_tuition_ignores_hour_pay() {
        let cheap = sample_assistant(0.0);
        let pricey = sample_assistant(99.5);

        assert!((cheap.tuition() - 3000.0).abs() < f32::EPSILON);
        assert!((pricey.tuition() - cheap.tuition()).abs() < f32::EPSILON);
        assert!((pricey.tuition() - pricey.graduate().tuition()).abs() < f32::EPSILON);
    }

    #[test]
    fn test_assistant_fields() {
        let ga = sample_assistant(15.0);
        assert_eq!(ga.thesis(), "Deep Learning");
        assert_eq!(ga.task(), "Grading");
        assert_eq!(ga.superviser(), "Dr. Lee");
        assert!((ga.hour_pay() - 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_assistant_setters() {
        let mut ga = sample_assistant(15.0);
        ga.set_thesis("Graph Theory");
        ga.set_task("Lab sections");
        ga.set_superviser("Dr. Moss");
        ga.set_hour_pay(18.25);

        assert_eq!(ga.thesis(), "Graph Theory");
        assert_eq!(ga.task(), "Lab sections");
        assert_eq!(ga.superviser(), "Dr. Moss");
        assert!((ga.hour_pay() - 18.25).abs() < f32::EPSILON);
    }
}
