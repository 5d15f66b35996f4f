//! Fields shared by every kind of student record

/// Maximum number of characters kept from a student's name
pub const MAX_NAME_LEN: usize = 20;

/// Maximum number of characters kept from a student's SSN
pub const MAX_SSN_LEN: usize = 9;

/// Base fields of a student record
///
/// `name` and `ssn` are truncated on construction to the fixed storage widths
/// used by the report columns. Credits and GPA are stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    ssn: String,
    credits: i32,
    gpa: f32,
}

impl Student {
    /// Create the base record, truncating `name` and `ssn`
    #[must_use]
    pub fn new(name: &str, ssn: &str, credits: i32, gpa: f32) -> Self {
        Self {
            name: truncate(name, MAX_NAME_LEN),
            ssn: truncate(ssn, MAX_SSN_LEN),
            credits,
            gpa,
        }
    }

    /// Student name (at most [`MAX_NAME_LEN`] characters)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Social security number (at most [`MAX_SSN_LEN`] characters)
    #[must_use]
    pub fn ssn(&self) -> &str {
        &self.ssn
    }

    /// Credit hours taken
    #[must_use]
    pub const fn credits(&self) -> i32 {
        self.credits
    }

    /// Grade point average
    #[must_use]
    pub const fn gpa(&self) -> f32 {
        self.gpa
    }

    /// Tuition owed at `rate` per credit
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tuition_at(&self, rate: f32) -> f32 {
        self.credits as f32 * rate
    }

    /// Detail lines common to every kind
    pub(crate) fn describe(&self) -> String {
        format!(
            "Student name: {}\nSSN: {}\nCredits: {}\nGPA: {}\n",
            self.name, self.ssn, self.credits, self.gpa
        )
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
