//! Polymorphic student record

use super::graduate::{Graduate, GraduateAssistant};
use super::kind::Kind;
use super::student::Student;
use super::undergraduate::Undergraduate;
use crate::core::layout::{
    currency, CREDITS_WIDTH, GPA_WIDTH, LABEL_WIDTH, NAME_WIDTH, SSN_WIDTH, TUITION_WIDTH,
};
use std::cmp::Ordering;
use std::fmt;

/// One loaded student record of any kind
///
/// `Display` renders the fixed-width report row (without a trailing newline).
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// An `Undergrad` record
    Undergraduate(Undergraduate),
    /// A `Grad` record
    Graduate(Graduate),
    /// A `GradAsst` record
    GraduateAssistant(GraduateAssistant),
}

impl Record {
    /// The record's kind
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Undergraduate(_) => Kind::Undergraduate,
            Self::Graduate(_) => Kind::Graduate,
            Self::GraduateAssistant(_) => Kind::GraduateAssistant,
        }
    }

    /// Shared base fields
    #[must_use]
    pub const fn student(&self) -> &Student {
        match self {
            Self::Undergraduate(ug) => ug.student(),
            Self::Graduate(grad) => grad.student(),
            Self::GraduateAssistant(ga) => ga.student(),
        }
    }

    /// Student name
    #[must_use]
    pub fn name(&self) -> &str {
        self.student().name()
    }

    /// Grade point average
    #[must_use]
    pub const fn gpa(&self) -> f32 {
        self.student().gpa()
    }

    /// Tuition owed, per the kind's formula
    #[must_use]
    pub fn tuition(&self) -> f32 {
        match self {
            Self::Undergraduate(ug) => ug.tuition(),
            Self::Graduate(grad) => grad.tuition(),
            Self::GraduateAssistant(ga) => ga.tuition(),
        }
    }

    /// Text shown in the year column: the class year for undergraduates,
    /// `Grad` for graduates and `GA` for graduate assistants
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Undergraduate(ug) => ug.year(),
            Self::Graduate(_) => "Grad",
            Self::GraduateAssistant(_) => "GA",
        }
    }

    /// Order by GPA ascending. NaN sorts after every number.
    #[must_use]
    pub fn cmp_gpa(&self, other: &Self) -> Ordering {
        self.gpa().total_cmp(&other.gpa())
    }

    /// Multi-line listing of every stored field, including ones the report row omits
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = self.student().describe();
        match self {
            Self::Undergraduate(ug) => {
                out.push_str(&format!("Year: {}\n", ug.year()));
            }
            Self::Graduate(grad) => {
                out.push_str(&format!("Thesis: {}\n", grad.thesis()));
            }
            Self::GraduateAssistant(ga) => {
                out.push_str(&format!(
                    "Thesis: {}\nTask: {}\nSuperviser: {}\nHour pay: {}\n",
                    ga.thesis(),
                    ga.task(),
                    ga.superviser(),
                    ga.hour_pay()
                ));
            }
        }
        out
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let student = self.student();
        write!(
            f,
            "{:<NAME_WIDTH$}{:<SSN_WIDTH$}{:<LABEL_WIDTH$}{:<CREDITS_WIDTH$}{:>TUITION_WIDTH$}{:>GPA_WIDTH$.2}",
            student.name(),
            student.ssn(),
            self.label(),
            student.credits(),
            currency(self.tuition()),
            student.gpa()
        )
    }
}

impl From<Undergraduate> for Record {
    fn from(value: Undergraduate) -> Self {
        Self::Undergraduate(value)
    }
}

impl From<Graduate> for Record {
    fn from(value: Graduate) -> Self {
        Self::Graduate(value)
    }
}

impl From<GraduateAssistant> for Record {
    fn from(value: GraduateAssistant) -> Self {
        Self::GraduateAssistant(value)
    }
}
