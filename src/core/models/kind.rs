//! Record kinds and their per-kind constants

use std::fmt;
use std::str::FromStr;

/// Tuition charged per credit for undergraduates
pub const UNDERGRAD_RATE: f32 = 380.0;

/// Tuition charged per credit for graduates and graduate assistants
pub const GRAD_RATE: f32 = 500.0;

/// The closed set of student kinds found in a roster file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `Undergrad` records
    Undergraduate,
    /// `Grad` records
    Graduate,
    /// `GradAsst` records
    GraduateAssistant,
}

impl Kind {
    /// All kinds, in declaration order
    pub const ALL: [Self; 3] = [Self::Undergraduate, Self::Graduate, Self::GraduateAssistant];

    /// Per-credit tuition rate shared by every record of this kind
    #[must_use]
    pub const fn rate(self) -> f32 {
        match self {
            Self::Undergraduate => UNDERGRAD_RATE,
            Self::Graduate | Self::GraduateAssistant => GRAD_RATE,
        }
    }

    /// The type tag that introduces a record of this kind in the input file
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Undergraduate => "Undergrad",
            Self::Graduate => "Grad",
            Self::GraduateAssistant => "GradAsst",
        }
    }
}

impl FromStr for Kind {
    type Err = String;

    /// Match a type tag exactly (tags are case-sensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| format!("Unknown record tag: {s}"))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        assert!((Kind::Undergraduate.rate() - 380.0).abs() < f32::EPSILON);
        assert!((Kind::Graduate.rate() - 500.0).abs() < f32::EPSILON);
        assert!((Kind::GraduateAssistant.rate() - Kind::Graduate.rate()).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tag_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(kind.tag().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_and_miscased_tags_rejected() {
        assert!("PostDoc".parse::<Kind>().is_err());
        assert!("grad".parse::<Kind>().is_err());
        assert!("".parse::<Kind>().is_err());
    }
}
