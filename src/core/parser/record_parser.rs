//! Per-kind record parsing
//!
//! Each record starts with a type tag. The fields that follow are read from the
//! cursor according to the tag:
//!
//! - `Undergrad name ssn year credits gpa`
//! - `Grad name ssn degree credits gpa thesis...` (thesis is the rest of the line)
//! - `GradAsst name ssn degree credits gpa "thesis" "task" "superviser" hourPay`
//!
//! Quoted fields are not validated: a missing quote makes the extraction run on
//! into whatever text follows, which may include later records.

use super::cursor::Cursor;
use crate::core::models::{Graduate, GraduateAssistant, Kind, Record, Student, Undergraduate};
use std::str::FromStr;
use thiserror::Error;

/// Failure to read one record's fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended before all fields of the record were read
    #[error("{kind} record for '{name}' ended before its {field} field")]
    UnexpectedEnd {
        /// Kind announced by the record's tag
        kind: Kind,
        /// Name field, empty if the record ended before it
        name: String,
        /// Missing field
        field: &'static str,
    },
    /// A numeric field could not be parsed
    #[error("{kind} record for '{name}' has invalid {field} '{token}'")]
    InvalidNumber {
        /// Kind announced by the record's tag
        kind: Kind,
        /// Name field of the record
        name: String,
        /// Offending field
        field: &'static str,
        /// Token found in its place
        token: String,
    },
}

/// Result of reading one tagged entry
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// A record of a known kind
    Record(Record),
    /// An entry with an unrecognized tag; the rest of its line was discarded
    Skipped {
        /// The unrecognized tag
        tag: String,
    },
}

/// Fields common to all three record layouts
struct Leading<'a> {
    name: &'a str,
    ssn: &'a str,
    /// `year` for undergraduates, `degree` for graduates
    third: &'a str,
    credits: i32,
    gpa: f32,
}

impl Leading<'_> {
    fn student(&self) -> Student {
        Student::new(self.name, self.ssn, self.credits, self.gpa)
    }
}

struct FieldReader<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    kind: Kind,
    name: &'a str,
}

impl<'c, 'a> FieldReader<'c, 'a> {
    fn token(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.cursor
            .next_token()
            .ok_or_else(|| ParseError::UnexpectedEnd {
                kind: self.kind,
                name: self.name.to_string(),
                field,
            })
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let token = self.token(field)?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            kind: self.kind,
            name: self.name.to_string(),
            field,
            token: token.to_string(),
        })
    }

    fn leading(&mut self, third_field: &'static str) -> Result<Leading<'a>, ParseError> {
        let name = self.token("name")?;
        self.name = name;
        let ssn = self.token("ssn")?;
        let third = self.token(third_field)?;
        let credits = self.number("credits")?;
        let gpa = self.number("gpa")?;
        Ok(Leading {
            name,
            ssn,
            third,
            credits,
            gpa,
        })
    }

    /// Text between the next pair of double quotes; text before the opening quote is dropped
    fn quoted(&mut self) -> &'a str {
        let _ = self.cursor.read_until('"');
        self.cursor.read_until('"')
    }
}

/// Read the next tagged entry from `cursor`
///
/// Returns `None` once only whitespace remains.
pub fn next_entry(cursor: &mut Cursor<'_>) -> Option<Result<Parsed, ParseError>> {
    let tag = cursor.next_token()?;
    let Ok(kind) = tag.parse::<Kind>() else {
        cursor.skip_line();
        return Some(Ok(Parsed::Skipped {
            tag: tag.to_string(),
        }));
    };
    Some(parse_record(cursor, kind).map(Parsed::Record))
}

/// Read the fields of a record whose tag has already been consumed
///
/// # Errors
/// Returns a [`ParseError`] if input ends early or a numeric field is not a number
pub fn parse_record(cursor: &mut Cursor<'_>, kind: Kind) -> Result<Record, ParseError> {
    let mut reader = FieldReader {
        cursor,
        kind,
        name: "",
    };
    match kind {
        Kind::Undergraduate => parse_undergraduate(&mut reader).map(Record::from),
        Kind::Graduate => parse_graduate(&mut reader).map(Record::from),
        Kind::GraduateAssistant => parse_graduate_assistant(&mut reader).map(Record::from),
    }
}

fn parse_undergraduate(reader: &mut FieldReader<'_, '_>) -> Result<Undergraduate, ParseError> {
    let leading = reader.leading("year")?;
    Ok(Undergraduate::new(leading.student(), leading.third))
}

fn parse_graduate(reader: &mut FieldReader<'_, '_>) -> Result<Graduate, ParseError> {
    let leading = reader.leading("degree")?;
    let rest = reader.cursor.rest_of_line();
    let thesis = rest.strip_prefix(' ').unwrap_or(rest);
    Ok(Graduate::new(leading.student(), thesis))
}

fn parse_graduate_assistant(
    reader: &mut FieldReader<'_, '_>,
) -> Result<GraduateAssistant, ParseError> {
    let leading = reader.leading("degree")?;
    let thesis = reader.quoted();
    let task = reader.quoted();
    reader.cursor.skip_whitespace();
    let superviser = reader.quoted();
    let hour_pay = reader.number("hourPay")?;
    Ok(GraduateAssistant::new(
        Graduate::new(leading.student(), thesis),
        task,
        superviser,
        hour_pay,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(input: &str) -> Result<Parsed, ParseError> {
        next_entry(&mut Cursor::new(input)).expect("input should hold an entry")
    }

    fn record(input: &str) -> Record {
        match parse_one(input) {
            Ok(Parsed::Record(record)) => record,
            other => panic!("expected a record, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_undergrad() {
        let Record::Undergraduate(ug) = record("Undergrad Alice A111 Junior 12 3.50") else {
            panic!("expected an undergraduate");
        };
        assert_eq!(ug.student().name(), "Alice");
        assert_eq!(ug.student().ssn(), "A111");
        assert_eq!(ug.year(), "Junior");
        assert_eq!(ug.student().credits(), 12);
        assert!((ug.student().gpa() - 3.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_grad_thesis_is_rest_of_line() {
        let Record::Graduate(grad) = record("Grad Bob B222 PhD 9 3.90 Researching quantum foam\n")
        else {
            panic!("expected a graduate");
        };
        assert_eq!(grad.thesis(), "Researching quantum foam");
        assert_eq!(grad.student().credits(), 9);
    }

    #[test]
    fn test_parse_grad_strips_only_one_space() {
        let Record::Graduate(grad) = record("Grad Bob B222 PhD 9 3.90   Indented") else {
            panic!("expected a graduate");
        };
        assert_eq!(grad.thesis(), "  Indented");
    }

    #[test]
    fn test_parse_grad_without_thesis() {
        let Record::Graduate(grad) = record("Grad Bob B222 MS 9 3.90\nUndergrad") else {
            panic!("expected a graduate");
        };
        assert_eq!(grad.thesis(), "");
    }

    #[test]
    fn test_parse_grad_asst_quoted_fields() {
        let input = r#"GradAsst Carol C333 PhD 6 3.20 "Deep Learning" "Grading" "Dr. Lee" 15.0"#;
        let Record::GraduateAssistant(ga) = record(input) else {
            panic!("expected a graduate assistant");
        };
        assert_eq!(ga.thesis(), "Deep Learning");
        assert_eq!(ga.task(), "Grading");
        assert_eq!(ga.superviser(), "Dr. Lee");
        assert!((ga.hour_pay() - 15.0).abs() < f32::EPSILON);
        assert!((ga.tuition() - 3000.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_grad_asst_drops_text_before_quotes() {
        let input = r#"GradAsst Dan D4 MS 3 2.5 junk"Thesis"  more"Task"   "Sup" 12.5"#;
        let Record::GraduateAssistant(ga) = record(input) else {
            panic!("expected a graduate assistant");
        };
        assert_eq!(ga.thesis(), "Thesis");
        assert_eq!(ga.task(), "Task");
        assert_eq!(ga.superviser(), "Sup");
    }

    #[test]
    fn test_unknown_tag_skips_line() {
        let mut cursor = Cursor::new("PostDoc Eve E5 X 1 1.0\nUndergrad Al A1 Senior 3 2.0\n");
        assert_eq!(
            next_entry(&mut cursor),
            Some(Ok(Parsed::Skipped {
                tag: "PostDoc".to_string()
            }))
        );
        assert!(matches!(
            next_entry(&mut cursor),
            Some(Ok(Parsed::Record(Record::Undergraduate(_))))
        ));
        assert_eq!(next_entry(&mut cursor), None);
    }

    #[test]
    fn test_invalid_credits() {
        let err = parse_one("Undergrad Al A1 Senior twelve 2.0").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                kind: Kind::Undergraduate,
                name: "Al".to_string(),
                field: "credits",
                token: "twelve".to_string(),
            }
        );
    }

    #[test]
    fn test_truncated_record() {
        let err = parse_one("Undergrad Al A1").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEnd {
                kind: Kind::Undergraduate,
                name: "Al".to_string(),
                field: "year",
            }
        );
        assert_eq!(
            err.to_string(),
            "Undergrad record for 'Al' ended before its year field"
        );
    }

    #[test]
    fn test_missing_quote_swallows_following_records() {
        let input = "GradAsst Fay F6 PhD 6 3.0 \"Open thesis \"Task\" \"Sup\" 10\nUndergrad Al A1 Senior 3 2.0\n";
        let mut cursor = Cursor::new(input);
        let err = next_entry(&mut cursor)
            .expect("entry expected")
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedEnd {
                field: "hourPay",
                ..
            }
        ));
        assert_eq!(next_entry(&mut cursor), None);
    }

    #[test]
    fn test_missing_quote_is_not_an_error_when_fields_remain() {
        let input = r#"GradAsst Fay F6 PhD 6 3.0 "Open thesis "Task" "Sup" 10 " 7"#;
        let Record::GraduateAssistant(ga) = record(input) else {
            panic!("expected a graduate assistant");
        };
        assert_eq!(ga.thesis(), "Open thesis ");
        assert_eq!(ga.task(), " ");
        assert_eq!(ga.superviser(), " 10 ");
        assert!((ga.hour_pay() - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_blank_input_has_no_entries() {
        assert_eq!(next_entry(&mut Cursor::new("\n\n   \n")), None);
    }
}
