//! Data models for `roster`

pub mod graduate;
pub mod kind;
pub mod record;
pub mod student;
pub mod undergraduate;

pub use graduate::{Graduate, GraduateAssistant};
pub use kind::Kind;
pub use record::Record;
pub use student::Student;
pub use undergraduate::Undergraduate;
