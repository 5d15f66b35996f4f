//! Roster file parsing

pub mod cursor;
pub mod loader;
pub mod record_parser;

pub use cursor::Cursor;
pub use loader::{load_roster, parse_roster, LoadError, LoadSummary, ParseMode};
pub use record_parser::{next_entry, parse_record, ParseError, Parsed};
