//! Loading a whole roster file

use super::cursor::Cursor;
use super::record_parser::{next_entry, ParseError, Parsed};
use crate::core::roster::Roster;
use crate::{debug, info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// How the input is divided between records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// One cursor over the whole input. A record may span lines, and a record
    /// with unbalanced quotes can consume the records after it.
    #[default]
    Stream,
    /// Each non-blank line is read with its own cursor; whatever a record
    /// leaves unread on its line is dropped.
    Isolated,
}

impl ParseMode {
    /// `Isolated` when `isolate` is set, `Stream` otherwise
    #[must_use]
    pub const fn from_isolate(isolate: bool) -> Self {
        if isolate {
            Self::Isolated
        } else {
            Self::Stream
        }
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stream" => Ok(Self::Stream),
            "isolated" | "isolate" | "line" => Ok(Self::Isolated),
            _ => Err(format!("Unknown parse mode: {s}")),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stream => write!(f, "stream"),
            Self::Isolated => write!(f, "isolated"),
        }
    }
}

/// Counts gathered while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records added to the roster
    pub loaded: usize,
    /// Entries with an unrecognized tag
    pub skipped: usize,
    /// Entries whose fields could not be read
    pub rejected: usize,
}

impl LoadSummary {
    fn record(&mut self, outcome: &Result<Parsed, ParseError>) {
        match outcome {
            Ok(Parsed::Record(_)) => self.loaded += 1,
            Ok(Parsed::Skipped { .. }) => self.skipped += 1,
            Err(_) => self.rejected += 1,
        }
    }
}

/// Failure to load a roster file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}

/// Parse every record in `input`, in read order
///
/// Entries with unknown tags and entries that fail to parse are left out of
/// the roster and counted in the returned summary.
#[must_use]
pub fn parse_roster(input: &str, mode: ParseMode) -> (Roster, LoadSummary) {
    let mut roster = Roster::new();
    let mut summary = LoadSummary::default();

    let mut take = |outcome: Result<Parsed, ParseError>| {
        summary.record(&outcome);
        match outcome {
            Ok(Parsed::Record(record)) => {
                debug!("Loaded {} record for {}", record.kind(), record.name());
                roster.push(record);
            }
            Ok(Parsed::Skipped { tag }) => debug!("Skipped entry with unknown tag '{tag}'"),
            Err(e) => warn!("Rejected record: {e}"),
        }
    };

    match mode {
        ParseMode::Stream => {
            let mut cursor = Cursor::new(input);
            while let Some(outcome) = next_entry(&mut cursor) {
                // resume at the next line after a rejected record
                if outcome.is_err() {
                    cursor.skip_line();
                }
                take(outcome);
            }
        }
        ParseMode::Isolated => {
            for (line_no, line) in input.lines().enumerate() {
                let mut cursor = Cursor::new(line);
                if let Some(outcome) = next_entry(&mut cursor) {
                    take(outcome);
                    if !cursor.is_exhausted() {
                        debug!(
                            "Ignoring trailing text on line {}: {}",
                            line_no + 1,
                            cursor.remaining().trim()
                        );
                    }
                }
            }
        }
    }

    (roster, summary)
}

/// Read and parse the roster file at `path`
///
/// The file is read in one pass and closed before parsing starts. Invalid
/// UTF-8 is replaced rather than rejected.
///
/// # Errors
/// Returns [`LoadError::Io`] if the file cannot be opened or read
pub fn load_roster<P: AsRef<Path>>(
    path: P,
    mode: ParseMode,
) -> Result<(Roster, LoadSummary), LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let input = String::from_utf8_lossy(&bytes);

    let (roster, summary) = parse_roster(&input, mode);
    info!(
        "Loaded {} records from {} ({} skipped, {} rejected, {mode} mode)",
        summary.loaded,
        path.display(),
        summary.skipped,
        summary.rejected
    );
    Ok((roster, summary))
}
