//! Ordered collection of loaded records

use crate::core::models::Record;

/// Records in load order, subject to the front rotation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record at the back
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in current order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in current order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Move the last record to the front, shifting every other record back one slot
    ///
    /// Does nothing on an empty roster.
    pub fn rotate_last_to_front(&mut self) {
        if !self.records.is_empty() {
            self.records.rotate_right(1);
        }
    }

    /// The records ordered by ascending GPA
    ///
    /// The sort is stable: records with equal GPA keep their current relative
    /// order. The roster itself is left untouched.
    #[must_use]
    pub fn sorted_by_gpa(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.cmp_gpa(b));
        sorted
    }
}

impl From<Vec<Record>> for Roster {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Roster {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
