/// Date-indexed view over a habit's completion records
///
/// Completion records arrive sparse and in no particular order. Streak walks
/// and rate calculations both need ordered traversal and per-date lookups,
/// so we index the records once into a BTreeMap keyed by date instead of
/// rescanning the record list.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use crate::domain::CompletionRecord;

/// Sparse date -> completed index over one habit's records
#[derive(Debug, Clone, Default)]
pub struct CompletionHistory {
    by_date: BTreeMap<NaiveDate, bool>,
}

impl CompletionHistory {
    /// Build the index from a slice of records, in any order
    ///
    /// If the caller hands us duplicate records for one date, the last one
    /// seen wins.
    pub fn from_records(records: &[CompletionRecord]) -> Self {
        let by_date = records.iter().map(|r| (r.date, r.completed)).collect();
        Self { by_date }
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// The recorded outcome for a date, or None if nothing was logged
    pub fn completed_on(&self, date: NaiveDate) -> Option<bool> {
        self.by_date.get(&date).copied()
    }

    /// The most recent recorded date, completed or not
    pub fn most_recent(&self) -> Option<NaiveDate> {
        self.by_date.keys().next_back().copied()
    }

    /// All records in ascending date order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, bool)> + '_ {
        self.by_date.iter().map(|(d, c)| (*d, *c))
    }

    /// Records with `start <= date <= end`, ascending
    pub fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, bool)> + '_ {
        self.by_date.range(start..=end).map(|(d, c)| (*d, *c))
    }

    /// Count of `completed == true` records with `start <= date <= end`
    pub fn successes_in(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        self.range(start, end).filter(|(_, completed)| *completed).count() as u32
    }
}

impl FromIterator<(NaiveDate, bool)> for CompletionHistory {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, bool)>>(iter: I) -> Self {
        Self { by_date: iter.into_iter().collect() }
    }
}
