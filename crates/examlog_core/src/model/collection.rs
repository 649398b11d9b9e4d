//! Ordered record collection and its pure operations.
//!
//! # Responsibility
//! - Hold the full record set in append order.
//! - Derive pick-list and per-date views without touching storage.
//! - Apply the in-memory half of every mutation.
//!
//! # Invariants
//! - Relative order of surviving records is preserved by every removal.
//! - Views are recomputed from current contents, never cached.

use crate::model::record::{ExamRecord, RecordId};
use chrono::NaiveDate;

/// Ordered sequence of exam records; insertion order is append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCollection {
    records: Vec<ExamRecord>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ExamRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExamRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends one record at the end of the collection.
    pub fn push(&mut self, record: ExamRecord) {
        self.records.push(record);
    }

    /// All non-empty exam types, sorted lexicographically, deduplicated.
    pub fn distinct_types(&self) -> Vec<String> {
        let mut values: Vec<String> = self
            .records
            .iter()
            .filter(|record| !record.exam_type.trim().is_empty())
            .map(|record| record.exam_type.clone())
            .collect();
        values.sort();
        values.dedup();
        values
    }

    /// All non-empty exam names, sorted lexicographically, deduplicated.
    ///
    /// With `type_filter` set, only rows of that exam type contribute.
    /// Without a filter the unscoped set is returned.
    pub fn distinct_names(&self, type_filter: Option<&str>) -> Vec<String> {
        let mut values: Vec<String> = self
            .records
            .iter()
            .filter(|record| !record.exam_name.trim().is_empty())
            .filter(|record| type_filter.map_or(true, |filter| record.exam_type == filter))
            .map(|record| record.exam_name.clone())
            .collect();
        values.sort();
        values.dedup();
        values
    }

    /// Rows whose date equals `date`, in collection order.
    pub fn records_for_date(&self, date: NaiveDate) -> Vec<&ExamRecord> {
        self.records
            .iter()
            .filter(|record| record.date == date)
            .collect()
    }

    /// Removes one record by snapshot-stable identity.
    pub fn remove_record(&mut self, id: RecordId) -> Option<ExamRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    /// Removes the first row matching (date, exam_name).
    ///
    /// Exam names are not unique per date; taking the first match keeps the
    /// operation deterministic when duplicates exist.
    pub fn remove_first_for(&mut self, date: NaiveDate, exam_name: &str) -> Option<ExamRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.date == date && record.exam_name == exam_name)?;
        Some(self.records.remove(index))
    }

    /// Removes every row whose date equals `date`; returns the removed count.
    pub fn remove_date(&mut self, date: NaiveDate) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.date != date);
        before - self.records.len()
    }
}
