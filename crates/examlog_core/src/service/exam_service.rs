//! Exam registry use-case service.
//!
//! # Responsibility
//! - Validate and append new records, deriving the month label.
//! - Serve pick-list and per-date views from fresh snapshots.
//! - Execute single-row and whole-date deletions, and the full export.
//!
//! # Invariants
//! - Ownership of the collection is transient: every operation loads its
//!   own snapshot and persists at most once.
//! - Two overlapping load-mutate-save cycles can lose the earlier write;
//!   accepted under the single-user assumption.

use crate::export::{build_export, ExportFile};
use crate::locale::{LocaleError, MonthTable};
use crate::medium::TabularMedium;
use crate::model::collection::RecordCollection;
use crate::model::record::{ExamRecord, RecordDraft, RecordValidationError};
use crate::repo::record_store::{RecordStore, StoreError};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type QueryResult<T> = Result<T, QueryError>;

/// Failure surface of the service operations.
#[derive(Debug)]
pub enum QueryError {
    /// Append rejected before any mutation; nothing was persisted.
    Validation(RecordValidationError),
    /// Month table defect; the append is aborted rather than storing an
    /// unlocalized label.
    Locale(LocaleError),
    /// Load or save against the backing medium failed.
    Store(StoreError),
    /// Whole-date deletion invoked without explicit confirmation.
    ConfirmationRequired,
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Locale(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::ConfirmationRequired => {
                write!(f, "deleting every record of a date requires explicit confirmation")
            }
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Locale(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::ConfirmationRequired => None,
        }
    }
}

impl From<RecordValidationError> for QueryError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<LocaleError> for QueryError {
    fn from(value: LocaleError) -> Self {
        Self::Locale(value)
    }
}

impl From<StoreError> for QueryError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case facade over one record store.
pub struct ExamService<M: TabularMedium> {
    store: RecordStore<M>,
    months: MonthTable,
}

impl<M: TabularMedium> ExamService<M> {
    /// Creates a service over `medium` with the application month table.
    pub fn new(medium: M) -> Self {
        Self::with_month_table(medium, MonthTable::portuguese())
    }

    /// Creates a service with a caller-provided month table.
    pub fn with_month_table(medium: M, months: MonthTable) -> Self {
        Self {
            store: RecordStore::new(medium),
            months,
        }
    }

    pub fn store(&self) -> &RecordStore<M> {
        &self.store
    }

    /// Loads a fresh full snapshot for rendering.
    pub fn load_collection(&self) -> QueryResult<RecordCollection> {
        Ok(self.store.load()?)
    }

    /// Distinct exam types for the "pick existing or create new" choice.
    pub fn exam_types(&self) -> QueryResult<Vec<String>> {
        Ok(self.store.load()?.distinct_types())
    }

    /// Distinct exam names, optionally scoped to one exam type.
    pub fn exam_names(&self, type_filter: Option<&str>) -> QueryResult<Vec<String>> {
        Ok(self.store.load()?.distinct_names(type_filter))
    }

    /// Validates and appends one record, persisting the grown collection.
    ///
    /// # Contract
    /// - Rejected drafts leave the store untouched.
    /// - The month label is derived from the draft date before anything is
    ///   loaded; an unmapped month aborts the whole append.
    pub fn add_record(&self, draft: RecordDraft) -> QueryResult<ExamRecord> {
        draft.validate()?;
        let month_label = self.months.month_label(draft.date)?;

        let mut collection = self.store.load()?;
        let record = ExamRecord::from_draft(draft, month_label);
        collection.push(record.clone());
        self.store.save(&collection)?;
        Ok(record)
    }

    /// Rows recorded for `date`, in collection order.
    pub fn records_for_date(&self, date: NaiveDate) -> QueryResult<Vec<ExamRecord>> {
        let collection = self.store.load()?;
        let matches = collection
            .records_for_date(date)
            .into_iter()
            .cloned()
            .collect();
        Ok(matches)
    }

    /// Removes the first record matching (date, exam_name).
    ///
    /// A missing match is not an error: `Ok(None)` reports zero rows
    /// affected and the store is not rewritten.
    pub fn delete_record(
        &self,
        date: NaiveDate,
        exam_name: &str,
    ) -> QueryResult<Option<ExamRecord>> {
        let mut collection = self.store.load()?;
        let Some(removed) = collection.remove_first_for(date, exam_name) else {
            return Ok(None);
        };
        self.store.save(&collection)?;
        Ok(Some(removed))
    }

    /// Removes every record of `date`; returns the removed count.
    ///
    /// # Contract
    /// - `confirmed` must be `true`; the flag exists to keep accidental
    ///   destructive calls out of the API.
    /// - When nothing matches, the store is not rewritten.
    pub fn delete_all_for_date(&self, date: NaiveDate, confirmed: bool) -> QueryResult<usize> {
        if !confirmed {
            return Err(QueryError::ConfirmationRequired);
        }

        let mut collection = self.store.load()?;
        let removed = collection.remove_date(date);
        if removed > 0 {
            self.store.save(&collection)?;
        }
        Ok(removed)
    }

    /// Serializes the full collection into a downloadable CSV file.
    pub fn export_all(&self, exported_on: NaiveDate) -> QueryResult<ExportFile> {
        let collection = self.store.load()?;
        Ok(build_export(&collection, exported_on))
    }
}
