//! Exam record domain model.
//!
//! # Responsibility
//! - Define the canonical dated exam-count record.
//! - Validate append drafts before anything reaches persistence.
//!
//! # Invariants
//! - `id` is assigned at construction and stable for the lifetime of one
//!   loaded snapshot; the persisted sheet carries no id column.
//! - `month_label` is derived from `date` at write time and preserved
//!   verbatim on load, never edited independently.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one loaded exam record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Validation failure for an append draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Exam type is empty or whitespace.
    EmptyExamType,
    /// Exam name is empty or whitespace.
    EmptyExamName,
    /// Count must be greater than zero for a new record.
    ZeroCount,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExamType => write!(f, "exam type must not be empty"),
            Self::EmptyExamName => write!(f, "exam name must not be empty"),
            Self::ZeroCount => write!(f, "count must be greater than zero"),
        }
    }
}

impl Error for RecordValidationError {}

/// Append request: the fields a caller supplies for one new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub date: NaiveDate,
    pub exam_type: String,
    pub exam_name: String,
    pub count: u32,
}

impl RecordDraft {
    pub fn new(
        date: NaiveDate,
        exam_type: impl Into<String>,
        exam_name: impl Into<String>,
        count: u32,
    ) -> Self {
        Self {
            date,
            exam_type: exam_type.into(),
            exam_name: exam_name.into(),
            count,
        }
    }

    /// Checks the draft against append preconditions.
    ///
    /// # Contract
    /// - `exam_type` and `exam_name` must contain non-whitespace text.
    /// - `count` must be greater than zero.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.exam_type.trim().is_empty() {
            return Err(RecordValidationError::EmptyExamType);
        }
        if self.exam_name.trim().is_empty() {
            return Err(RecordValidationError::EmptyExamName);
        }
        if self.count == 0 {
            return Err(RecordValidationError::ZeroCount);
        }
        Ok(())
    }
}

/// One row of the registry: exams of one kind counted for one day.
///
/// Duplicate (date, exam_type, exam_name) rows are legal and accumulate as
/// separate entries rather than upserting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRecord {
    /// Snapshot-stable identity, regenerated on every load.
    pub id: RecordId,
    /// Exam date; stored as ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Localized month name derived from `date` at write time.
    pub month_label: String,
    pub exam_type: String,
    pub exam_name: String,
    /// Stored exactly as entered; sign and magnitude are never altered.
    pub count: u32,
}

impl ExamRecord {
    /// Builds a record from a validated draft and its derived month label.
    pub fn from_draft(draft: RecordDraft, month_label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            month_label: month_label.into(),
            exam_type: draft.exam_type,
            exam_name: draft.exam_name,
            count: draft.count,
        }
    }

    /// Serializes the record into the fixed persisted field order
    /// {date, month_label, exam_type, exam_name, count}.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.month_label.clone(),
            self.exam_type.clone(),
            self.exam_name.clone(),
            self.count.to_string(),
        ]
    }
}
