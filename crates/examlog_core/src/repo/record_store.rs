//! Record store: authoritative load/save of the full collection.
//!
//! # Responsibility
//! - Load all persisted rows into a `RecordCollection`.
//! - Replace the medium contents with a mutated collection.
//!
//! # Invariants
//! - Saves write the fixed field order {date, month_label, exam_type,
//!   exam_name, count}.
//! - Rows with every field blank are dropped on load; any other malformed
//!   row is rejected, not masked.
//! - No caching: every load/save pair round-trips to the medium.

use crate::medium::{MediumError, TabularMedium};
use crate::model::collection::RecordCollection;
use crate::model::record::ExamRecord;
use chrono::NaiveDate;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure surface of collection load/save.
#[derive(Debug)]
pub enum StoreError {
    /// Medium could not be reached at load time. Fatal to the calling
    /// operation; not retried.
    Unavailable(MediumError),
    /// Save did not complete; the caller must discard its in-memory
    /// mutation and reload for a consistent view.
    WriteFailed(MediumError),
    /// A persisted row cannot be interpreted as an exam record.
    InvalidRow { line: usize, message: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "backing medium unavailable: {err}"),
            Self::WriteFailed(err) => write!(f, "backing medium write failed: {err}"),
            Self::InvalidRow { line, message } => {
                write!(f, "invalid persisted row on line {line}: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(err) | Self::WriteFailed(err) => Some(err),
            Self::InvalidRow { .. } => None,
        }
    }
}

/// Authoritative load/save of the full record collection.
pub struct RecordStore<M: TabularMedium> {
    medium: M,
}

impl<M: TabularMedium> RecordStore<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Reads all rows from the medium into a collection.
    ///
    /// Rows where every field is blank are backing-medium artifacts, not
    /// data, and are discarded.
    pub fn load(&self) -> StoreResult<RecordCollection> {
        let started_at = Instant::now();

        let rows = match self.medium.read_all_rows() {
            Ok(rows) => rows,
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(StoreError::Unavailable(err));
            }
        };

        let mut collection = RecordCollection::new();
        for (index, row) in rows.iter().enumerate() {
            if row.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            // Line numbering counts the header as line 1.
            collection.push(parse_record_row(index + 2, row)?);
        }

        info!(
            "event=store_load module=repo status=ok duration_ms={} rows={}",
            started_at.elapsed().as_millis(),
            collection.len()
        );
        Ok(collection)
    }

    /// Fully replaces the medium contents with `collection`.
    pub fn save(&self, collection: &RecordCollection) -> StoreResult<()> {
        let started_at = Instant::now();

        let rows: Vec<Vec<String>> = collection
            .records()
            .iter()
            .map(ExamRecord::to_row)
            .collect();

        if let Err(err) = self.medium.write_all_rows(&rows) {
            error!(
                "event=store_save module=repo status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StoreError::WriteFailed(err));
        }

        info!(
            "event=store_save module=repo status=ok duration_ms={} rows={}",
            started_at.elapsed().as_millis(),
            rows.len()
        );
        Ok(())
    }
}

fn parse_record_row(line: usize, row: &[String]) -> StoreResult<ExamRecord> {
    if row.len() != 5 {
        return Err(StoreError::InvalidRow {
            line,
            message: format!("expected 5 fields, found {}", row.len()),
        });
    }

    let date = NaiveDate::parse_from_str(row[0].trim(), "%Y-%m-%d").map_err(|err| {
        StoreError::InvalidRow {
            line,
            message: format!("invalid date `{}`: {err}", row[0]),
        }
    })?;

    for (label, value) in [
        ("month", &row[1]),
        ("exam type", &row[2]),
        ("exam name", &row[3]),
    ] {
        if value.trim().is_empty() {
            return Err(StoreError::InvalidRow {
                line,
                message: format!("missing {label}"),
            });
        }
    }

    let count = parse_count(row[4].trim()).ok_or_else(|| StoreError::InvalidRow {
        line,
        message: format!("invalid count `{}`", row[4]),
    })?;

    Ok(ExamRecord {
        id: Uuid::new_v4(),
        date,
        month_label: row[1].clone(),
        exam_type: row[2].clone(),
        exam_name: row[3].clone(),
        count,
    })
}

fn parse_count(value: &str) -> Option<u32> {
    if let Ok(count) = value.parse::<u32>() {
        return Some(count);
    }
    // Legacy sheet exports store integer counts as decimals ("5.0").
    let float: f64 = value.parse().ok()?;
    if float.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&float) {
        return Some(float as u32);
    }
    None
}
