//! Full-collection CSV export for download.
//!
//! # Responsibility
//! - Serialize the whole collection, header first, in collection order.
//! - Name the download after the export date.
//!
//! # Invariants
//! - Output is UTF-8 with the fixed [`STORAGE_HEADER`] labels.
//! - Export is a one-way snapshot, not an internal round-trip format.

use crate::medium::STORAGE_HEADER;
use crate::model::collection::RecordCollection;
use crate::model::record::ExamRecord;
use crate::tabular::encode_rows;
use chrono::NaiveDate;

/// A downloadable export: suggested file name plus file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Builds the CSV download for the full collection.
pub fn build_export(collection: &RecordCollection, exported_on: NaiveDate) -> ExportFile {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(collection.len() + 1);
    rows.push(STORAGE_HEADER.iter().map(|label| (*label).to_string()).collect());
    rows.extend(collection.records().iter().map(ExamRecord::to_row));

    ExportFile {
        file_name: export_file_name(exported_on),
        bytes: encode_rows(&rows).into_bytes(),
    }
}

/// Download name for an export taken on `exported_on`.
pub fn export_file_name(exported_on: NaiveDate) -> String {
    format!("exames_{}.csv", exported_on.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::export_file_name;
    use chrono::NaiveDate;

    #[test]
    fn file_name_embeds_iso_export_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(export_file_name(date), "exames_2024-06-10.csv");
    }
}
