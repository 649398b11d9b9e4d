//! Local CSV-file backing medium.
//!
//! # Responsibility
//! - Persist the full sheet to one local file, header first.
//! - Initialize a missing file with a header-only sheet before first load.
//!
//! # Invariants
//! - Every write replaces the whole file through a temp-file swap.
//! - A readable file always starts with [`STORAGE_HEADER`].

use super::{MediumError, MediumResult, TabularMedium, STORAGE_HEADER};
use crate::tabular::{encode_rows, parse_rows};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Backing medium addressed by a single local file path.
#[derive(Debug)]
pub struct CsvFileMedium {
    path: PathBuf,
}

impl CsvFileMedium {
    /// Opens a sheet file, creating a header-only file when none exists.
    ///
    /// # Side effects
    /// - May create the file on first use.
    /// - Emits `medium_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> MediumResult<Self> {
        let started_at = Instant::now();
        info!("event=medium_open module=medium status=start mode=csv_file");

        let medium = Self {
            path: path.as_ref().to_path_buf(),
        };

        if !medium.path.exists() {
            if let Err(err) = medium.write_file(&[]) {
                error!(
                    "event=medium_open module=medium status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        }

        info!(
            "event=medium_open module=medium status=ok duration_ms={} path={}",
            started_at.elapsed().as_millis(),
            medium.path.display()
        );
        Ok(medium)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, rows: &[Vec<String>]) -> MediumResult<()> {
        let mut all_rows: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
        all_rows.push(header_row());
        all_rows.extend(rows.iter().cloned());

        // Old content must be fully replaced even when the write dies
        // partway: stage the new sheet, then swap it in.
        let staging = staging_path(&self.path);
        std::fs::write(&staging, encode_rows(&all_rows).as_bytes())?;
        std::fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl TabularMedium for CsvFileMedium {
    fn read_all_rows(&self) -> MediumResult<Vec<Vec<String>>> {
        let text = std::fs::read_to_string(&self.path)?;
        // Spreadsheet tools prepend a BOM when exporting UTF-8.
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let mut rows = parse_rows(text).map_err(|err| MediumError::Malformed {
            line: err.line(),
            message: err.to_string(),
        })?;

        if rows.is_empty() {
            return Err(MediumError::HeaderMismatch {
                expected: STORAGE_HEADER.join(","),
                found: "empty file".to_string(),
            });
        }

        let header = rows.remove(0);
        if !header_matches(&header) {
            return Err(MediumError::HeaderMismatch {
                expected: STORAGE_HEADER.join(","),
                found: header.join(","),
            });
        }

        Ok(rows)
    }

    fn write_all_rows(&self, rows: &[Vec<String>]) -> MediumResult<()> {
        self.write_file(rows)
    }
}

fn header_row() -> Vec<String> {
    STORAGE_HEADER.iter().map(|label| (*label).to_string()).collect()
}

fn header_matches(header: &[String]) -> bool {
    header.len() == STORAGE_HEADER.len()
        && header
            .iter()
            .zip(STORAGE_HEADER.iter())
            .all(|(found, expected)| found == expected)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "sheet".into());
    name.push(".tmp");
    path.with_file_name(name)
}
