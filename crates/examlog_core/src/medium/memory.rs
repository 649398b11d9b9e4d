//! In-memory backing medium.
//!
//! # Responsibility
//! - Hold rows in process memory for tests and ephemeral sessions.
//!
//! # Invariants
//! - `write_all_rows` replaces the full row set, matching file media.

use super::{MediumResult, TabularMedium};
use std::sync::{Mutex, PoisonError};

/// Backing medium that lives entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryMedium {
    rows: Mutex<Vec<Vec<String>>>,
}

impl InMemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the medium with pre-existing data rows.
    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

impl TabularMedium for InMemoryMedium {
    fn read_all_rows(&self) -> MediumResult<Vec<Vec<String>>> {
        let rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.clone())
    }

    fn write_all_rows(&self, rows: &[Vec<String>]) -> MediumResult<()> {
        let mut stored = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        *stored = rows.to_vec();
        Ok(())
    }
}
