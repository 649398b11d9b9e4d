//! Core domain logic for the exam registry.
//! This crate is the single source of truth for record, storage, and
//! query invariants.

pub mod export;
pub mod locale;
pub mod logging;
pub mod medium;
pub mod model;
pub mod repo;
pub mod service;
pub mod tabular;

pub use export::{build_export, export_file_name, ExportFile};
pub use locale::{display_date, LocaleError, LocaleResult, MonthTable};
pub use logging::{default_log_level, init_logging, logging_status};
pub use medium::{
    CsvFileMedium, InMemoryMedium, MediumError, MediumResult, TabularMedium, STORAGE_HEADER,
};
pub use model::collection::RecordCollection;
pub use model::record::{ExamRecord, RecordDraft, RecordId, RecordValidationError};
pub use repo::record_store::{RecordStore, StoreError, StoreResult};
pub use service::exam_service::{ExamService, QueryError, QueryResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
