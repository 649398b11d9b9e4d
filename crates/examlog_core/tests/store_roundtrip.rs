use chrono::NaiveDate;
use examlog_core::{
    ExamRecord, InMemoryMedium, MediumError, MediumResult, RecordCollection, RecordDraft,
    RecordStore, StoreError, TabularMedium,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn record(day: u32, exam_type: &str, exam_name: &str, count: u32) -> ExamRecord {
    ExamRecord::from_draft(
        RecordDraft::new(date(2024, 6, day), exam_type, exam_name, count),
        "Junho",
    )
}

/// Medium whose reads and writes fail, for error-mapping tests.
struct UnreachableMedium;

impl TabularMedium for UnreachableMedium {
    fn read_all_rows(&self) -> MediumResult<Vec<Vec<String>>> {
        Err(MediumError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "sheet is gone",
        )))
    }

    fn write_all_rows(&self, _rows: &[Vec<String>]) -> MediumResult<()> {
        Err(MediumError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "sheet is read-only",
        )))
    }
}

/// Medium that loads fine but refuses every write.
struct ReadOnlyMedium;

impl TabularMedium for ReadOnlyMedium {
    fn read_all_rows(&self) -> MediumResult<Vec<Vec<String>>> {
        Ok(Vec::new())
    }

    fn write_all_rows(&self, _rows: &[Vec<String>]) -> MediumResult<()> {
        Err(MediumError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "sheet is read-only",
        )))
    }
}

#[test]
fn save_then_load_round_trips_in_order() {
    let store = RecordStore::new(InMemoryMedium::new());
    let mut collection = RecordCollection::new();
    collection.push(record(10, "Laboratório", "Hemograma", 5));
    collection.push(record(11, "Imagem", "Raio-X", 2));
    collection.push(record(10, "Laboratório", "Hemograma", 1));

    store.save(&collection).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.len(), 3);
    let expected_rows: Vec<Vec<String>> = collection
        .records()
        .iter()
        .map(ExamRecord::to_row)
        .collect();
    let loaded_rows: Vec<Vec<String>> = loaded.records().iter().map(ExamRecord::to_row).collect();
    assert_eq!(loaded_rows, expected_rows);
}

#[test]
fn load_drops_rows_where_every_field_is_blank() {
    let medium = InMemoryMedium::with_rows(vec![
        vec![
            "2024-06-10".to_string(),
            "Junho".to_string(),
            "Laboratório".to_string(),
            "Hemograma".to_string(),
            "5".to_string(),
        ],
        vec![String::new(); 5],
        vec![" ".to_string(), String::new(), String::new(), String::new(), String::new()],
    ]);

    let loaded = RecordStore::new(medium).load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.records()[0].exam_name, "Hemograma");
}

#[test]
fn load_accepts_decimal_integer_counts() {
    let medium = InMemoryMedium::with_rows(vec![vec![
        "2024-06-10".to_string(),
        "Junho".to_string(),
        "Laboratório".to_string(),
        "Hemograma".to_string(),
        "5.0".to_string(),
    ]]);

    let loaded = RecordStore::new(medium).load().unwrap();
    assert_eq!(loaded.records()[0].count, 5);
}

#[test]
fn load_rejects_partially_filled_rows() {
    let medium = InMemoryMedium::with_rows(vec![vec![
        "2024-06-10".to_string(),
        "Junho".to_string(),
        String::new(),
        "Hemograma".to_string(),
        "5".to_string(),
    ]]);

    let err = RecordStore::new(medium).load().unwrap_err();
    match err {
        StoreError::InvalidRow { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("exam type"), "unexpected message: {message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_rejects_unparseable_dates_and_counts() {
    let bad_date = InMemoryMedium::with_rows(vec![vec![
        "10/06/2024".to_string(),
        "Junho".to_string(),
        "Laboratório".to_string(),
        "Hemograma".to_string(),
        "5".to_string(),
    ]]);
    assert!(matches!(
        RecordStore::new(bad_date).load().unwrap_err(),
        StoreError::InvalidRow { line: 2, .. }
    ));

    let bad_count = InMemoryMedium::with_rows(vec![vec![
        "2024-06-10".to_string(),
        "Junho".to_string(),
        "Laboratório".to_string(),
        "Hemograma".to_string(),
        "cinco".to_string(),
    ]]);
    assert!(matches!(
        RecordStore::new(bad_count).load().unwrap_err(),
        StoreError::InvalidRow { line: 2, .. }
    ));
}

#[test]
fn unreachable_medium_maps_to_unavailable_on_load() {
    let store = RecordStore::new(UnreachableMedium);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[test]
fn failed_write_maps_to_write_failed_on_save() {
    let store = RecordStore::new(ReadOnlyMedium);
    let mut collection = RecordCollection::new();
    collection.push(record(10, "Laboratório", "Hemograma", 5));

    let err = store.save(&collection).unwrap_err();
    assert!(matches!(err, StoreError::WriteFailed(_)));
}
