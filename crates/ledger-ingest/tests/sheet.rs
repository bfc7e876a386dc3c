use std::fs;

use tempfile::tempdir;

use ledger_ingest::{
    SheetTable, ledger_records, ledger_table, read_sheet, read_sheet_or_empty, source_records,
    write_sheet,
};
use ledger_model::{CompletedCredit, LEDGER_HEADERS};

#[test]
fn reads_header_and_data_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("source.csv");
    fs::write(
        &path,
        "Import,Student Name,Student ID,Course\nTRUE,\"Zapata, Maria\",123456,Algebra I\n",
    )
    .unwrap();

    let table = read_sheet(&path).unwrap();
    assert_eq!(table.headers.len(), 4);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][1], "Zapata, Maria");
}

#[test]
fn trims_cells_and_strips_bom() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("source.csv");
    fs::write(
        &path,
        "\u{feff}Import,Name\n TRUE ,\"  Brown, Ana \"\n",
    )
    .unwrap();

    let table = read_sheet(&path).unwrap();
    assert_eq!(table.headers[0], "Import");
    assert_eq!(table.rows[0][0], "TRUE");
    assert_eq!(table.rows[0][1], "Brown, Ana");
}

#[test]
fn skips_blank_rows_and_pads_short_ones() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("source.csv");
    fs::write(&path, "A,B,C\n,,\n1,2\n").unwrap();

    let table = read_sheet(&path).unwrap();
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0], vec!["1", "2", ""]);
}

#[test]
fn missing_ledger_becomes_empty_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");

    let table = read_sheet_or_empty(&path, &LEDGER_HEADERS).unwrap();
    assert_eq!(table.headers.len(), LEDGER_HEADERS.len());
    assert!(table.rows.is_empty());
}

#[test]
fn missing_source_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(read_sheet(&dir.path().join("absent.csv")).is_err());
}

#[test]
fn ledger_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    let credit = CompletedCredit {
        row_number: 1,
        student_name: "ZAPATA, MARIA".to_string(),
        student_id: "123456".to_string(),
        course_name: "ALGEBRA I".to_string(),
        course_number: "4120".to_string(),
        course_start: "8/26/2024".to_string(),
        course_end: "12/20/2024".to_string(),
        course_grade: "88".to_string(),
        teacher_of_record: "Garza".to_string(),
        hours_on_course: "42.5".to_string(),
        completion_url: "https://letters.example/123456".to_string(),
        ls: String::new(),
        notes: String::new(),
    };

    write_sheet(&path, &ledger_table(std::slice::from_ref(&credit))).unwrap();
    let table = read_sheet(&path).unwrap();
    let records = ledger_records(&table);
    assert_eq!(records, vec![credit]);
}

#[test]
fn source_records_follow_row_order() {
    let table = SheetTable {
        headers: vec!["Import".to_string(), "Name".to_string(), "ID".to_string()],
        rows: vec![
            vec!["TRUE".to_string(), "Brown, Ana".to_string(), "1".to_string()],
            vec![
                "FALSE".to_string(),
                "Zapata, Maria".to_string(),
                "2".to_string(),
            ],
        ],
    };
    let records = source_records(&table);
    assert_eq!(records.len(), 2);
    assert!(records[0].selected);
    assert!(!records[1].selected);
    assert_eq!(records[1].student_name, "Zapata, Maria");
}
