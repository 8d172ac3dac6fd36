// File: crates/chart-data/tests/load.rs
// Purpose: Validate CSV loading, kind inference, and error surfaces.

use chart_data::{ColumnKind, DataError, Table};

const SALES: &str = "\
region,month,revenue,units
north,2024-01-01,1200.5,3
south,2024-02-01,800,2
north,2024-03-01,950.25,4
";

#[test]
fn loads_csv_and_infers_kinds() {
    let t = Table::from_csv(SALES.as_bytes()).expect("parse");
    assert_eq!(t.row_count(), 3);
    assert_eq!(t.column_names(), vec!["region", "month", "revenue", "units"]);
    assert_eq!(t.column("region").unwrap().kind, ColumnKind::Text);
    assert_eq!(t.column("month").unwrap().kind, ColumnKind::Date);
    assert_eq!(t.column("revenue").unwrap().kind, ColumnKind::Number);
    assert_eq!(t.column("units").unwrap().kind, ColumnKind::Number);
    assert_eq!(t.numeric_columns(), vec!["month", "revenue", "units"]);
}

#[test]
fn empty_cells_become_nulls() {
    let csv = "a,b\n1,\n,2\n";
    let t = Table::from_csv(csv.as_bytes()).unwrap();
    assert_eq!(t.column("a").unwrap().numbers(), vec![Some(1.0), None]);
    assert_eq!(t.column("b").unwrap().numbers(), vec![None, Some(2.0)]);
}

#[test]
fn header_only_file_is_empty() {
    let err = Table::from_csv("a,b\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DataError::Empty));
}

#[test]
fn ragged_rows_are_rejected_with_row_number() {
    let err = Table::from_csv("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
    match err {
        DataError::Ragged { row, got, want } => {
            assert_eq!((row, got, want), (3, 1, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_extension_is_rejected() {
    let err = Table::load("data.parquet", b"whatever").unwrap_err();
    assert!(matches!(err, DataError::UnsupportedExtension(ext) if ext == "parquet"));
}

#[test]
fn load_dispatches_on_extension() {
    let t = Table::load("sales.CSV", SALES.as_bytes()).expect("csv via load");
    assert_eq!(t.row_count(), 3);
}

#[test]
fn garbage_xlsx_bytes_fail_cleanly() {
    let err = Table::load("book.xlsx", b"not a zip archive").unwrap_err();
    assert!(matches!(err, DataError::Xlsx(_)));
}

#[test]
fn row_limit_is_enforced() {
    let mut csv = String::from("n\n");
    for i in 0..(chart_data::MAX_ROWS + 1) {
        csv.push_str(&i.to_string());
        csv.push('\n');
    }
    let err = Table::from_csv(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, DataError::TooLarge(_)));
}

#[test]
fn preview_formats_dates_and_numbers() {
    let t = Table::from_csv(SALES.as_bytes()).unwrap();
    let rows = t.preview(2);
    assert_eq!(rows[0], vec!["north", "2024-01-01", "1200.5", "3"]);
    assert_eq!(rows.len(), 2);
}
