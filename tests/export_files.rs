//! Tests for the file serializers.
//!
//! These build rowsets by hand, so they cover the write path without a
//! running database.

use chrono::NaiveDate;
use learning_export::export::{write_csv, CellValue, Rowset};
use tempfile::TempDir;

/// A search_logs-shaped rowset with three rows, including a NULL and a
/// comma-bearing query string.
fn sample_rowset() -> Rowset {
    let mut rowset = Rowset::new(&["id", "user_id", "query", "created_at"]);
    let first = NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap();
    let second = NaiveDate::from_ymd_opt(2024, 3, 11)
        .unwrap()
        .and_hms_opt(22, 5, 30)
        .unwrap();

    rowset.rows.push(vec![
        CellValue::UInt(1),
        CellValue::UInt(17),
        CellValue::Text("rust basics".to_string()),
        CellValue::DateTime(first),
    ]);
    rowset.rows.push(vec![
        CellValue::UInt(2),
        CellValue::UInt(17),
        CellValue::Text("sql joins, aggregates".to_string()),
        CellValue::DateTime(second),
    ]);
    rowset.rows.push(vec![
        CellValue::UInt(3),
        CellValue::UInt(42),
        CellValue::Null,
        CellValue::DateTime(second),
    ]);
    rowset
}

#[test]
fn test_write_csv_header_and_row_counts() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("search_logs.csv");

    write_csv(&sample_rowset(), &path).expect("CSV write should succeed");

    let content = std::fs::read_to_string(&path).expect("Should read CSV file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4, "Should have header + 3 data rows");
    assert_eq!(lines[0], "id,user_id,query,created_at");
}

#[test]
fn test_write_csv_renders_values() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("search_logs.csv");

    write_csv(&sample_rowset(), &path).expect("CSV write should succeed");

    let content = std::fs::read_to_string(&path).expect("Should read CSV file");
    assert!(
        content.contains("1,17,rust basics,2024-03-10 08:15:00"),
        "Datetime cells should render as YYYY-MM-DD HH:MM:SS"
    );
    assert!(
        content.contains("\"sql joins, aggregates\""),
        "Fields containing commas should be quoted"
    );
}

#[test]
fn test_write_csv_null_is_empty_field() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("search_logs.csv");

    write_csv(&sample_rowset(), &path).expect("CSV write should succeed");

    let content = std::fs::read_to_string(&path).expect("Should read CSV file");
    let null_row = content
        .lines()
        .find(|line| line.starts_with("3,"))
        .expect("Should find the row with the NULL query");
    assert_eq!(null_row, "3,42,,2024-03-11 22:05:30");
}

#[test]
fn test_write_csv_empty_rowset_keeps_header() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("users.csv");
    let rowset = Rowset::new(&["id", "email", "role", "created_at"]);

    write_csv(&rowset, &path).expect("Empty rowset should still write");

    let content = std::fs::read_to_string(&path).expect("Should read CSV file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["id,email,role,created_at"]);
}

#[test]
fn test_write_csv_overwrites_existing_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("search_logs.csv");

    write_csv(&sample_rowset(), &path).expect("First write should succeed");

    let mut smaller = Rowset::new(&["id", "user_id", "query", "created_at"]);
    smaller.rows.push(vec![
        CellValue::UInt(9),
        CellValue::UInt(1),
        CellValue::Text("ownership".to_string()),
        CellValue::Null,
    ]);
    write_csv(&smaller, &path).expect("Re-running should overwrite, not fail");

    let content = std::fs::read_to_string(&path).expect("Should read CSV file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines.len(),
        2,
        "Overwritten file should only contain the new export"
    );
    assert!(lines[1].starts_with("9,"));
}

#[cfg(feature = "parquet")]
mod parquet_roundtrip {
    use super::*;
    use arrow::array::{Array, StringArray};
    use arrow::datatypes::{DataType, TimeUnit};
    use learning_export::export::write_parquet;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use std::fs::File;

    #[test]
    fn test_write_parquet_reads_back_with_types() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("search_logs.parquet");

        write_parquet(&sample_rowset(), &path).expect("Parquet write should succeed");

        let file = File::open(&path).expect("Should open Parquet file");
        let builder =
            ParquetRecordBatchReaderBuilder::try_new(file).expect("Should read Parquet metadata");
        let schema = builder.schema().clone();

        assert_eq!(schema.field(0).name(), "id");
        assert_eq!(schema.field(0).data_type(), &DataType::UInt64);
        assert_eq!(schema.field(2).data_type(), &DataType::Utf8);
        assert_eq!(
            schema.field(3).data_type(),
            &DataType::Timestamp(TimeUnit::Microsecond, None)
        );

        let reader = builder.build().expect("Should build Parquet reader");
        let batches: Vec<_> = reader
            .collect::<Result<Vec<_>, _>>()
            .expect("Should decode all record batches");
        let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total_rows, 3, "Row count should survive the round trip");

        let queries = batches[0]
            .column(2)
            .as_any()
            .downcast_ref::<StringArray>()
            .expect("query column should be a string array");
        assert_eq!(queries.value(0), "rust basics");
        assert!(queries.is_null(2), "NULL cells should stay null in Parquet");
    }

    #[test]
    fn test_write_parquet_overwrites_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("search_logs.parquet");

        write_parquet(&sample_rowset(), &path).expect("First write should succeed");
        write_parquet(&sample_rowset(), &path).expect("Re-running should overwrite, not fail");

        let file = File::open(&path).expect("Should open Parquet file");
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .expect("Should read Parquet metadata")
            .build()
            .expect("Should build Parquet reader");
        let total_rows: usize = reader
            .collect::<Result<Vec<_>, _>>()
            .expect("Should decode all record batches")
            .iter()
            .map(|b| b.num_rows())
            .sum();
        assert_eq!(total_rows, 3);
    }

    #[test]
    fn test_write_parquet_empty_rowset() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("users.parquet");
        let rowset = Rowset::new(&["id", "email", "role", "created_at"]);

        write_parquet(&rowset, &path).expect("Empty rowset should still write");

        let file = File::open(&path).expect("Should open Parquet file");
        let builder =
            ParquetRecordBatchReaderBuilder::try_new(file).expect("Should read Parquet metadata");
        assert_eq!(builder.schema().fields().len(), 4);
    }
}
