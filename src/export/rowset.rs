//! In-memory query results.
//!
//! Each export query materializes into a [`Rowset`]: the column names plus
//! every row decoded into dynamically typed [`CellValue`]s. The six tables
//! share no schema, so cells are decoded by the driver's column type
//! information rather than into per-table structs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Row, TypeInfo};

use crate::config::TIMESTAMP_FORMAT;
use crate::error_handling::DatabaseError;

/// A single decoded cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// SQL NULL
    Null,
    /// Signed integer column
    Int(i64),
    /// Unsigned integer column
    UInt(u64),
    /// Floating-point column
    Float(f64),
    /// Text column (also the fallback for unrecognized types)
    Text(String),
    /// `DATETIME`/`TIMESTAMP` column, as naive UTC
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Renders the cell for text output.
    ///
    /// NULL renders as the empty string; datetimes use the shared
    /// `YYYY-MM-DD HH:MM:SS` format.
    pub fn render(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Int(v) => v.to_string(),
            CellValue::UInt(v) => v.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Text(v) => v.clone(),
            CellValue::DateTime(v) => v.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// The fully materialized result of one export query.
#[derive(Clone, Debug, PartialEq)]
pub struct Rowset {
    /// Column names, in select order.
    pub columns: Vec<String>,
    /// Decoded rows; every row has one cell per column.
    pub rows: Vec<Vec<CellValue>>,
}

impl Rowset {
    /// Creates an empty rowset with the given columns.
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Decodes driver rows into a rowset.
    ///
    /// The column list comes from the table spec rather than the driver so
    /// an empty result still carries a full header.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::SqlError`] if a cell cannot be decoded.
    pub fn from_mysql_rows(columns: &[&str], rows: &[MySqlRow]) -> Result<Self, DatabaseError> {
        let mut rowset = Self::new(columns);
        rowset.rows.reserve(rows.len());

        for row in rows {
            let mut cells = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                cells.push(decode_cell(row, idx)?);
            }
            rowset.rows.push(cells);
        }

        Ok(rowset)
    }
}

/// Decodes one cell based on the column's MySQL type.
///
/// Unrecognized types fall back to a string decode, which covers the
/// remaining text-like types (ENUM, CHAR) these tables use.
fn decode_cell(row: &MySqlRow, idx: usize) -> Result<CellValue, DatabaseError> {
    let type_name = row.try_column(idx)?.type_info().name();

    let cell = match type_name {
        "BOOLEAN" | "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => row
            .try_get::<Option<i64>, _>(idx)?
            .map_or(CellValue::Null, CellValue::Int),
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => row
            .try_get::<Option<u64>, _>(idx)?
            .map_or(CellValue::Null, CellValue::UInt),
        "FLOAT" | "DOUBLE" => row
            .try_get::<Option<f64>, _>(idx)?
            .map_or(CellValue::Null, CellValue::Float),
        "DATETIME" => row
            .try_get::<Option<NaiveDateTime>, _>(idx)?
            .map_or(CellValue::Null, CellValue::DateTime),
        "TIMESTAMP" => row
            .try_get::<Option<DateTime<Utc>>, _>(idx)?
            .map_or(CellValue::Null, |dt| CellValue::DateTime(dt.naive_utc())),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(idx)?
            .map_or(CellValue::Null, |d| {
                CellValue::Text(d.format("%Y-%m-%d").to_string())
            }),
        _ => row
            .try_get::<Option<String>, _>(idx)?
            .map_or(CellValue::Null, CellValue::Text),
    };

    Ok(cell)
}
