//! Parquet export.
//!
//! Converts a rowset into a typed Arrow record batch and writes it with
//! Zstd compression, so downstream tools (DuckDB, Polars, Spark) read real
//! column types instead of strings. Compiled only with the `parquet`
//! feature; the run loop treats any failure here as a per-table warning.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    ArrayRef, Float64Array, Int64Array, StringArray, TimestampMicrosecondArray, UInt64Array,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::WriterProperties;

use crate::export::rowset::{CellValue, Rowset};

/// Writes a rowset to a Parquet file.
///
/// An existing file at `path` is truncated.
///
/// # Errors
///
/// Returns an error if the batch conversion fails or the file cannot be
/// written.
pub fn write_parquet(rowset: &Rowset, path: &Path) -> Result<()> {
    let batch = to_record_batch(rowset)?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::ZSTD(ZstdLevel::default()))
        .build();

    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .context("Failed to create Parquet writer")?;
    writer.write(&batch).context("Failed to write record batch")?;
    writer.close().context("Failed to finalize Parquet file")?;

    Ok(())
}

/// Converts a rowset into a single Arrow record batch.
fn to_record_batch(rowset: &Rowset) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(rowset.columns.len());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(rowset.columns.len());

    for (idx, column) in rowset.columns.iter().enumerate() {
        let data_type = infer_column_type(rowset, idx);
        let array = build_array(rowset, idx, &data_type)
            .with_context(|| format!("Failed to convert column {column}"))?;
        fields.push(Field::new(column.as_str(), data_type, true));
        arrays.push(array);
    }

    let schema = Arc::new(Schema::new(fields));
    RecordBatch::try_new(schema, arrays).context("Failed to assemble record batch")
}

/// Picks the Arrow type for a column from its first non-null cell.
///
/// An all-null (or empty) column falls back to Utf8.
fn infer_column_type(rowset: &Rowset, idx: usize) -> DataType {
    for row in &rowset.rows {
        match &row[idx] {
            CellValue::Null => continue,
            CellValue::Int(_) => return DataType::Int64,
            CellValue::UInt(_) => return DataType::UInt64,
            CellValue::Float(_) => return DataType::Float64,
            CellValue::Text(_) => return DataType::Utf8,
            CellValue::DateTime(_) => {
                return DataType::Timestamp(TimeUnit::Microsecond, None)
            }
        }
    }
    DataType::Utf8
}

/// Collects one column into `Option<T>` values, with NULL handled centrally.
fn collect_column<T, F>(rowset: &Rowset, idx: usize, convert: F) -> Result<Vec<Option<T>>>
where
    F: Fn(&CellValue) -> Result<T>,
{
    rowset
        .rows
        .iter()
        .map(|row| match &row[idx] {
            CellValue::Null => Ok(None),
            cell => convert(cell).map(Some),
        })
        .collect()
}

/// Builds the Arrow array for one column.
///
/// MySQL fixes each column's type, so a cell that disagrees with the
/// inferred type is an error rather than a coercion point; the integer and
/// float conversions accept the widenings that cannot lose a value.
fn build_array(rowset: &Rowset, idx: usize, data_type: &DataType) -> Result<ArrayRef> {
    let array: ArrayRef = match data_type {
        DataType::Int64 => {
            let values = collect_column(rowset, idx, |cell| match cell {
                CellValue::Int(v) => Ok(*v),
                CellValue::UInt(v) => Ok(*v as i64),
                other => bail!("unexpected {other:?} in integer column"),
            })?;
            Arc::new(Int64Array::from(values))
        }
        DataType::UInt64 => {
            let values = collect_column(rowset, idx, |cell| match cell {
                CellValue::UInt(v) => Ok(*v),
                other => bail!("unexpected {other:?} in unsigned column"),
            })?;
            Arc::new(UInt64Array::from(values))
        }
        DataType::Float64 => {
            let values = collect_column(rowset, idx, |cell| match cell {
                CellValue::Float(v) => Ok(*v),
                CellValue::Int(v) => Ok(*v as f64),
                CellValue::UInt(v) => Ok(*v as f64),
                other => bail!("unexpected {other:?} in float column"),
            })?;
            Arc::new(Float64Array::from(values))
        }
        DataType::Timestamp(TimeUnit::Microsecond, None) => {
            let values = collect_column(rowset, idx, |cell| match cell {
                CellValue::DateTime(dt) => Ok(dt.and_utc().timestamp_micros()),
                other => bail!("unexpected {other:?} in timestamp column"),
            })?;
            Arc::new(TimestampMicrosecondArray::from(values))
        }
        _ => {
            let values = collect_column(rowset, idx, |cell| Ok(cell.render()))?;
            Arc::new(StringArray::from(values))
        }
    };

    Ok(array)
}
