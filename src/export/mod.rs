//! Export functionality.
//!
//! This module provides the fixed table queries, the in-memory rowset they
//! materialize into, and the CSV and Parquet serializers that write each
//! rowset to disk.

mod csv;
mod queries;
mod rowset;
mod types;

#[cfg(feature = "parquet")]
mod parquet;

pub use csv::write_csv;
pub use queries::{fetch_table, TableExport, TABLE_EXPORTS};
pub use rowset::{CellValue, Rowset};
pub use types::ExportFormat;

#[cfg(feature = "parquet")]
pub use parquet::write_parquet;
