//! CSV export.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::export::rowset::Rowset;

/// Writes a rowset to a CSV file.
///
/// The first record is the header of column names, followed by one record
/// per row with NULLs rendered as empty fields. An existing file at `path`
/// is truncated.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a record fails to
/// write.
pub fn write_csv(rowset: &Rowset, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(&rowset.columns)?;
    for row in &rowset.rows {
        writer.write_record(row.iter().map(|cell| cell.render()))?;
    }

    writer.flush()?;
    Ok(())
}
