//! learning_export library: dumps learning-platform tables to flat files.
//!
//! Connects to the platform's MySQL database, runs a fixed set of read-only
//! queries (users, profiles, and four activity-log tables), and writes each
//! result to CSV and/or Parquet files for offline analysis.
//!
//! # Example
//!
//! ```no_run
//! use learning_export::{run_export, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     since_days: Some(30),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("Exported {} rows", report.total_rows());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime, and a `.env` file with the
//! database credentials at one of the documented search paths.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{DatabaseError, EnvFileError, InitializationError, SettingsError};
pub use export::ExportFormat;
pub use run::{run_export, ExportReport, TableReport};

// Internal run module (contains the export orchestration)
mod run {
    use std::fs;
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use chrono::{Duration, Utc};
    use log::{info, warn};

    use crate::config::{load_env_file, Config, TIMESTAMP_FORMAT};
    #[cfg(feature = "parquet")]
    use crate::export::write_parquet;
    use crate::export::{fetch_table, write_csv, ExportFormat, TABLE_EXPORTS};
    use crate::storage::{init_db_pool, DbSettings};

    /// Result of exporting a single table.
    #[derive(Debug, Clone)]
    pub struct TableReport {
        /// Source table / output base name
        pub table: String,
        /// Number of rows materialized (and written to each file)
        pub rows: usize,
        /// Files actually written for this table
        pub files: Vec<PathBuf>,
    }

    /// Results of a completed export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Per-table results, in export order
        pub tables: Vec<TableReport>,
        /// Directory the files were written to
        pub out_dir: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl ExportReport {
        /// Total rows across all exported tables.
        pub fn total_rows(&self) -> usize {
            self.tables.iter().map(|t| t.rows).sum()
        }
    }

    /// Runs a full export with the provided configuration.
    ///
    /// Loads the environment file (fatal if none is found), opens a single
    /// database connection, exports the six tables in their fixed order,
    /// and returns a report with row counts and written files.
    ///
    /// CSV writes and every database interaction are fatal on error; a
    /// Parquet failure is logged as a warning and the run continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment file is missing, the settings
    /// are invalid, the connection cannot be established, any query fails,
    /// or the output directory or a CSV file cannot be written.
    pub async fn run_export(config: Config) -> Result<ExportReport> {
        let env_path = load_env_file().context("Could not load backend .env")?;
        info!("Loaded environment from {}", env_path.display());

        let settings = DbSettings::from_env().context("Invalid database settings")?;
        let pool = init_db_pool(&settings)
            .await
            .context("Failed to initialize database pool")?;

        fs::create_dir_all(&config.out_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                config.out_dir.display()
            )
        })?;

        let cutoff = config
            .since_days
            .map(|days| Utc::now().naive_utc() - Duration::days(days));
        if let Some(cutoff) = cutoff {
            info!(
                "Restricting log tables to rows created since {}",
                cutoff.format(TIMESTAMP_FORMAT)
            );
        }

        let start = Instant::now();
        let mut tables = Vec::with_capacity(TABLE_EXPORTS.len());

        for spec in TABLE_EXPORTS {
            info!("Exporting {} ...", spec.name);
            let rowset = fetch_table(&pool, spec, cutoff)
                .await
                .with_context(|| format!("Query failed for table {}", spec.name))?;

            let mut files = Vec::new();
            for format in &config.formats {
                let path = config
                    .out_dir
                    .join(format!("{}.{}", spec.name, format.extension()));
                match format {
                    ExportFormat::Csv => {
                        write_csv(&rowset, &path)
                            .with_context(|| format!("CSV export failed for {}", spec.name))?;
                        files.push(path);
                    }
                    ExportFormat::Parquet => {
                        #[cfg(feature = "parquet")]
                        match write_parquet(&rowset, &path) {
                            Ok(()) => files.push(path),
                            Err(e) => warn!(
                                "Parquet export for {} failed ({e:#}); continuing without it",
                                spec.name
                            ),
                        }
                        #[cfg(not(feature = "parquet"))]
                        warn!(
                            "Parquet support is not compiled in; skipping {}",
                            path.display()
                        );
                    }
                }
            }

            let written: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
            info!(
                " -> exported {} rows to: [{}]",
                rowset.row_count(),
                written.join(", ")
            );

            tables.push(TableReport {
                table: spec.name.to_string(),
                rows: rowset.row_count(),
                files,
            });
        }

        Ok(ExportReport {
            tables,
            out_dir: config.out_dir,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
