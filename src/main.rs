//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `learning_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use learning_export::initialization::init_logger_with;
use learning_export::{run_export, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_export(config).await {
        Ok(report) => {
            let total_rows = report.total_rows();
            println!(
                "✅ Exported {} table{} ({} row{}) in {:.1}s",
                report.tables.len(),
                if report.tables.len() == 1 { "" } else { "s" },
                total_rows,
                if total_rows == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Files are under {}", report.out_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("learning_export error: {:#}", e);
            process::exit(1);
        }
    }
}
