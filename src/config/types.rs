//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_OUT_DIR;
use crate::export::ExportFormat;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Export run configuration.
///
/// Doubles as the CLI surface (`clap` derive) and the argument to
/// [`run_export`](crate::run_export), so library callers can construct it
/// directly.
///
/// # Examples
///
/// ```no_run
/// use learning_export::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     out_dir: PathBuf::from("ml/data"),
///     since_days: Some(30),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "learning_export",
    about = "Exports learning-platform tables from MySQL to CSV/Parquet files",
    version
)]
pub struct Config {
    /// Output directory for exported files
    #[arg(long = "out-dir", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Formats to export
    #[arg(
        long = "formats",
        value_enum,
        num_args = 1..,
        default_values = ["csv", "parquet"]
    )]
    pub formats: Vec<ExportFormat>,

    /// Only export log-table rows newer than this many days
    #[arg(long = "since-days")]
    pub since_days: Option<i64>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            formats: vec![ExportFormat::Csv, ExportFormat::Parquet],
            since_days: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.out_dir, PathBuf::from("data"));
        assert_eq!(
            config.formats,
            vec![ExportFormat::Csv, ExportFormat::Parquet]
        );
        assert!(config.since_days.is_none());
    }
}
