//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for environment-file discovery and loading.
#[derive(Error, Debug)]
pub enum EnvFileError {
    /// No `.env` file exists at any of the search paths.
    #[error("could not find a .env file (searched: {0})")]
    NotFound(String),

    /// The `.env` file exists but could not be read or parsed.
    #[error("failed to load environment file: {0}")]
    LoadError(#[from] dotenvy::Error),
}

/// Error types for database connection settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// `DB_PORT` is set but is not a valid TCP port number.
    #[error("invalid DB_PORT value {value:?}: {source}")]
    InvalidPort {
        /// The raw environment value that failed to parse.
        value: String,
        /// The underlying parse error.
        source: std::num::ParseIntError,
    },
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQL execution or connection error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}
