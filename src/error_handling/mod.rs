//! Error types for the export tool.
//!
//! One enum per concern, stitched into the fatal `anyhow` path by the run
//! orchestration. Parquet write failures are handled where they occur and
//! never surface through these types.

mod types;

pub use types::{DatabaseError, EnvFileError, InitializationError, SettingsError};
