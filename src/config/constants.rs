//! Configuration constants.

/// Relative paths searched for the environment file, in priority order.
///
/// The backend service keeps its `.env` under `backend/`, so that location is
/// tried first, then the working directory itself, then the backend directory
/// of a sibling checkout. First match wins.
pub const ENV_SEARCH_PATHS: &[&str] = &["backend/.env", ".env", "../backend/.env"];

/// Default output directory, resolved against the working directory.
pub const DEFAULT_OUT_DIR: &str = "data";

/// Render format for datetime cells and the recency cutoff in log output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
