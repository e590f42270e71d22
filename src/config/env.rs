//! Environment-file discovery and loading.
//!
//! The database credentials live in the backend's `.env` file. The search
//! order is fixed: `backend/.env`, `./.env`, `../backend/.env` -- first match
//! wins, and finding none is fatal before any query runs.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::constants::ENV_SEARCH_PATHS;
use crate::error_handling::EnvFileError;

/// Searches the fixed relative paths for an environment file.
///
/// Returns the first path that exists, or `None` if no candidate does.
/// Paths are resolved against the current working directory; use
/// [`find_env_file_in`] to search from an explicit base directory.
pub fn find_env_file() -> Option<PathBuf> {
    find_env_file_in(Path::new("."))
}

/// Searches for an environment file relative to `base`.
pub fn find_env_file_in(base: &Path) -> Option<PathBuf> {
    ENV_SEARCH_PATHS
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.is_file())
}

/// Finds and loads the environment file.
///
/// Variables already present in the process environment take precedence over
/// the file contents (dotenvy semantics).
///
/// # Errors
///
/// Returns [`EnvFileError::NotFound`] if no candidate path exists, or
/// [`EnvFileError::LoadError`] if the file cannot be read or parsed.
pub fn load_env_file() -> Result<PathBuf, EnvFileError> {
    let path = find_env_file()
        .ok_or_else(|| EnvFileError::NotFound(ENV_SEARCH_PATHS.join(", ")))?;
    dotenvy::from_path(&path)?;
    debug!("Loaded environment from {}", path.display());
    Ok(path)
}
