//! Application configuration.
//!
//! This module provides:
//! - Configuration constants (search paths, formats, defaults)
//! - CLI option types and parsing
//! - Environment-file discovery and loading

mod constants;
mod env;
mod types;

pub use constants::*;
pub use env::{find_env_file, find_env_file_in, load_env_file};
pub use types::{Config, LogFormat, LogLevel};
