//! Database path resolution for `metri_rust`.
//!
//! The database lives under the user data directory by default
//! (`~/.local/share/metri/metrics.db` on Linux) and can be overridden with
//! the `METRI_DB_PATH` environment variable or the global `--db` flag.

use std::path::PathBuf;

use crate::error::{MetriError, Result};

/// Environment variable that overrides the database path.
pub const DB_ENV_VAR: &str = "METRI_DB_PATH";

/// Default database location: `<user data dir>/metri/metrics.db`.
///
/// # Errors
///
/// Returns `Config` if the platform data directory cannot be determined.
pub fn default_db_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| MetriError::Config("cannot determine user data directory".to_string()))?;
    Ok(data_dir.join("metri").join("metrics.db"))
}

/// Resolve the database path from an optional CLI/env override.
///
/// # Errors
///
/// Returns `Config` if no override is given and the default path cannot
/// be determined.
pub fn resolve_db_path(overridden: Option<PathBuf>) -> Result<PathBuf> {
    match overridden {
        Some(path) => Ok(path),
        None => default_db_path(),
    }
}
