//! Logging initialization for `metri_rust`.
//!
//! Diagnostics go to stderr via `tracing` so they never mix with the
//! table/JSON output on stdout. The level comes from the global `-v`/`-q`
//! flags; a `METRI_LOG` env filter takes precedence when set.

use tracing_subscriber::EnvFilter;

use crate::error::{MetriError, Result};

/// Env filter variable honored over the CLI flags.
pub const LOG_ENV_VAR: &str = "METRI_LOG";

/// Initialize the global tracing subscriber.
///
/// Levels: `-q` = error, default = warn, `-v` = info, `-vv` = debug,
/// `-vvv` = trace.
///
/// # Errors
///
/// Returns `Config` if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| MetriError::Config(format!("failed to initialize logging: {e}")))
}
