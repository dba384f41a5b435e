//! Log command implementation.
//!
//! Date and time default to the current local moment. Validation happens
//! before the database is opened so malformed input never touches storage.

use std::path::Path;

use chrono::{Local, Timelike};

use crate::cli::LogArgs;
use crate::error::{MetriError, Result};
use crate::format::{OutputFormat, render_entries};
use crate::storage::MetricStore;
use crate::validation;

/// Execute the log command.
///
/// # Errors
///
/// Returns an error if validation fails, the database cannot be opened, or
/// the insert fails.
pub fn execute(args: &LogArgs, db_path: &Path, format: OutputFormat) -> Result<()> {
    let now = Local::now();
    let date = match &args.date {
        Some(raw) => validation::parse_date(raw)?,
        None => now.date_naive(),
    };
    let time = match &args.time {
        Some(raw) => validation::parse_time(raw)?,
        // Stored times carry seconds precision only.
        None => now.time().with_nanosecond(0).unwrap_or_else(|| now.time()),
    };

    let store = MetricStore::open(db_path)?;
    let id = store.insert(date, time, &args.key, args.value, Some(&args.source))?;
    let entry = store
        .get(id)?
        .ok_or(MetriError::Sqlite(rusqlite::Error::QueryReturnedNoRows))?;

    println!("{}", render_entries(format, &[entry])?);
    Ok(())
}
