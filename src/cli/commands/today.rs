//! Today command implementation.

use std::path::Path;

use chrono::Local;

use crate::error::Result;
use crate::format::{OutputFormat, render_entries};
use crate::storage::MetricStore;

/// Execute the today command: all metrics logged on today's local date.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the query fails.
pub fn execute(db_path: &Path, format: OutputFormat) -> Result<()> {
    let store = MetricStore::open(db_path)?;
    let entries = store.fetch_by_date(Local::now().date_naive())?;

    println!("{}", render_entries(format, &entries)?);
    Ok(())
}
