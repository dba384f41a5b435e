//! Query command implementation.
//!
//! `--last Nd` bounds the range to a trailing window of N days inclusive of
//! today; `--avg` switches to the per-key average/count view.

use std::path::Path;

use chrono::Local;

use crate::cli::QueryArgs;
use crate::error::Result;
use crate::format::{OutputFormat, render_averages, render_entries};
use crate::storage::MetricStore;
use crate::validation;

/// Execute the query command.
///
/// # Errors
///
/// Returns an error if the `--last` window is malformed, the database
/// cannot be opened, or the query fails.
pub fn execute(args: &QueryArgs, db_path: &Path, format: OutputFormat) -> Result<()> {
    // Validate the window before opening storage.
    let start = args
        .last
        .as_deref()
        .map(|raw| validation::parse_last_window(raw, Local::now().date_naive()))
        .transpose()?;

    let store = MetricStore::open(db_path)?;
    if args.avg {
        let averages = store.fetch_average_by_key(start, None)?;
        println!("{}", render_averages(format, &averages)?);
    } else {
        let entries = store.fetch_range(start, None)?;
        println!("{}", render_entries(format, &entries)?);
    }
    Ok(())
}
