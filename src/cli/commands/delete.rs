//! Delete command implementation.

use std::path::Path;

use crate::cli::DeleteArgs;
use crate::error::Result;
use crate::storage::MetricStore;

/// Execute the delete command.
///
/// Deleting a nonexistent id is not an error; it prints an informational
/// message and exits normally.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the delete fails.
pub fn execute(args: &DeleteArgs, db_path: &Path) -> Result<()> {
    let store = MetricStore::open(db_path)?;
    let deleted = store.delete(args.id)?;

    if deleted == 0 {
        println!("No entry found with id {}.", args.id);
    } else {
        println!("Deleted entry {}.", args.id);
    }
    Ok(())
}
