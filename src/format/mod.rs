//! Output formatting for `metri_rust`.
//!
//! Two modes: a plain aligned table (headers taken from field names) and
//! pretty-printed JSON (array of objects). An empty result set prints a
//! fixed message in both modes rather than an empty table/array.

mod output;
mod table;

pub use output::{NO_ENTRIES, OutputFormat, render_averages, render_entries};
pub use table::render_table;
