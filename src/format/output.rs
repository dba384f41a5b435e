//! Rendering of query results in the selected output format.

use clap::ValueEnum;

use crate::error::Result;
use crate::format::table::render_table;
use crate::model::{MetricAverage, MetricEntry};

/// Output format selected by the global `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain aligned table (default).
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// Fixed message for an empty result set, printed in both formats.
pub const NO_ENTRIES: &str = "No entries.";

/// Render metric entries in the selected format.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn render_entries(format: OutputFormat, entries: &[MetricEntry]) -> Result<String> {
    if entries.is_empty() {
        return Ok(NO_ENTRIES.to_string());
    }
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = entries
                .iter()
                .map(|entry| {
                    vec![
                        entry.id.to_string(),
                        entry.date.to_string(),
                        entry.time.to_string(),
                        entry.metric_key.clone(),
                        entry.value.to_string(),
                        entry.source.clone().unwrap_or_default(),
                        entry.created_at.to_string(),
                    ]
                })
                .collect();
            Ok(render_table(
                &["id", "date", "time", "metric_key", "value", "source", "created_at"],
                &rows,
            ))
        }
    }
}

/// Render per-key averages in the selected format.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn render_averages(format: OutputFormat, averages: &[MetricAverage]) -> Result<String> {
    if averages.is_empty() {
        return Ok(NO_ENTRIES.to_string());
    }
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(averages)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = averages
                .iter()
                .map(|avg| {
                    vec![
                        avg.metric_key.clone(),
                        avg.avg_value.to_string(),
                        avg.count.to_string(),
                    ]
                })
                .collect();
            Ok(render_table(&["metric_key", "avg_value", "count"], &rows))
        }
    }
}
