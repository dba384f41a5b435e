//! Data types for `metri_rust`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One recorded measurement.
///
/// Rows are created by the log command and destroyed only by explicit
/// delete-by-id; they are never updated. `metric_key` is free-form and
/// deliberately not constrained to an enumerated set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    /// Rowid assigned by `SQLite`; never reused.
    pub id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub metric_key: String,
    pub value: f64,
    /// Where the measurement came from; defaults to `"manual"`.
    pub source: Option<String>,
    /// Assigned by `SQLite` at insertion time; immutable.
    pub created_at: NaiveDateTime,
}

/// Per-key aggregate (mean, count) computed on demand over a date range.
///
/// Transient query result; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAverage {
    pub metric_key: String,
    pub avg_value: f64,
    pub count: i64,
}
