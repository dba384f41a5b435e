//! `SQLite` storage layer for `metri_rust`.
//!
//! A single `metrics` table plus secondary indexes on `date` and
//! `metric_key`. Dates and times are stored as ISO text, so lexicographic
//! ordering matches chronological ordering. Every operation is one
//! autocommit statement; the store assumes at most one writer.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use tracing::debug;

use crate::error::Result;
use crate::model::{MetricAverage, MetricEntry};

const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS metrics (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    metric_key TEXT NOT NULL,
    value REAL NOT NULL,
    source TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_metrics_date ON metrics(date);
CREATE INDEX IF NOT EXISTS idx_metrics_key ON metrics(metric_key);
";

const ENTRY_COLUMNS: &str = "id, date, time, metric_key, value, source, created_at";

/// Handle over the metrics database.
pub struct MetricStore {
    conn: Connection,
}

impl MetricStore {
    /// Open (creating if absent) the database at `path` and ensure the
    /// schema exists. The parent directory is created lazily.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory cannot be created, or `Sqlite` if the
    /// file cannot be opened or the schema cannot be applied.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        debug!(path = %path.display(), "opened metrics database");
        Ok(store)
    }

    /// Open an in-memory database (tests).
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` if the schema cannot be applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Append one row and return the assigned id.
    ///
    /// No uniqueness constraint across (date, time, key); duplicates are
    /// allowed.
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on insert failure.
    pub fn insert(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        metric_key: &str,
        value: f64,
        source: Option<&str>,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO metrics (date, time, metric_key, value, source)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![date, time, metric_key, value, source],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, metric_key, "inserted metric");
        Ok(id)
    }

    /// Remove the row with `id`; returns the count of rows removed (0 or 1).
    /// A missing id is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on delete failure.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM metrics WHERE id = ?1", params![id])?;
        Ok(deleted)
    }

    /// Fetch a single entry by id.
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on query failure.
    pub fn get(&self, id: i64) -> Result<Option<MetricEntry>> {
        let entry = self
            .conn
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM metrics WHERE id = ?1"),
                params![id],
                row_to_entry,
            )
            .optional()?;
        Ok(entry)
    }

    /// All entries for an exact calendar date, ordered by time then id.
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on query failure.
    pub fn fetch_by_date(&self, date: NaiveDate) -> Result<Vec<MetricEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS}
             FROM metrics
             WHERE date = ?1
             ORDER BY time ASC, id ASC"
        ))?;
        let entries = stmt
            .query_map(params![date], row_to_entry)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Entries with date within the inclusive bounds; either bound may be
    /// omitted for an unbounded direction. Ordered by (date, time, id).
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on query failure.
    pub fn fetch_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<MetricEntry>> {
        let (where_sql, bounds) = range_filter(start, end);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS}
             FROM metrics
             {where_sql}
             ORDER BY date ASC, time ASC, id ASC"
        ))?;
        let entries = stmt
            .query_map(params_from_iter(bounds), row_to_entry)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Per distinct `metric_key` in the filtered range, the arithmetic mean
    /// of `value` and the count of contributing rows, keys ascending.
    ///
    /// # Errors
    ///
    /// Returns `Sqlite` on query failure.
    pub fn fetch_average_by_key(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<MetricAverage>> {
        let (where_sql, bounds) = range_filter(start, end);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT metric_key, AVG(value) AS avg_value, COUNT(*) AS count
             FROM metrics
             {where_sql}
             GROUP BY metric_key
             ORDER BY metric_key ASC"
        ))?;
        let averages = stmt
            .query_map(params_from_iter(bounds), |row| {
                Ok(MetricAverage {
                    metric_key: row.get(0)?,
                    avg_value: row.get(1)?,
                    count: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(averages)
    }
}

/// Build the WHERE clause for an optional inclusive date range.
fn range_filter(start: Option<NaiveDate>, end: Option<NaiveDate>) -> (String, Vec<NaiveDate>) {
    let mut clauses = Vec::new();
    let mut bounds = Vec::new();
    if let Some(start) = start {
        clauses.push("date >= ?");
        bounds.push(start);
    }
    if let Some(end) = end {
        clauses.push("date <= ?");
        bounds.push(end);
    }
    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    };
    (where_sql, bounds)
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<MetricEntry> {
    Ok(MetricEntry {
        id: row.get(0)?,
        date: row.get(1)?,
        time: row.get(2)?,
        metric_key: row.get(3)?,
        value: row.get(4)?,
        source: row.get(5)?,
        created_at: row.get(6)?,
    })
}
