//! File-backed storage tests: lazy directory creation and persistence
//! across reopen (complementing the in-memory unit tests).

use chrono::{NaiveDate, NaiveTime};
use metri_rust::storage::MetricStore;
use tempfile::TempDir;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[test]
fn open_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("deeper").join("metrics.db");

    let store = MetricStore::open(&db_path).unwrap();
    store
        .insert(day(2024, 1, 1), hms(6, 30, 0), "weight_kg", 70.5, Some("manual"))
        .unwrap();

    assert!(db_path.exists());
}

#[test]
fn entries_survive_reopen_with_fields_preserved() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("metrics.db");

    {
        let store = MetricStore::open(&db_path).unwrap();
        store
            .insert(day(2024, 1, 1), hms(6, 30, 0), "weight_kg", 70.5, Some("manual"))
            .unwrap();
    }

    let store = MetricStore::open(&db_path).unwrap();
    let entries = store.fetch_by_date(day(2024, 1, 1)).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].metric_key, "weight_kg");
    assert_eq!(entries[0].value, 70.5);
    assert_eq!(entries[0].source.as_deref(), Some("manual"));
}

#[test]
fn ids_are_not_reused_after_delete() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("metrics.db");
    let store = MetricStore::open(&db_path).unwrap();

    let first = store
        .insert(day(2024, 1, 1), hms(6, 0, 0), "weight_kg", 70.0, None)
        .unwrap();
    assert_eq!(store.delete(first).unwrap(), 1);

    let second = store
        .insert(day(2024, 1, 2), hms(6, 0, 0), "weight_kg", 70.2, None)
        .unwrap();
    assert!(second > first);
}

#[test]
fn average_view_spans_reopened_database() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("metrics.db");

    {
        let store = MetricStore::open(&db_path).unwrap();
        store
            .insert(day(2024, 1, 1), hms(7, 0, 0), "ftp_watts", 280.0, None)
            .unwrap();
    }
    {
        let store = MetricStore::open(&db_path).unwrap();
        store
            .insert(day(2024, 1, 8), hms(7, 0, 0), "ftp_watts", 300.0, None)
            .unwrap();
    }

    let store = MetricStore::open(&db_path).unwrap();
    let averages = store.fetch_average_by_key(None, None).unwrap();
    assert_eq!(averages.len(), 1);
    assert_eq!(averages[0].avg_value, 290.0);
    assert_eq!(averages[0].count, 2);
}
