//! `metri_rust` - Personal health/fitness metric tracker library
//!
//! This crate provides the core functionality for the `metri` CLI tool,
//! a one-shot utility for logging and querying timestamped numeric
//! measurements (weight, FTP watts, resting HR, ...) in a local `SQLite`
//! database.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (`MetricEntry`, `MetricAverage`)
//! - [`storage`] - `SQLite` database layer
//! - [`config`] - Database path resolution
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (table, JSON)
//! - [`logging`] - Tracing subscriber setup
//! - [`validation`] - Input validation (dates, times, query windows)

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod storage;
pub mod validation;

pub use error::{MetriError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> Result<()> {
    cli::run()
}
