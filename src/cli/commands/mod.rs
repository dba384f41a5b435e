//! Subcommand implementations.

pub mod delete;
pub mod log;
pub mod query;
pub mod today;
