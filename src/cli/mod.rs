//! Command-line interface for `metri_rust`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config;
use crate::error::Result;
use crate::format::OutputFormat;
use crate::logging;

/// `metri` - log and query health/fitness metrics.
#[derive(Parser, Debug)]
#[command(name = "metri")]
#[command(
    author,
    version,
    about = "Log and query health/fitness metrics (SQLite)",
    long_about = None,
    after_help = "Local-only: a single SQLite file, no daemons, no network."
)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Database file path
    #[arg(long, global = true, env = config::DB_ENV_VAR, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a metric value
    Log(LogArgs),

    /// Delete a metric by id
    Delete(DeleteArgs),

    /// Show metrics logged today
    Today,

    /// Query historical metrics
    Query(QueryArgs),
}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// Metric key, e.g. ftp_watts
    #[arg(long)]
    pub key: String,

    /// Metric value
    #[arg(long, allow_hyphen_values = true)]
    pub value: f64,

    /// Source of data
    #[arg(long, default_value = "manual")]
    pub source: String,

    /// Date in YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Time in HH:MM:SS (default: now)
    #[arg(long)]
    pub time: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Metric id to delete
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Range window like 7d (last N days, including today)
    #[arg(long, value_name = "Nd")]
    pub last: Option<String>,

    /// Return average by metric_key instead of raw rows
    #[arg(long)]
    pub avg: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;

    let db_path = config::resolve_db_path(cli.db)?;

    match cli.command {
        Commands::Log(args) => commands::log::execute(&args, &db_path, cli.format),
        Commands::Delete(args) => commands::delete::execute(&args, &db_path),
        Commands::Today => commands::today::execute(&db_path, cli.format),
        Commands::Query(args) => commands::query::execute(&args, &db_path, cli.format),
    }
}
