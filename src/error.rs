//! Error types for `metri_rust`.

use thiserror::Error;

/// Primary error type for metri operations.
#[derive(Error, Debug)]
pub enum MetriError {
    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    // === Configuration Errors ===
    /// Configuration error (unresolvable database path, logging setup).
    #[error("Configuration error: {0}")]
    Config(String),

    // === Storage Errors ===
    /// `SQLite` failure.
    #[error("Storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetriError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `MetriError`.
pub type Result<T> = std::result::Result<T, MetriError>;
