//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur while writing to or reading from a medium.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Record serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record amount has no JSON representation.
    #[error("{field} is not finite: {value}")]
    NonFiniteAmount { field: &'static str, value: f64 },

    /// The medium has no room for the value.
    #[error("quota exceeded writing {key}: {needed} bytes needed, limit {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// The medium is switched off.
    #[error("storage medium is disabled")]
    Disabled,

    /// A lock guarding the medium was poisoned.
    #[error("storage lock poisoned: {0}")]
    Poisoned(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
