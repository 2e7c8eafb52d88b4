//! Error types for the Cover Kernel Core.

use thiserror::Error;

/// Core errors raised while building identifiers and records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid identifier tag {0:?}: must be non-empty ASCII alphanumeric")]
    InvalidTag(String),

    #[error("invalid amount for {field}: {value}")]
    InvalidAmount { field: &'static str, value: String },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
