//! Error types for the chain module.

use thiserror::Error;

/// Errors raised while building transaction payloads.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Call target is not `<address>::<module>::<function>`.
    #[error("invalid call target: {0}")]
    InvalidTarget(String),

    /// A pure argument exceeds the size limit.
    #[error("argument {index} is {size} bytes, limit is {limit}")]
    ArgumentTooLarge {
        index: usize,
        size: usize,
        limit: usize,
    },

    /// Too many commands in one transaction.
    #[error("transaction has {0} commands, limit is {}", crate::transaction::limits::MAX_COMMANDS)]
    TooManyCommands(usize),

    /// Transaction has no commands.
    #[error("transaction has no commands")]
    EmptyTransaction,

    /// JSON encoding error.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
