//! Error types for record creation.

use cover_kernel_core::{CoreError, InsuranceRecord};
use cover_kernel_store::StoreError;
use thiserror::Error;

/// Errors that can occur while creating a record.
#[derive(Debug, Error)]
pub enum CoverError {
    /// Chain-backed creation without an active account.
    #[error("no wallet account connected")]
    NotConnected,

    /// Payload construction or signer failure, passed through unchanged.
    #[error(transparent)]
    Execution(anyhow::Error),

    /// The record was built but could not be written to storage.
    ///
    /// The record is carried along so callers can still use it.
    #[error("record {} was built but not persisted: {source}", .record.id)]
    Persistence {
        record: Box<InsuranceRecord>,
        #[source]
        source: StoreError,
    },

    /// Amount rejected by validation.
    #[error("invalid amount for {field}: {value}")]
    InvalidAmount { field: &'static str, value: String },

    /// Other core error.
    #[error("core error: {0}")]
    Core(CoreError),
}

impl CoverError {
    /// The record a failed persistence still produced.
    pub fn record(&self) -> Option<&InsuranceRecord> {
        match self {
            CoverError::Persistence { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Take the record a failed persistence still produced.
    pub fn into_record(self) -> Option<InsuranceRecord> {
        match self {
            CoverError::Persistence { record, .. } => Some(*record),
            _ => None,
        }
    }
}

impl From<CoreError> for CoverError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidAmount { field, value } => CoverError::InvalidAmount { field, value },
            other => CoverError::Core(other),
        }
    }
}

/// Result type for creator operations.
pub type Result<T> = std::result::Result<T, CoverError>;
