//! Signer abstraction for transaction execution.
//!
//! Signing, wallet approval and network submission all live behind
//! [`Signer`]. Implementations may suspend for as long as the wallet or the
//! network takes; callers that give up simply drop the future.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transaction::Transaction;

/// An active wallet account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
}

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Outcome of a successful execution.
///
/// Only the digest is interpreted. Everything else a backend reports is kept
/// as raw JSON for callers that want it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Canonical transaction digest, if the backend reported one.
    pub digest: Option<String>,
    /// Untyped remainder of the backend response.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub raw: Value,
}

impl ExecutionResult {
    /// A result carrying only a digest.
    pub fn with_digest(digest: impl Into<String>) -> Self {
        Self {
            digest: Some(digest.into()),
            raw: Value::Null,
        }
    }

    /// A result with no digest.
    pub fn without_digest() -> Self {
        Self::default()
    }

    /// Interpret an arbitrary backend response.
    ///
    /// A top-level string `digest` field is taken as the digest; any other
    /// shape leaves it unset. The whole response is kept in `raw`.
    pub fn from_json(response: Value) -> Self {
        let digest = response
            .get("digest")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            digest,
            raw: response,
        }
    }

    /// The digest, if it is usable as a record identifier.
    ///
    /// Empty or all-whitespace digests are ignored; anything else is
    /// returned exactly as the backend reported it.
    pub fn canonical_id(&self) -> Option<&str> {
        self.digest
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

/// Async signing-and-execution capability.
///
/// Errors are opaque to the kernel and are handed back to the caller
/// unchanged.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Sign and execute `transaction`.
    async fn execute(&self, transaction: &Transaction) -> anyhow::Result<ExecutionResult>;
}

#[async_trait]
impl<S: Signer + ?Sized> Signer for Arc<S> {
    async fn execute(&self, transaction: &Transaction) -> anyhow::Result<ExecutionResult> {
        (**self).execute(transaction).await
    }
}

#[async_trait]
impl<S: Signer + ?Sized> Signer for Box<S> {
    async fn execute(&self, transaction: &Transaction) -> anyhow::Result<ExecutionResult> {
        (**self).execute(transaction).await
    }
}
