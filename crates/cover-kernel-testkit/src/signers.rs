//! Signer doubles.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use cover_kernel_chain::{ExecutionResult, Signer, Transaction};

/// Answers each call with the next scripted response and records every
/// transaction it was given.
///
/// Once the script runs out, calls fail.
#[derive(Default)]
pub struct ScriptedSigner {
    script: Mutex<VecDeque<anyhow::Result<ExecutionResult>>>,
    seen: Mutex<Vec<Transaction>>,
}

impl ScriptedSigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn then_ok(self, result: ExecutionResult) -> Self {
        self.push(Ok(result));
        self
    }

    /// Queue a failure.
    pub fn then_err(self, error: anyhow::Error) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, response: anyhow::Result<ExecutionResult>) {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    /// Transactions received so far.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl Signer for ScriptedSigner {
    async fn execute(&self, transaction: &Transaction) -> anyhow::Result<ExecutionResult> {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(transaction.clone());
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("signer script exhausted")))
    }
}

/// Reports the hex Blake3 digest of the transaction's JSON encoding, the
/// way a ledger reports a content digest.
#[derive(Debug, Default)]
pub struct DigestSigner;

impl DigestSigner {
    /// The digest this signer reports for `transaction`.
    pub fn digest_of(transaction: &Transaction) -> anyhow::Result<String> {
        let json = transaction.to_json()?;
        Ok(hex::encode(blake3::hash(json.as_bytes()).as_bytes()))
    }
}

#[async_trait]
impl Signer for DigestSigner {
    async fn execute(&self, transaction: &Transaction) -> anyhow::Result<ExecutionResult> {
        Ok(ExecutionResult::with_digest(Self::digest_of(transaction)?))
    }
}

/// Error returned by [`FailingSigner`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("signer rejected: {0}")]
pub struct SignerRejected(pub String);

/// Fails every call with [`SignerRejected`].
pub struct FailingSigner {
    reason: String,
    calls: AtomicUsize,
}

impl FailingSigner {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Signer for FailingSigner {
    async fn execute(&self, _transaction: &Transaction) -> anyhow::Result<ExecutionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SignerRejected(self.reason.clone()).into())
    }
}

/// Never completes, like a wallet prompt nobody answers.
#[derive(Debug, Default)]
pub struct PendingSigner;

#[async_trait]
impl Signer for PendingSigner {
    async fn execute(&self, _transaction: &Transaction) -> anyhow::Result<ExecutionResult> {
        std::future::pending().await
    }
}
