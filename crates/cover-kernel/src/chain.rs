//! Chain-backed record creation.
//!
//! The record's fields are attached as a JSON blob to a generic
//! object-creation call rather than passed to a purpose-built contract.
//! Execution is delegated to the caller's [`Signer`].

use std::sync::Arc;

use cover_kernel_chain::{Account, PureArg, Signer, Transaction, TransactionBuilder};
use cover_kernel_core::{InsuranceRecord, PolicyStatus};
use cover_kernel_store::{Slot, StorageMedium};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::TimestampPolicy;
use crate::error::{CoverError, Result};
use crate::kernel::Shared;

/// Metadata attached to the created object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub risk_type: i64,
    pub status: i64,
    pub created_at: i64,
    /// Address of the submitting account.
    pub owner: String,
}

impl ObjectMetadata {
    /// Parse the metadata carried by the first call of `transaction`.
    pub fn from_transaction(transaction: &Transaction) -> Option<Self> {
        let blob = transaction.commands.first()?.arguments.first()?.as_str()?;
        serde_json::from_str(blob).ok()
    }
}

/// Builds records through an injected signer and caches them in the
/// `simple` slot.
pub struct ChainCreator<M> {
    shared: Arc<Shared<M>>,
}

impl<M> Clone for ChainCreator<M> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<M: StorageMedium> ChainCreator<M> {
    pub(crate) fn new(shared: Arc<Shared<M>>) -> Self {
        Self { shared }
    }

    /// Build the creation transaction for `owner`.
    pub fn build_transaction(&self, metadata: &ObjectMetadata) -> Result<Transaction> {
        let blob = serde_json::to_string(metadata).map_err(|e| CoverError::Execution(e.into()))?;

        let mut builder = TransactionBuilder::new().sender(metadata.owner.clone());
        builder
            .move_call(self.shared.config.create_target.as_str(), vec![PureArg::String(blob)])
            .map_err(|e| CoverError::Execution(e.into()))?;
        builder.build().map_err(|e| CoverError::Execution(e.into()))
    }

    /// Create a record through `signer` on behalf of `account`.
    ///
    /// Fails with [`CoverError::NotConnected`] before doing anything when no
    /// account is given. Signer errors come back as
    /// [`CoverError::Execution`] unchanged and nothing is persisted.
    pub async fn create<S>(
        &self,
        coverage_amount: f64,
        premium_amount: f64,
        risk_type: i64,
        signer: &S,
        account: Option<&Account>,
    ) -> Result<InsuranceRecord>
    where
        S: Signer + ?Sized,
    {
        let account = account.ok_or(CoverError::NotConnected)?;
        let shared = &self.shared;
        shared.check_amounts(coverage_amount, premium_amount)?;

        let metadata = ObjectMetadata {
            coverage_amount,
            premium_amount,
            risk_type,
            status: PolicyStatus::Active.code(),
            created_at: shared.clock.now_millis(),
            owner: account.address.clone(),
        };
        let transaction = self.build_transaction(&metadata)?;
        debug!(owner = %account.address, target = %shared.config.create_target, "submitting transaction");

        let result = signer.execute(&transaction).await.map_err(|e| {
            warn!(owner = %account.address, error = %e, "transaction execution failed");
            CoverError::Execution(e)
        })?;

        let created_at = match shared.config.timestamp_policy {
            TimestampPolicy::AtSubmission => metadata.created_at,
            TimestampPolicy::AtConfirmation => shared.clock.now_millis(),
        };
        let id = match result.canonical_id() {
            Some(digest) => digest.to_string(),
            None => {
                let id = shared.ids.generate(&shared.config.object_tag, created_at);
                debug!(%id, "execution returned no digest, using generated id");
                id
            }
        };

        let record = InsuranceRecord {
            id,
            coverage_amount,
            premium_amount,
            risk_type,
            status: metadata.status,
            created_at,
        };
        let record = shared.persist(Slot::Simple, record)?;
        info!(id = %record.id, owner = %account.address, "chain-backed record created");
        Ok(record)
    }

    /// Cached records: zero or one.
    pub fn insurance_objects(&self) -> Vec<InsuranceRecord> {
        self.shared.store.list(Slot::Simple)
    }

    /// Identifier under this creator's policy-id key.
    pub fn policy_id(&self) -> Option<String> {
        self.shared.store.policy_id(self.shared.policy_key(Slot::Simple))
    }

    /// Drop the cached record. The policy id is left as is.
    pub fn clear(&self) -> cover_kernel_store::Result<()> {
        self.shared.store.clear(Slot::Simple)
    }
}
