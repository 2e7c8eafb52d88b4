//! The Kernel: one creation context shared by both creators.
//!
//! A kernel owns the store, the identifier generator and the clock for one
//! execution context. Creators handed out by the kernel share all three, so
//! identifiers stay unique and timestamps stay monotonic across variants.

use std::sync::Arc;

use cover_kernel_core::{
    validate_amounts, Clock, IdGenerator, InsuranceRecord, MonotonicClock, SystemClock,
};
use cover_kernel_store::{PolicyIdKey, Slot, SlotStore, StorageMedium};
use tracing::{debug, warn};

use crate::chain::ChainCreator;
use crate::config::CreatorConfig;
use crate::error::{CoverError, Result};
use crate::local::LocalCreator;

/// State shared by a kernel and its creators.
pub(crate) struct Shared<M> {
    pub(crate) store: SlotStore<M>,
    pub(crate) ids: IdGenerator,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) config: CreatorConfig,
}

impl<M: StorageMedium> Shared<M> {
    /// Reject amounts when validation is switched on.
    pub(crate) fn check_amounts(&self, coverage_amount: f64, premium_amount: f64) -> Result<()> {
        if self.config.validate_amounts {
            validate_amounts(coverage_amount, premium_amount)?;
        }
        Ok(())
    }

    pub(crate) fn policy_key(&self, slot: Slot) -> PolicyIdKey {
        self.config.policy_id_scope.key_for(slot)
    }

    /// Write `record` to `slot` and its id to the slot's policy-id key.
    ///
    /// On failure the record travels inside the error.
    pub(crate) fn persist(&self, slot: Slot, record: InsuranceRecord) -> Result<InsuranceRecord> {
        let key = self.policy_key(slot);
        let written = self
            .store
            .put(slot, &record)
            .and_then(|()| self.store.put_policy_id(key, &record.id));

        match written {
            Ok(()) => {
                debug!(%slot, id = %record.id, policy_key = key.key(), "record persisted");
                Ok(record)
            }
            Err(source) => {
                warn!(%slot, id = %record.id, error = %source, "record not persisted");
                Err(CoverError::Persistence {
                    record: Box::new(record),
                    source,
                })
            }
        }
    }
}

/// The main Kernel struct.
///
/// Provides:
/// - A [`LocalCreator`] for simulated records
/// - A [`ChainCreator`] for signer-backed records
/// - Direct access to the underlying [`SlotStore`]
pub struct CoverKernel<M> {
    shared: Arc<Shared<M>>,
}

impl<M> Clone for CoverKernel<M> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<M: StorageMedium> CoverKernel<M> {
    /// Create a kernel over `medium` with the system clock and a fresh
    /// identifier generator.
    pub fn new(medium: M, config: CreatorConfig) -> Self {
        Self::from_parts(medium, SystemClock, IdGenerator::new(), config)
    }

    /// Create a kernel from explicit parts.
    ///
    /// `clock` is wrapped so that readings never go backwards.
    pub fn from_parts(
        medium: M,
        clock: impl Clock + 'static,
        ids: IdGenerator,
        config: CreatorConfig,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                store: SlotStore::new(medium),
                ids,
                clock: Box::new(MonotonicClock::new(clock)),
                config,
            }),
        }
    }

    /// Creator for locally simulated records.
    pub fn local(&self) -> LocalCreator<M> {
        LocalCreator::new(Arc::clone(&self.shared))
    }

    /// Creator for chain-backed records.
    pub fn chain(&self) -> ChainCreator<M> {
        ChainCreator::new(Arc::clone(&self.shared))
    }

    /// Get the store reference.
    pub fn store(&self) -> &SlotStore<M> {
        &self.shared.store
    }

    pub fn config(&self) -> &CreatorConfig {
        &self.shared.config
    }
}
