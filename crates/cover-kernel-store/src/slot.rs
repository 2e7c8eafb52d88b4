//! Typed single-record slots over a [`StorageMedium`].

use std::fmt;

use cover_kernel_core::InsuranceRecord;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::traits::StorageMedium;

/// A record slot. Each slot holds at most one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Locally simulated records.
    Demo,
    /// Chain-backed records.
    Simple,
}

impl Slot {
    /// Storage key of this slot.
    pub const fn key(self) -> &'static str {
        match self {
            Slot::Demo => "demoInsuranceObject",
            Slot::Simple => "simpleInsuranceObject",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Slot::Demo => "demo",
            Slot::Simple => "simple",
        })
    }
}

/// Key holding the identifier of the most recently created record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyIdKey {
    /// One key written by every creator.
    Shared,
    /// Written only by the local creator.
    Demo,
    /// Written only by the chain-backed creator.
    Simple,
}

impl PolicyIdKey {
    /// Storage key.
    pub const fn key(self) -> &'static str {
        match self {
            PolicyIdKey::Shared => "insurancePolicyId",
            PolicyIdKey::Demo => "demoInsurancePolicyId",
            PolicyIdKey::Simple => "simpleInsurancePolicyId",
        }
    }
}

/// Single-slot record store.
///
/// Serializes records as JSON. Reads never fail: a missing, malformed or
/// unreadable value is reported as absent and logged.
pub struct SlotStore<M> {
    medium: M,
}

impl<M: StorageMedium> SlotStore<M> {
    /// Wrap a medium.
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Access the underlying medium.
    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Write `record` into `slot`, replacing any previous record.
    ///
    /// A record with a non-finite amount is refused and the slot is left
    /// untouched, since JSON would store it as `null`.
    pub fn put(&self, slot: Slot, record: &InsuranceRecord) -> Result<()> {
        for (field, value) in [
            ("coverageAmount", record.coverage_amount),
            ("premiumAmount", record.premium_amount),
        ] {
            if !value.is_finite() {
                return Err(StoreError::NonFiniteAmount { field, value });
            }
        }
        let json = serde_json::to_string(record)?;
        self.medium.set_item(slot.key(), &json)?;
        debug!(%slot, id = %record.id, "record stored");
        Ok(())
    }

    /// Read the record in `slot`.
    pub fn get(&self, slot: Slot) -> Option<InsuranceRecord> {
        let raw = self.read(slot.key())?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(%slot, key = slot.key(), error = %e, "malformed stored record, treating as absent");
                None
            }
        }
    }

    /// Empty `slot`. Clearing an empty slot succeeds.
    pub fn clear(&self, slot: Slot) -> Result<()> {
        self.medium.remove_item(slot.key())
    }

    /// Records in `slot` as a sequence of zero or one elements.
    pub fn list(&self, slot: Slot) -> Vec<InsuranceRecord> {
        self.get(slot).into_iter().collect()
    }

    /// Write a bare identifier under `key`.
    pub fn put_policy_id(&self, key: PolicyIdKey, id: &str) -> Result<()> {
        self.medium.set_item(key.key(), id)?;
        debug!(key = key.key(), id, "policy id stored");
        Ok(())
    }

    /// Read the identifier under `key`. A blank value is absent.
    pub fn policy_id(&self, key: PolicyIdKey) -> Option<String> {
        self.read(key.key()).filter(|id| !id.trim().is_empty())
    }

    /// Remove the identifier under `key`.
    pub fn clear_policy_id(&self, key: PolicyIdKey) -> Result<()> {
        self.medium.remove_item(key.key())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.medium.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, treating as absent");
                None
            }
        }
    }
}
