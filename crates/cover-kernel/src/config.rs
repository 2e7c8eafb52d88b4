//! Creator configuration.

use std::time::Duration;

use cover_kernel_core::IdTag;
use cover_kernel_store::{PolicyIdKey, Slot};

/// Default call target for chain-backed object creation.
pub const DEFAULT_CREATE_TARGET: &str = "0x2::object::create";

/// Default simulated processing latency of the local creator.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(1);

/// Where the most recent record identifier is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyIdScope {
    /// Both creators write `insurancePolicyId`; the later write wins.
    #[default]
    Shared,
    /// Each creator writes its own key.
    PerVariant,
}

impl PolicyIdScope {
    /// The policy-id key a creator writing `slot` uses.
    pub fn key_for(self, slot: Slot) -> PolicyIdKey {
        match (self, slot) {
            (PolicyIdScope::Shared, _) => PolicyIdKey::Shared,
            (PolicyIdScope::PerVariant, Slot::Demo) => PolicyIdKey::Demo,
            (PolicyIdScope::PerVariant, Slot::Simple) => PolicyIdKey::Simple,
        }
    }
}

/// Which instant a chain-backed record's `createdAt` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampPolicy {
    /// When the transaction payload was built.
    #[default]
    AtSubmission,
    /// When the signer reported success.
    AtConfirmation,
}

/// Configuration shared by both creators.
#[derive(Debug, Clone)]
pub struct CreatorConfig {
    /// Simulated latency of local creation.
    pub processing_delay: Duration,
    /// Policy-id key layout.
    pub policy_id_scope: PolicyIdScope,
    /// Timestamp semantics for chain-backed records.
    pub timestamp_policy: TimestampPolicy,
    /// Reject negative or non-finite amounts.
    pub validate_amounts: bool,
    /// Move-call target used to create the on-chain object.
    pub create_target: String,
    /// Identifier tag for local records.
    pub demo_tag: IdTag,
    /// Identifier tag for chain-backed records without a digest.
    pub object_tag: IdTag,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
            policy_id_scope: PolicyIdScope::default(),
            timestamp_policy: TimestampPolicy::default(),
            validate_amounts: false,
            create_target: DEFAULT_CREATE_TARGET.to_string(),
            demo_tag: IdTag::demo(),
            object_tag: IdTag::object(),
        }
    }
}

impl CreatorConfig {
    /// Default configuration without the simulated delay.
    pub fn immediate() -> Self {
        Self {
            processing_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
