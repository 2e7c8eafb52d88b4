//! Local record creation: no external calls, simulated latency.

use std::sync::Arc;

use cover_kernel_core::InsuranceRecord;
use cover_kernel_store::{Slot, StorageMedium};
use tracing::{debug, info};

use crate::error::Result;
use crate::kernel::Shared;

/// Builds records entirely locally and caches them in the `demo` slot.
pub struct LocalCreator<M> {
    shared: Arc<Shared<M>>,
}

impl<M> Clone for LocalCreator<M> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<M: StorageMedium> LocalCreator<M> {
    pub(crate) fn new(shared: Arc<Shared<M>>) -> Self {
        Self { shared }
    }

    /// Create a record.
    ///
    /// Suspends for the configured processing delay, then writes the record
    /// to the `demo` slot and its id to the policy-id key. A write failure
    /// returns [`CoverError::Persistence`](crate::CoverError::Persistence)
    /// with the record inside.
    pub async fn create(
        &self,
        coverage_amount: f64,
        premium_amount: f64,
        risk_type: i64,
    ) -> Result<InsuranceRecord> {
        let shared = &self.shared;
        shared.check_amounts(coverage_amount, premium_amount)?;

        let created_at = shared.clock.now_millis();
        let id = shared.ids.generate(&shared.config.demo_tag, created_at);
        let record = InsuranceRecord::new(id, coverage_amount, premium_amount, risk_type, created_at);
        debug!(id = %record.id, risk_type, "local record built");

        let delay = shared.config.processing_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let record = shared.persist(Slot::Demo, record)?;
        info!(id = %record.id, risk = record.risk_label(), "local record created");
        Ok(record)
    }

    /// Cached records: zero or one.
    pub fn insurance_objects(&self) -> Vec<InsuranceRecord> {
        self.shared.store.list(Slot::Demo)
    }

    /// Identifier under this creator's policy-id key.
    pub fn policy_id(&self) -> Option<String> {
        self.shared.store.policy_id(self.shared.policy_key(Slot::Demo))
    }

    /// Drop the cached record. The policy id is left as is.
    pub fn clear(&self) -> cover_kernel_store::Result<()> {
        self.shared.store.clear(Slot::Demo)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cover_kernel_core::{FixedClock, IdGenerator};
    use cover_kernel_store::{MemoryMedium, PolicyIdKey, StorageMedium};

    use super::*;
    use crate::config::CreatorConfig;
    use crate::error::CoverError;
    use crate::kernel::CoverKernel;

    fn kernel_at(millis: i64, config: CreatorConfig) -> CoverKernel<MemoryMedium> {
        CoverKernel::from_parts(
            MemoryMedium::new(),
            FixedClock::new(millis),
            IdGenerator::seeded(1),
            config,
        )
    }

    #[tokio::test]
    async fn test_create_echoes_inputs() {
        let kernel = kernel_at(1_700_000_000_000, CreatorConfig::immediate());
        let record = kernel.local().create(500.0, 25.0, 2).await.unwrap();

        assert_eq!(record.coverage_amount, 500.0);
        assert_eq!(record.premium_amount, 25.0);
        assert_eq!(record.risk_type, 2);
        assert_eq!(record.status, 1);
        assert_eq!(record.created_at, 1_700_000_000_000);
        assert!(record.id.starts_with("demo_1700000000000_"));
    }

    #[tokio::test]
    async fn test_create_persists_record_and_policy_id() {
        let kernel = kernel_at(42, CreatorConfig::immediate());
        let local = kernel.local();
        let record = local.create(1.0, 2.0, 3).await.unwrap();

        assert_eq!(kernel.store().get(Slot::Demo), Some(record.clone()));
        assert_eq!(local.insurance_objects(), vec![record.clone()]);
        assert_eq!(local.policy_id(), Some(record.id.clone()));
        assert_eq!(
            kernel.store().policy_id(PolicyIdKey::Shared),
            Some(record.id)
        );
    }

    #[tokio::test]
    async fn test_same_millisecond_ids_differ() {
        let kernel = kernel_at(5, CreatorConfig::immediate());
        let local = kernel.local();

        let a = local.create(1.0, 1.0, 1).await.unwrap();
        let b = local.create(1.0, 1.0, 1).await.unwrap();
        assert_eq!(a.created_at, b.created_at);
        assert_ne!(a.id, b.id);

        // Only the latest survives.
        assert_eq!(local.insurance_objects(), vec![b]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_waits_processing_delay() {
        let kernel = kernel_at(0, CreatorConfig::default());
        let start = tokio::time::Instant::now();

        kernel.local().create(1.0, 1.0, 1).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_negative_amounts_accepted_by_default() {
        let kernel = kernel_at(0, CreatorConfig::immediate());
        let record = kernel.local().create(-10.0, -1.5, 0).await.unwrap();
        assert_eq!(record.coverage_amount, -10.0);
        assert_eq!(record.risk_label(), "Unknown");
    }

    #[tokio::test]
    async fn test_validation_rejects_before_writing() {
        let config = CreatorConfig {
            validate_amounts: true,
            ..CreatorConfig::immediate()
        };
        let kernel = kernel_at(0, config);

        let err = kernel.local().create(-10.0, 1.0, 1).await.unwrap_err();
        assert!(matches!(err, CoverError::InvalidAmount { field: "coverageAmount", .. }));
        assert!(kernel.store().medium().is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_persistence_failure_returns_record() {
        let kernel = kernel_at(0, CreatorConfig::immediate());
        kernel.store().medium().disable().unwrap();

        let err = kernel.local().create(500.0, 25.0, 2).await.unwrap_err();
        assert!(matches!(err, CoverError::Persistence { .. }));

        let record = err.into_record().unwrap();
        assert_eq!(record.coverage_amount, 500.0);
        assert!(record.id.starts_with("demo_"));
    }

    #[tokio::test]
    async fn test_clear() {
        let kernel = kernel_at(0, CreatorConfig::immediate());
        let local = kernel.local();
        let record = local.create(1.0, 1.0, 1).await.unwrap();

        local.clear().unwrap();
        local.clear().unwrap();
        assert!(local.insurance_objects().is_empty());
        assert_eq!(local.policy_id(), Some(record.id));
        assert!(kernel.store().medium().get_item(Slot::Demo.key()).unwrap().is_none());
    }
}
