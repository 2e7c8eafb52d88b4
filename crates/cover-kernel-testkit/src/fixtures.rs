//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use cover_kernel::{Account, CoverKernel, CreatorConfig};
use cover_kernel_core::{FixedClock, IdGenerator};
use cover_kernel_store::MemoryMedium;

/// Start time of every fixture clock: 2023-11-14T22:13:20Z.
pub const FIXTURE_EPOCH_MS: i64 = 1_700_000_000_000;

/// A kernel over an in-memory medium with a settable clock and a
/// connected account.
pub struct TestFixture {
    pub kernel: CoverKernel<Arc<MemoryMedium>>,
    pub medium: Arc<MemoryMedium>,
    pub clock: Arc<FixedClock>,
    pub account: Account,
}

impl TestFixture {
    /// Fixture without the simulated processing delay.
    pub fn new() -> Self {
        Self::with_config(CreatorConfig::immediate())
    }

    /// Fixture with an explicit configuration.
    pub fn with_config(config: CreatorConfig) -> Self {
        Self::with_seed(0, config)
    }

    /// Fixture with a deterministic identifier generator.
    pub fn with_seed(seed: u64, config: CreatorConfig) -> Self {
        let medium = Arc::new(MemoryMedium::new());
        let clock = Arc::new(FixedClock::new(FIXTURE_EPOCH_MS));
        let kernel = CoverKernel::from_parts(
            Arc::clone(&medium),
            Arc::clone(&clock),
            IdGenerator::seeded(seed),
            config,
        );

        Self {
            kernel,
            medium,
            clock,
            account: Account::new(format!("0x{:064x}", seed + 1)),
        }
    }

    /// Move the clock forward by `millis`.
    pub fn advance(&self, millis: i64) {
        use cover_kernel_core::Clock;
        self.clock.set(self.clock.now_millis() + millis);
    }

    /// Copy of every item in the medium.
    pub fn stored_items(&self) -> BTreeMap<String, String> {
        self.medium.snapshot().unwrap_or_default()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
