//! Media that misbehave on demand.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use cover_kernel_store::{MemoryMedium, Result, StorageMedium, StoreError};

/// Wraps a [`MemoryMedium`] and can be told to refuse writes, either to
/// every key or to selected keys only.
#[derive(Default)]
pub struct FailingMedium {
    inner: MemoryMedium,
    fail_all_writes: AtomicBool,
    failing_keys: Mutex<Vec<String>>,
}

impl FailingMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every write.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_all_writes.store(fail, Ordering::SeqCst);
    }

    /// Refuse writes to `key` only.
    pub fn fail_key(&self, key: &str) {
        self.failing_keys
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(key.to_string());
    }

    /// The wrapped medium, for inspection.
    pub fn inner(&self) -> &MemoryMedium {
        &self.inner
    }

    fn refuses(&self, key: &str) -> bool {
        self.fail_all_writes.load(Ordering::SeqCst)
            || self
                .failing_keys
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .iter()
                .any(|k| k == key)
    }
}

impl StorageMedium for FailingMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.refuses(key) {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                needed: key.len() + value.len(),
                limit: 0,
            });
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.inner.remove_item(key)
    }
}
