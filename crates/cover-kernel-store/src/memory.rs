//! In-memory implementation of the StorageMedium trait.
//!
//! Primarily for testing. It can be given a byte quota and switched off to
//! reproduce the two ways a real medium refuses writes.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, StoreError};
use crate::traits::StorageMedium;

/// In-memory medium.
///
/// All data is lost when the medium is dropped. Thread-safe via RwLock.
pub struct MemoryMedium {
    inner: RwLock<MemoryMediumInner>,
}

struct MemoryMediumInner {
    /// Stored items.
    items: HashMap<String, String>,

    /// Byte limit over all keys and values, if any.
    quota: Option<usize>,

    /// When set, every call fails with `Disabled`.
    disabled: bool,
}

impl MemoryMediumInner {
    fn used_bytes(&self) -> usize {
        self.items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl MemoryMedium {
    /// Create an empty, unlimited medium.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryMediumInner {
                items: HashMap::new(),
                quota: None,
                disabled: false,
            }),
        }
    }

    /// Create an empty medium holding at most `quota` bytes of keys plus values.
    pub fn with_quota(quota: usize) -> Self {
        let medium = Self::new();
        if let Ok(mut inner) = medium.inner.write() {
            inner.quota = Some(quota);
        }
        medium
    }

    /// Refuse all further calls.
    pub fn disable(&self) -> Result<()> {
        self.write()?.disabled = true;
        Ok(())
    }

    /// Accept calls again.
    pub fn enable(&self) -> Result<()> {
        self.write()?.disabled = false;
        Ok(())
    }

    /// Copy of every stored item, ordered by key.
    pub fn snapshot(&self) -> Result<BTreeMap<String, String>> {
        let inner = self.read()?;
        Ok(inner
            .items
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    /// Number of stored items.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.items.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryMediumInner>> {
        self.inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryMediumInner>> {
        self.inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl Default for MemoryMedium {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageMedium for MemoryMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let inner = self.read()?;
        if inner.disabled {
            return Err(StoreError::Disabled);
        }
        Ok(inner.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.write()?;
        if inner.disabled {
            return Err(StoreError::Disabled);
        }

        if let Some(limit) = inner.quota {
            let replaced = inner.items.get(key).map_or(0, |old| key.len() + old.len());
            let needed = inner.used_bytes() - replaced + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        inner.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut inner = self.write()?;
        if inner.disabled {
            return Err(StoreError::Disabled);
        }
        inner.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_medium_basic() {
        let medium = MemoryMedium::new();

        assert_eq!(medium.get_item("k").unwrap(), None);
        medium.set_item("k", "v1").unwrap();
        assert_eq!(medium.get_item("k").unwrap().as_deref(), Some("v1"));

        // Overwrite
        medium.set_item("k", "v2").unwrap();
        assert_eq!(medium.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(medium.len().unwrap(), 1);
    }

    #[test]
    fn test_memory_medium_remove_idempotent() {
        let medium = MemoryMedium::new();
        medium.set_item("k", "v").unwrap();

        medium.remove_item("k").unwrap();
        medium.remove_item("k").unwrap();
        assert!(medium.is_empty().unwrap());
    }

    #[test]
    fn test_memory_medium_quota() {
        let medium = MemoryMedium::with_quota(10);

        medium.set_item("ab", "12345678").unwrap();
        let err = medium.set_item("c", "1").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { needed: 12, limit: 10, .. }));

        // Replacing an existing key only counts the difference.
        medium.set_item("ab", "1234").unwrap();
        medium.set_item("c", "1").unwrap();
        assert_eq!(medium.len().unwrap(), 2);
    }

    #[test]
    fn test_memory_medium_disabled() {
        let medium = MemoryMedium::new();
        medium.set_item("k", "v").unwrap();
        medium.disable().unwrap();

        assert!(matches!(medium.get_item("k"), Err(StoreError::Disabled)));
        assert!(matches!(medium.set_item("k", "w"), Err(StoreError::Disabled)));
        assert!(matches!(medium.remove_item("k"), Err(StoreError::Disabled)));

        medium.enable().unwrap();
        assert_eq!(medium.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
