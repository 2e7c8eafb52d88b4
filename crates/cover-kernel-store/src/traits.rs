//! StorageMedium trait: the raw key-value surface records are kept in.
//!
//! The shape mirrors a browser's local storage: synchronous calls, UTF-8
//! keys and values, last write wins.

use std::sync::Arc;

use crate::error::Result;

/// A synchronous string key-value medium.
///
/// Implementations must make each single-key call atomic; nothing stronger
/// is required.
pub trait StorageMedium: Send + Sync {
    /// Read the value under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<M: StorageMedium + ?Sized> StorageMedium for Arc<M> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

impl<M: StorageMedium + ?Sized> StorageMedium for Box<M> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
