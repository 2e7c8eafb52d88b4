//! SQLite implementation of the StorageMedium trait.
//!
//! This is the durable medium: values survive process restarts for as long
//! as the database file does. Uses rusqlite with bundled SQLite.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};

use cover_kernel_core::{Clock, SystemClock};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::StorageMedium;

/// SQLite-backed medium.
///
/// Thread-safe via internal Mutex. Calls are synchronous, matching the
/// medium contract.
pub struct SqliteMedium {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteMedium {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute an operation on the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        f(&conn)
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT key FROM kv_items ORDER BY key")?;
            let keys = stmt
                .query_map([], |row| row.get(0))?
                .collect::<std::result::Result<Vec<String>, _>>()?;
            Ok(keys)
        })
    }
}

impl StorageMedium for SqliteMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM kv_items WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv_items (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value, SystemClock.now_millis()],
            )?;
            Ok(())
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv_items WHERE key = ?1", params![key])?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_medium_basic() {
        let medium = SqliteMedium::open_memory().unwrap();

        assert_eq!(medium.get_item("k").unwrap(), None);
        medium.set_item("k", "v1").unwrap();
        medium.set_item("k", "v2").unwrap();
        assert_eq!(medium.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(medium.keys().unwrap(), vec!["k".to_string()]);

        medium.remove_item("k").unwrap();
        medium.remove_item("k").unwrap();
        assert_eq!(medium.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_sqlite_medium_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.db");

        {
            let medium = SqliteMedium::open(&path).unwrap();
            medium.set_item("insurancePolicyId", "demo_1_abcdefghi").unwrap();
        }

        let medium = SqliteMedium::open(&path).unwrap();
        assert_eq!(
            medium.get_item("insurancePolicyId").unwrap().as_deref(),
            Some("demo_1_abcdefghi")
        );
    }
}
