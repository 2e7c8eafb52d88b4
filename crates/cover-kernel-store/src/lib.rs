//! # Cover Kernel Store
//!
//! Single-slot record persistence for the Cover Kernel. Records live in a
//! key-value [`StorageMedium`]; each logical slot holds at most one record
//! and writing a slot replaces whatever was there.
//!
//! ## Key Types
//!
//! - [`StorageMedium`] - Synchronous string key-value medium
//! - [`MemoryMedium`] - In-memory medium with optional quota, for tests
//! - [`SqliteMedium`] - Durable medium that survives restarts
//! - [`SlotStore`] - Typed record slots over any medium
//! - [`Slot`] / [`PolicyIdKey`] - Well-known keys
//!
//! ## Usage
//!
//! ```rust
//! use cover_kernel_core::InsuranceRecord;
//! use cover_kernel_store::{MemoryMedium, Slot, SlotStore};
//!
//! let store = SlotStore::new(MemoryMedium::new());
//! let record = InsuranceRecord::new("demo_1_abcdefghi", 500.0, 25.0, 2, 1);
//!
//! store.put(Slot::Demo, &record).unwrap();
//! assert_eq!(store.get(Slot::Demo), Some(record));
//!
//! store.clear(Slot::Demo).unwrap();
//! assert_eq!(store.get(Slot::Demo), None);
//! ```
//!
//! ## Design Notes
//!
//! - **Overwrite, never append**: there is no history per slot
//! - **Malformed is absent**: unreadable stored data reads as `None` and is logged
//! - **Idempotent clear**: clearing an empty slot is not an error

pub mod error;
pub mod memory;
pub mod migration;
pub mod slot;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryMedium;
pub use slot::{PolicyIdKey, Slot, SlotStore};
pub use sqlite::SqliteMedium;
pub use traits::StorageMedium;
