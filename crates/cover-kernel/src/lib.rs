//! # Cover Kernel
//!
//! Creation and local caching of insurance objects, either simulated
//! entirely locally or backed by a signed transaction.
//!
//! ## Overview
//!
//! - **Local creation**: builds a record after a simulated processing delay
//! - **Chain-backed creation**: attaches record metadata to an object-creation
//!   transaction, executes it through an injected signer, and uses the
//!   transaction digest as the record id
//! - **Single-slot cache**: each variant keeps only its most recent record
//! - **Labels**: risk and status codes resolve to display labels
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cover_kernel::{CoverKernel, CreatorConfig, risk_label};
//! use cover_kernel::store::SqliteMedium;
//!
//! async fn example() {
//!     let medium = SqliteMedium::open("cover.db").unwrap();
//!     let kernel = CoverKernel::new(medium, CreatorConfig::default());
//!
//!     let record = kernel.local().create(500.0, 25.0, 2).await.unwrap();
//!     assert_eq!(risk_label(record.risk_type), "Flood");
//!
//!     // The chain-backed variant needs a signer and a connected account:
//!     // let record = kernel.chain().create(500.0, 25.0, 2, &signer, Some(&account)).await?;
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `cover_kernel::core` - Records, codes, labels, identifiers
//! - `cover_kernel::store` - Storage media and the slot store
//! - `cover_kernel::ledger` - Transactions and the signer trait

pub mod chain;
pub mod config;
pub mod error;
pub mod kernel;
pub mod local;

pub use cover_kernel_chain as ledger;
pub use cover_kernel_core as core;
pub use cover_kernel_store as store;

pub use chain::{ChainCreator, ObjectMetadata};
pub use config::{CreatorConfig, PolicyIdScope, TimestampPolicy};
pub use error::{CoverError, Result};
pub use kernel::CoverKernel;
pub use local::LocalCreator;

pub use cover_kernel_chain::{Account, ExecutionResult, Signer, Transaction};
pub use cover_kernel_core::{
    risk_label, status_label, InsuranceRecord, PolicyStatus, RiskType,
};
pub use cover_kernel_store::{MemoryMedium, PolicyIdKey, Slot, SlotStore, SqliteMedium, StorageMedium};
