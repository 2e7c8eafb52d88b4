//! # Cover Kernel Testkit
//!
//! Testing utilities for the Cover Kernel.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a kernel wired to an in-memory medium and a settable clock
//! - **Signers**: scripted, digesting, failing and never-completing signers
//! - **Media**: a medium that fails writes on demand
//! - **Generators**: proptest strategies for creation inputs
//!
//! ## Test Fixtures
//!
//! ```rust
//! use cover_kernel_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! assert!(fixture.stored_items().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cover_kernel_testkit::generators::CreateParams;
//!
//! proptest! {
//!     #[test]
//!     fn labels_are_total(params: CreateParams) {
//!         let _ = cover_kernel::risk_label(params.risk_type);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod media;
pub mod signers;

pub use fixtures::TestFixture;
pub use generators::CreateParams;
pub use media::FailingMedium;
pub use signers::{DigestSigner, FailingSigner, PendingSigner, ScriptedSigner};
