//! # Cover Kernel Chain
//!
//! Transaction payloads and the signer seam for chain-backed record
//! creation.
//!
//! ## Overview
//!
//! The kernel never talks to a ledger itself. It builds a [`Transaction`]
//! with a [`TransactionBuilder`] and hands it to an injected [`Signer`],
//! which is free to ask a wallet for approval, submit, and wait for
//! confirmation. Whatever the signer reports comes back as an
//! [`ExecutionResult`] whose digest, when present, becomes the record id.
//!
//! ## Key Types
//!
//! - [`TransactionBuilder`] / [`Transaction`] - Move-call payloads
//! - [`PureArg`] - Pure-typed call arguments
//! - [`Signer`] - Async signing-and-execution capability
//! - [`Account`] - Active wallet account
//! - [`ExecutionResult`] - Typed view of an execution response

pub mod error;
pub mod signer;
pub mod transaction;

pub use error::{ChainError, Result};
pub use signer::{Account, ExecutionResult, Signer};
pub use transaction::{
    limits, CallHandle, MoveCall, PureArg, Transaction, TransactionBuilder,
};
