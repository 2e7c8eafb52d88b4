//! Transaction payloads.
//!
//! A transaction is an ordered list of move calls, each naming a target
//! function and carrying pure-typed arguments. Later calls may refer to
//! earlier ones through the [`CallHandle`] returned when they were added.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChainError, Result};

/// Payload size limits.
pub mod limits {
    /// Max encoded size of a single pure argument.
    pub const MAX_PURE_ARG_BYTES: usize = 16 * 1024;
    /// Max commands in one transaction.
    pub const MAX_COMMANDS: usize = 1024;
}

/// A pure-typed call argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PureArg {
    String(String),
    U64(u64),
    Bool(bool),
}

impl PureArg {
    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        match self {
            PureArg::String(s) => s.len(),
            PureArg::U64(_) => 8,
            PureArg::Bool(_) => 1,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PureArg::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for PureArg {
    fn from(s: String) -> Self {
        PureArg::String(s)
    }
}

impl From<&str> for PureArg {
    fn from(s: &str) -> Self {
        PureArg::String(s.to_string())
    }
}

impl From<u64> for PureArg {
    fn from(v: u64) -> Self {
        PureArg::U64(v)
    }
}

impl From<bool> for PureArg {
    fn from(v: bool) -> Self {
        PureArg::Bool(v)
    }
}

/// A single move call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCall {
    /// `<address>::<module>::<function>`.
    pub target: String,
    pub arguments: Vec<PureArg>,
}

/// Opaque handle to a pending call inside a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallHandle(usize);

impl CallHandle {
    /// Position of the call in the transaction.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CallHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result({})", self.0)
    }
}

/// A built transaction, ready for a signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sending account address, if known at build time.
    pub sender: Option<String>,
    pub commands: Vec<MoveCall>,
}

impl Transaction {
    /// JSON encoding handed to signers that speak JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a JSON-encoded transaction.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for [`Transaction`].
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    sender: Option<String>,
    commands: Vec<MoveCall>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sending address.
    pub fn sender(mut self, address: impl Into<String>) -> Self {
        self.sender = Some(address.into());
        self
    }

    /// Append a move call.
    ///
    /// Validates the target and argument sizes before accepting the call.
    pub fn move_call(
        &mut self,
        target: impl Into<String>,
        arguments: Vec<PureArg>,
    ) -> Result<CallHandle> {
        let target = target.into();
        validate_target(&target)?;

        for (index, arg) in arguments.iter().enumerate() {
            let size = arg.size();
            if size > limits::MAX_PURE_ARG_BYTES {
                return Err(ChainError::ArgumentTooLarge {
                    index,
                    size,
                    limit: limits::MAX_PURE_ARG_BYTES,
                });
            }
        }

        if self.commands.len() >= limits::MAX_COMMANDS {
            return Err(ChainError::TooManyCommands(self.commands.len() + 1));
        }

        self.commands.push(MoveCall { target, arguments });
        Ok(CallHandle(self.commands.len() - 1))
    }

    /// Finish the transaction.
    pub fn build(self) -> Result<Transaction> {
        if self.commands.is_empty() {
            return Err(ChainError::EmptyTransaction);
        }
        Ok(Transaction {
            sender: self.sender,
            commands: self.commands,
        })
    }
}

fn validate_target(target: &str) -> Result<()> {
    let invalid = || ChainError::InvalidTarget(target.to_string());

    let mut parts = target.split("::");
    let (Some(address), Some(module), Some(function), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let hex = address.strip_prefix("0x").ok_or_else(invalid)?;
    if hex.is_empty() || hex.len() > 64 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    for ident in [module, function] {
        let mut bytes = ident.bytes();
        let starts_ok = bytes
            .next()
            .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_');
        if !starts_ok || !bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(invalid());
        }
    }

    Ok(())
}
