//! # Cover Kernel Core
//!
//! Pure primitives for the Cover Kernel: insurance records, code tables,
//! display labels and identifier generation.
//!
//! This crate contains no storage and no networking. The only ambient inputs
//! are the wall clock and a random source, both behind injectable seams.
//!
//! ## Key Types
//!
//! - [`InsuranceRecord`] - The single persisted entity
//! - [`RiskType`] / [`PolicyStatus`] - Typed views over the integer codes
//! - [`IdGenerator`] - `<tag>_<millis>_<suffix>` identifiers
//! - [`Clock`] - Millisecond time source, monotonic per process
//!
//! ## Labels
//!
//! [`risk_label`] and [`status_label`] are total over `i64`; unknown codes
//! resolve to `"Unknown"`.

pub mod clock;
pub mod error;
pub mod id;
pub mod labels;
pub mod record;

pub use clock::{Clock, FixedClock, MonotonicClock, SystemClock};
pub use error::{CoreError, Result};
pub use id::{IdGenerator, IdTag, ID_SEPARATOR, SUFFIX_LEN};
pub use labels::{risk_label, status_label, UNKNOWN_LABEL};
pub use record::{validate_amounts, InsuranceRecord, PolicyStatus, RiskType};
