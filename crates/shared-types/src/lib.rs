//! # Shared Types
//!
//! Domain primitives shared by every Meridian core crate:
//!
//! - **Address**: fixed-length prefixed account identifier with the codec
//!   used everywhere addresses cross a boundary (structural validation,
//!   hex decode, human-readable rendering).
//! - **Entities**: `Account` and `Witness`, the two records the ledger and
//!   the witness schedule store.
//!
//! This crate deliberately has no store or controller logic; it is the
//! leaf of the dependency graph.

pub mod address;
pub mod entities;

pub use address::{Address, AddressError, ADDRESS_PREFIX, ADDRESS_SIZE};
pub use entities::{Account, AccountType, Witness};
