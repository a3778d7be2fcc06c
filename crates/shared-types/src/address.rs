//! # Address
//!
//! A Meridian address is 21 bytes: one network prefix byte followed by a
//! 20-byte account identifier. Every address that crosses a contract or
//! store boundary is validated structurally (length + prefix) before use.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Total address length in bytes, prefix included.
pub const ADDRESS_SIZE: usize = 21;

/// Network prefix byte for mainnet addresses.
pub const ADDRESS_PREFIX: u8 = 0x4d;

/// Errors produced by the address codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address length: expected {ADDRESS_SIZE}, got {0}")]
    InvalidLength(usize),

    #[error("Invalid address prefix: expected {ADDRESS_PREFIX:#04x}, got {0:#04x}")]
    InvalidPrefix(u8),

    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),
}

/// A 21-byte prefixed account address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; ADDRESS_SIZE]);

impl Address {
    /// Creates an address from a raw byte array without validation.
    ///
    /// Callers decoding untrusted input should use [`Address::from_slice`].
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// Decodes an address from a byte slice, enforcing length and prefix.
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        if slice.len() != ADDRESS_SIZE {
            return Err(AddressError::InvalidLength(slice.len()));
        }
        if slice[0] != ADDRESS_PREFIX {
            return Err(AddressError::InvalidPrefix(slice[0]));
        }
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Decodes an address from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Returns true if `slice` is a structurally valid address.
    #[must_use]
    pub fn is_valid(slice: &[u8]) -> bool {
        Self::from_slice(slice).is_ok()
    }

    /// Returns the underlying bytes, prefix included.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Human-readable `0x`-prefixed hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// A test address: prefix byte followed by `fill` repeated.
    #[must_use]
    pub const fn repeat(fill: u8) -> Self {
        let mut bytes = [fill; ADDRESS_SIZE];
        bytes[0] = ADDRESS_PREFIX;
        Self(bytes)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[ADDRESS_SIZE - 2..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_SIZE] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}
