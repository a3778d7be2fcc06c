//! # Entities
//!
//! Account and witness records as the ledger stores them. Accounts are
//! created lazily on first reference and never deleted; balances are signed
//! 64-bit integers in the chain's smallest unit.

use crate::address::Address;
use serde::{Deserialize, Serialize};

// =============================================================================
// ACCOUNT
// =============================================================================

/// Account category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountType {
    /// Externally controlled account.
    #[default]
    Normal,
    /// Asset issuer account.
    AssetIssue,
    /// Contract account.
    Contract,
}

/// A ledger account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account address.
    pub address: Address,
    /// Balance in the smallest unit. Signed so fee and supply arithmetic
    /// can be checked before it is committed.
    pub balance: i64,
    /// Account category.
    pub account_type: AccountType,
    /// Head-block timestamp at which the account was created.
    pub create_time: i64,
    /// Whether the account was created with the default permission set
    /// (governed by the multi-sign activation flag at creation time).
    pub default_permissions: bool,
}

impl Account {
    /// Creates a new account with a zero balance.
    #[must_use]
    pub fn new(
        address: Address,
        account_type: AccountType,
        create_time: i64,
        default_permissions: bool,
    ) -> Self {
        Self {
            address,
            balance: 0,
            account_type,
            create_time,
            default_permissions,
        }
    }

    /// Creates a normal account holding `balance`, for genesis and tests.
    #[must_use]
    pub fn with_balance(address: Address, balance: i64) -> Self {
        Self {
            address,
            balance,
            account_type: AccountType::Normal,
            create_time: 0,
            default_permissions: false,
        }
    }
}

// =============================================================================
// WITNESS
// =============================================================================

/// A block-producing witness eligible to vote on governance proposals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    /// Witness account address.
    pub address: Address,
    /// Whether the witness is in the active production schedule.
    pub is_active: bool,
}

impl Witness {
    /// Creates a witness record.
    #[must_use]
    pub fn new(address: Address, is_active: bool) -> Self {
        Self { address, is_active }
    }
}
