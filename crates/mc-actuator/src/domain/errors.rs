//! Error types for the actuator engine.
//!
//! `ValidationError` is user-facing and always pre-mutation: a failed
//! validation rejects the transaction before it enters a block.
//! `ExecutionError` should be unreachable when validation ran first; when
//! it does occur, the fee is still charged and the result records FAILED.

use crate::domain::contract::SupplyDirection;
use mc_state::{LedgerError, ParamError, StateError};
use shared_types::AddressError;
use thiserror::Error;

/// Pre-mutation rejection of a transaction.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Contract type error, expected [{expected}], got [{actual}]")]
    ContractTypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid {field} address: {source}")]
    InvalidAddress {
        field: &'static str,
        source: AddressError,
    },

    #[error("Account {address} does not exist")]
    AccountNotFound { address: String },

    #[error("Witness {address} does not exist")]
    WitnessNotFound { address: String },

    #[error("Cannot {direction} the total supply except the {direction} authority address")]
    UnauthorizedSupplyChange { direction: SupplyDirection },

    #[error("Amount must be greater than 0")]
    NonPositiveAmount,

    #[error("Insufficient fee: owner balance {balance} is below the fee {fee}")]
    InsufficientFee { fee: i64, balance: i64 },

    #[error("Insufficient balance: customer balance {balance} is below the amount {amount}")]
    InsufficientBalance { amount: i64, balance: i64 },

    #[error("This proposal has no parameters")]
    EmptyParameters,

    #[error(transparent)]
    Param(#[from] ParamError),
}

/// Failure discovered only during execution.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Contract type error, expected [{expected}], got [{actual}]")]
    ContractTypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Total supply overflow")]
    SupplyOverflow,

    #[error(transparent)]
    Store(#[from] StateError),
}
