//! Error types for the state layer.

use crate::domain::fork::ForkMilestone;
use crate::domain::params::ChainParameter;
use shared_types::{Address, AddressError};
use thiserror::Error;

/// Store access errors. `Backend` covers transient read/write failures of
/// the persistence engine behind a port; callers treat it as retryable at
/// a later pass, never as a consensus fault.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Balance arithmetic errors raised by the ledger services.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account {address:?} not found")]
    AccountNotFound { address: Address },

    #[error("Insufficient balance on {address:?}: required {required}, available {available}")]
    InsufficientBalance {
        address: Address,
        required: i64,
        available: i64,
    },

    #[error("Balance overflow on {address:?}")]
    BalanceOverflow { address: Address },
}

/// Chain parameter validation and application errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("Bad chain parameter id: {id}")]
    UnknownParameter { id: u32 },

    #[error("Bad chain parameter value, not an integer: {value}")]
    InvalidNumber { value: String },

    #[error("Bad chain parameter value for {param:?}, valid range is [{min},{max}]")]
    OutOfRange { param: ChainParameter, min: i64, max: i64 },

    #[error("Value for {param:?} is only allowed to be 1")]
    NotActivationValue { param: ChainParameter },

    #[error("{param:?} has been set before and is only allowed to be set once")]
    AlreadyActivated { param: ChainParameter },

    #[error("{param:?} cannot be proposed before milestone {gate:?} is active")]
    VersionGateInactive {
        param: ChainParameter,
        gate: ForkMilestone,
    },

    #[error("{param:?} is retired once milestone {milestone:?} is active")]
    ParameterRetired {
        param: ChainParameter,
        milestone: ForkMilestone,
    },

    #[error("{requires:?} must be active before {param:?} can be proposed")]
    PreconditionNotMet {
        param: ChainParameter,
        requires: ChainParameter,
    },

    #[error("Invalid authority address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("Authority account {address} does not exist")]
    AuthorityAccountMissing { address: String },
}
