//! # Transaction Actuator Execution Engine
//!
//! One actuator per contract type, each conforming to the common
//! `{validate, execute, calc_fee, owner_address}` contract:
//!
//! - `validate` is read-only: payload shape, address structure, account
//!   existence, authorization, numeric ranges, fee affordability. Any
//!   failure rejects the transaction before it can enter a block.
//! - `execute` mutates ledger and store state, debits the fee into the
//!   fee sink, and records a SUCCESS/FAILED status plus the fee charged.
//!   A failure surfacing only here still charges the fee; the surrounding
//!   block-apply layer discards the rest of the mutation.
//!
//! Dispatch is by the contract's type tag through [`actuator_for`].

pub mod actuators;
pub mod domain;

pub use actuators::{actuator_for, Actuator, ModifySupplyActuator, ProposalCreateActuator};
pub use domain::contract::{
    Contract, ModifySupplyContract, ProposalCreateContract, SupplyDirection,
};
pub use domain::errors::{ExecutionError, ValidationError};
pub use domain::result::{ResultCode, TransactionResult};
