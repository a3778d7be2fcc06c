//! # State Layer
//!
//! The state side of the Meridian deterministic core:
//!
//! - **Domain**: proposal entity and state machine, the declarative chain
//!   parameter rule table, ledger balance services, fork milestones.
//! - **Ports**: store abstractions the surrounding node implements against
//!   its persistence engine (`AccountStore`, `DynamicPropertiesStore`,
//!   `ProposalStore`, `WitnessStore`, `WitnessScheduleStore`,
//!   `ForkController`).
//! - **Adapters**: in-memory store implementations used by tests and
//!   the simulator.
//! - **Context**: `ChainContext`, the explicit borrow bundle threaded
//!   through every actuator and governance call. There is no ambient
//!   manager singleton.
//!
//! Everything here is synchronous and deterministic: no wall-clock reads,
//! no I/O, stable (ascending) iteration orders throughout.

pub mod adapters;
pub mod config;
pub mod context;
pub mod domain;
pub mod ports;

pub use config::ChainConfig;
pub use context::ChainContext;
pub use domain::errors::{LedgerError, ParamError, StateError};
pub use domain::fork::ForkMilestone;
pub use domain::ledger::{adjust_balance, burn_fee, FEE_SINK_ADDRESS};
pub use domain::params::{
    apply_param, validate_param, ChainParameter, ParamKind, ParamRule, PARAM_RULES,
};
pub use domain::proposal::{Proposal, ProposalState};
pub use ports::{
    AccountStore, DynamicPropertiesStore, ForkController, ProposalStore, WitnessScheduleStore,
    WitnessStore,
};
