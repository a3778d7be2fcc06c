//! Domain module for the state layer.
//!
//! Contains the proposal entity, the chain parameter rule table, ledger
//! balance services, fork milestones, and error types.

pub mod errors;
pub mod fork;
pub mod ledger;
pub mod params;
pub mod proposal;

pub use errors::*;
pub use fork::ForkMilestone;
pub use params::{ChainParameter, ParamKind, ParamRule, PARAM_RULES};
pub use proposal::{Proposal, ProposalState};
