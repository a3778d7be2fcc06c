//! # Chain Context
//!
//! The explicit state handle passed by reference into every actuator and
//! governance call. Replaces the ambient shared manager of classic
//! designs: every collaborator a state transition may touch is named here,
//! and callers see exactly which borrows a call takes.

use crate::config::ChainConfig;
use crate::ports::{
    AccountStore, DynamicPropertiesStore, ForkController, ProposalStore, WitnessScheduleStore,
    WitnessStore,
};

/// Borrow bundle over the stores a block's state transitions run against.
///
/// One `ChainContext` is expected to live for a single logical sequential
/// pass (a block apply, or one maintenance pass); the single-writer model
/// is enforced by Rust's borrow rules on the `&mut` fields.
pub struct ChainContext<'a> {
    pub accounts: &'a mut dyn AccountStore,
    pub properties: &'a mut dyn DynamicPropertiesStore,
    pub proposals: &'a mut dyn ProposalStore,
    pub witnesses: &'a dyn WitnessStore,
    pub schedule: &'a dyn WitnessScheduleStore,
    pub fork: &'a dyn ForkController,
    pub config: &'a ChainConfig,
}
