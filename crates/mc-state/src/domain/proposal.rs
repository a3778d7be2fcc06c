//! # Proposal
//!
//! A governance proposal bundles a set of `{parameter id -> value}` changes
//! proposed by a witness. Ids are strictly increasing from 1 with no gaps.
//! A proposal is created once by the proposal-create actuator and mutated
//! only by the governance controller (terminal resolution) or by its
//! proposer (cancellation). Terminal records are never deleted; they remain
//! as the chain's parameter-change history.

use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::{BTreeMap, BTreeSet};

/// Proposal lifecycle states. `Pending` is the only non-terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProposalState {
    #[default]
    Pending,
    Approved,
    Disapproved,
    Canceled,
}

/// A governance proposal record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Strictly increasing id, starting at 1.
    pub id: u64,
    /// Witness that created the proposal.
    pub proposer: Address,
    /// Proposed changes, keyed by parameter id. A `BTreeMap` so every node
    /// iterates in the same ascending order when applying.
    pub parameters: BTreeMap<u32, String>,
    /// Head-block time at creation, in ms.
    pub create_time: i64,
    /// Maintenance boundary at which the proposal is resolved, in ms.
    pub expiration_time: i64,
    /// Lifecycle state.
    pub state: ProposalState,
    /// Witnesses that have approved. Membership in the *active* schedule is
    /// re-checked at tally time, not here.
    pub approvals: BTreeSet<Address>,
}

impl Proposal {
    /// Creates a pending proposal with no approvals.
    #[must_use]
    pub fn new(
        id: u64,
        proposer: Address,
        parameters: BTreeMap<u32, String>,
        create_time: i64,
        expiration_time: i64,
    ) -> Self {
        Self {
            id,
            proposer,
            parameters,
            create_time,
            expiration_time,
            state: ProposalState::Pending,
            approvals: BTreeSet::new(),
        }
    }

    /// True once the governance controller has resolved the proposal.
    #[must_use]
    pub fn has_processed(&self) -> bool {
        matches!(
            self.state,
            ProposalState::Approved | ProposalState::Disapproved
        )
    }

    /// True if the proposer canceled the proposal before resolution.
    #[must_use]
    pub fn has_canceled(&self) -> bool {
        self.state == ProposalState::Canceled
    }

    /// True once `current_time` has reached the expiration boundary.
    #[must_use]
    pub fn has_expired(&self, current_time: i64) -> bool {
        self.expiration_time <= current_time
    }

    /// Strict-majority tally against the currently active witness set:
    /// more than half of `active_witnesses` must have approved.
    #[must_use]
    pub fn has_most_approvals(&self, active_witnesses: &[Address]) -> bool {
        let approved = self
            .approvals
            .iter()
            .filter(|address| active_witnesses.contains(address))
            .count();
        approved * 2 > active_witnesses.len()
    }
}
