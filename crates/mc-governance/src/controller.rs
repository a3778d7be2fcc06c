//! # Proposal Controller
//!
//! Scans proposals once per maintenance boundary, newest id first.
//! Because ids are gapless and always resolved in descending order, the
//! first already-resolved id proves every lower id was handled by an
//! earlier pass, and the scan stops there.
//!
//! A transient store read failure is logged and skipped (the id is picked
//! up again at the next boundary); the scan never retries one id in place.

use mc_state::{apply_param, ChainContext, Proposal, ProposalState};
use tracing::{debug, error, info, warn};

/// Governance state machine driver. Stateless; all state lives behind the
/// [`ChainContext`] ports.
pub struct ProposalController;

impl ProposalController {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Runs one maintenance pass. Invoked exactly once per maintenance
    /// boundary by the block pipeline.
    pub fn process_proposals(&self, ctx: &mut ChainContext<'_>) {
        let latest = ctx.properties.latest_proposal_num();
        if latest == 0 {
            info!("No proposals yet, nothing to process");
            return;
        }

        // Maintenance time comes from persisted chain state, never the
        // local clock.
        let current_time = ctx.properties.next_maintenance_time();

        for id in (1..=latest).rev() {
            let proposal = match ctx.proposals.get(id) {
                Ok(Some(proposal)) => proposal,
                Ok(None) => {
                    warn!(id, "Proposal record missing, skipping");
                    continue;
                }
                Err(e) => {
                    error!(id, error = %e, "Proposal read failed, skipping");
                    continue;
                }
            };

            if proposal.has_processed() {
                // Every lower id was resolved by an earlier pass.
                info!(id, "Proposal already processed, stopping scan");
                break;
            }
            if proposal.has_canceled() {
                info!(id, "Proposal canceled, skipping");
                continue;
            }
            if !proposal.has_expired(current_time) {
                debug!(id, "Proposal not yet expired, skipping");
                continue;
            }

            self.resolve(ctx, proposal);
        }
    }

    /// Tallies an expired proposal against the currently active witness
    /// schedule and persists its terminal state.
    fn resolve(&self, ctx: &mut ChainContext<'_>, mut proposal: Proposal) {
        let active_witnesses = ctx.schedule.active_witnesses();

        if proposal.has_most_approvals(&active_witnesses) {
            info!(
                id = proposal.id,
                approvals = proposal.approvals.len(),
                active = active_witnesses.len(),
                "Proposal approved, applying parameters"
            );
            self.apply_parameters(ctx, &proposal);
            proposal.state = ProposalState::Approved;
        } else {
            info!(
                id = proposal.id,
                approvals = proposal.approvals.len(),
                active = active_witnesses.len(),
                "Proposal did not reach majority, disapproved"
            );
            proposal.state = ProposalState::Disapproved;
        }

        let id = proposal.id;
        if let Err(e) = ctx.proposals.put(proposal) {
            error!(id, error = %e, "Failed to persist resolved proposal");
        }
    }

    /// Applies every entry of an approved proposal in ascending parameter
    /// id order through the shared rule table.
    fn apply_parameters(&self, ctx: &mut ChainContext<'_>, proposal: &Proposal) {
        for (id, value) in &proposal.parameters {
            // Unreachable for proposals that passed creation-time
            // validation; a bad entry must not wedge the pass.
            if let Err(e) = apply_param(*id, value, ctx) {
                warn!(proposal = proposal.id, param = id, error = %e, "Parameter apply failed");
            }
        }
    }
}

impl Default for ProposalController {
    fn default() -> Self {
        Self::new()
    }
}
