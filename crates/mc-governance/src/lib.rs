//! # Proposal Governance
//!
//! The maintenance-pass side of on-chain governance: once per maintenance
//! boundary the block pipeline invokes
//! [`ProposalController::process_proposals`], which resolves every expired
//! pending proposal by strict majority of the currently active witness
//! schedule and applies approved parameter changes through the rule table.

pub mod controller;

pub use controller::ProposalController;
