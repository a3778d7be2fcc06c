//! # Proposal Create Actuator
//!
//! Inserts a pending governance proposal. The proposer must be a
//! registered witness with an existing account, and every proposed
//! parameter entry is validated against the rule table, the same table
//! the governance controller consults again at apply time.
//!
//! The expiration is the first maintenance boundary at or after
//! `head_time + proposal_expiration_ms`, so a proposal is always resolved
//! by a maintenance pass, never mid-interval.

use crate::actuators::Actuator;
use crate::domain::contract::{Contract, ProposalCreateContract};
use crate::domain::errors::{ExecutionError, ValidationError};
use crate::domain::result::{ResultCode, TransactionResult};
use mc_state::{validate_param, ChainContext, Proposal};
use shared_types::Address;
use tracing::{debug, info};

const EXPECTED_TYPE: &str = "ProposalCreateContract";

pub struct ProposalCreateActuator {
    contract: Contract,
}

impl ProposalCreateActuator {
    #[must_use]
    pub fn new(contract: Contract) -> Self {
        Self { contract }
    }

    fn unpack(&self) -> Option<&ProposalCreateContract> {
        match &self.contract {
            Contract::ProposalCreate(contract) => Some(contract),
            _ => None,
        }
    }

    fn apply(&self, ctx: &mut ChainContext<'_>) -> Result<u64, ExecutionError> {
        let contract = self
            .unpack()
            .ok_or_else(|| ExecutionError::ContractTypeMismatch {
                expected: EXPECTED_TYPE,
                actual: self.contract.type_name(),
            })?;
        let proposer = Address::from_slice(&contract.owner_address)
            .map_err(|e| ExecutionError::MalformedPayload(e.to_string()))?;

        let id = ctx.properties.latest_proposal_num() + 1;
        let now = ctx.properties.head_block_time();

        let interval = ctx.properties.maintenance_interval();
        let next_maintenance = ctx.properties.next_maintenance_time();
        let open_until = now + ctx.config.proposal_expiration_ms;
        let round = (open_until - next_maintenance) / interval;
        let expiration = next_maintenance + (round + 1) * interval;

        let proposal = Proposal::new(id, proposer, contract.parameters.clone(), now, expiration);
        debug!(id, expiration, parameters = contract.parameters.len(), "Inserting proposal");

        ctx.proposals.put(proposal)?;
        ctx.properties.save_latest_proposal_num(id);
        info!(id, proposer = %proposer, "Created proposal");
        Ok(id)
    }
}

impl Actuator for ProposalCreateActuator {
    fn validate(&self, ctx: &ChainContext<'_>) -> Result<(), ValidationError> {
        let contract = self
            .unpack()
            .ok_or_else(|| ValidationError::ContractTypeMismatch {
                expected: EXPECTED_TYPE,
                actual: self.contract.type_name(),
            })?;

        let proposer = Address::from_slice(&contract.owner_address)
            .map_err(|source| ValidationError::InvalidAddress {
                field: "owner",
                source,
            })?;
        if !ctx.accounts.has(&proposer) {
            return Err(ValidationError::AccountNotFound {
                address: proposer.to_hex(),
            });
        }
        if !ctx.witnesses.has(&proposer) {
            return Err(ValidationError::WitnessNotFound {
                address: proposer.to_hex(),
            });
        }

        if contract.parameters.is_empty() {
            return Err(ValidationError::EmptyParameters);
        }
        for (id, value) in &contract.parameters {
            validate_param(*id, value, ctx)?;
        }
        Ok(())
    }

    fn execute(
        &self,
        ctx: &mut ChainContext<'_>,
        result: &mut TransactionResult,
    ) -> Result<bool, ExecutionError> {
        let fee = self.calc_fee();
        match self.apply(ctx) {
            Ok(_) => {
                result.set_status(fee, ResultCode::Success);
                Ok(true)
            }
            Err(e) => {
                debug!(error = %e, "Proposal creation failed");
                result.set_status(fee, ResultCode::Failed);
                Err(e)
            }
        }
    }

    fn calc_fee(&self) -> i64 {
        0
    }

    fn owner_address(&self) -> &[u8] {
        match &self.contract {
            Contract::ProposalCreate(contract) => &contract.owner_address,
            _ => &[],
        }
    }
}
