//! Actuator trait and per-contract-type dispatch.

mod modify_supply;
mod proposal_create;

pub use modify_supply::ModifySupplyActuator;
pub use proposal_create::ProposalCreateActuator;

use crate::domain::contract::Contract;
use crate::domain::errors::{ExecutionError, ValidationError};
use crate::domain::result::TransactionResult;
use mc_state::{ChainContext, DynamicPropertiesStore};

/// The common contract every actuator implements.
pub trait Actuator {
    /// Read-only checks. Any error rejects the transaction before it can
    /// enter a block; nothing is mutated.
    fn validate(&self, ctx: &ChainContext<'_>) -> Result<(), ValidationError>;

    /// Applies the contract. Writes the final status and fee into
    /// `result` on both the success and the failure path.
    fn execute(
        &self,
        ctx: &mut ChainContext<'_>,
        result: &mut TransactionResult,
    ) -> Result<bool, ExecutionError>;

    /// Base fee for the contract type.
    fn calc_fee(&self) -> i64;

    /// Raw bytes of the fee payer / authorizer address. Empty when the
    /// payload is not of this actuator's type.
    fn owner_address(&self) -> &[u8];
}

/// Dispatches a contract to its actuator by type tag.
#[must_use]
pub fn actuator_for(contract: Contract) -> Box<dyn Actuator> {
    match contract {
        c @ Contract::ModifySupply(_) => Box::new(ModifySupplyActuator::new(c)),
        c @ Contract::ProposalCreate(_) => Box::new(ProposalCreateActuator::new(c)),
    }
}

/// System fee charged when `execute` has to create a missing target
/// account. Consulted by both `validate` and `execute` so the two can
/// never disagree on fee affordability.
pub(crate) fn account_creation_fee(properties: &dyn DynamicPropertiesStore) -> i64 {
    properties.create_account_fee_in_system_contract()
}
