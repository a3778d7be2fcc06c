//! # Contract Payloads
//!
//! Typed payloads a transaction can carry, one variant per actuator.
//! Addresses arrive as raw bytes from the wire layer and are only decoded
//! into [`shared_types::Address`] after structural validation inside the
//! actuator; nothing here trusts its input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Direction of a supply modification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyDirection {
    Increase,
    Decrease,
}

impl fmt::Display for SupplyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplyDirection::Increase => write!(f, "increase"),
            SupplyDirection::Decrease => write!(f, "decrease"),
        }
    }
}

/// Mint or burn `amount` on the customer account, authorized by the
/// direction's configured authority address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifySupplyContract {
    /// Fee payer and authorizer; must match the configured authority.
    pub owner_address: Vec<u8>,
    /// Account whose balance the supply change lands on.
    pub customer_address: Vec<u8>,
    /// Amount in the smallest unit; must be positive.
    pub amount: i64,
    pub direction: SupplyDirection,
}

/// Create a governance proposal over a set of chain parameter changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalCreateContract {
    /// Proposing witness; fee payer.
    pub owner_address: Vec<u8>,
    /// Proposed `{parameter id -> encoded value}` entries, ascending by id.
    pub parameters: BTreeMap<u32, String>,
}

/// A transaction's typed contract payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contract {
    ModifySupply(ModifySupplyContract),
    ProposalCreate(ProposalCreateContract),
}

impl Contract {
    /// The contract's type tag, used in mismatch diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Contract::ModifySupply(_) => "ModifySupplyContract",
            Contract::ProposalCreate(_) => "ProposalCreateContract",
        }
    }
}
