//! # Modify Supply Actuator
//!
//! Mints to or burns from a customer account, moving total supply in the
//! same mutation. Two privileged addresses are configured as chain
//! parameters: the increase authority may mint, the decrease authority may
//! burn. `validate` enforces the authority match; `execute` trusts that
//! the check already ran and does not re-verify.
//!
//! The fee is always debited from the owner (authority) address, never the
//! customer. On the increase path a missing customer account is created
//! lazily and the system account-creation fee is added; on the decrease
//! path a missing customer is a hard validation failure.

use crate::actuators::{account_creation_fee, Actuator};
use crate::domain::contract::{Contract, ModifySupplyContract, SupplyDirection};
use crate::domain::errors::{ExecutionError, ValidationError};
use crate::domain::result::{ResultCode, TransactionResult};
use mc_state::{adjust_balance, burn_fee, ChainContext};
use shared_types::{Account, AccountType, Address};
use tracing::debug;

const EXPECTED_TYPE: &str = "ModifySupplyContract";

pub struct ModifySupplyActuator {
    contract: Contract,
}

impl ModifySupplyActuator {
    #[must_use]
    pub fn new(contract: Contract) -> Self {
        Self { contract }
    }

    fn unpack(&self) -> Option<&ModifySupplyContract> {
        match &self.contract {
            Contract::ModifySupply(contract) => Some(contract),
            _ => None,
        }
    }

    fn apply(&self, ctx: &mut ChainContext<'_>, fee: &mut i64) -> Result<(), ExecutionError> {
        let contract = self
            .unpack()
            .ok_or_else(|| ExecutionError::ContractTypeMismatch {
                expected: EXPECTED_TYPE,
                actual: self.contract.type_name(),
            })?;
        let owner = Address::from_slice(&contract.owner_address)
            .map_err(|e| ExecutionError::MalformedPayload(e.to_string()))?;
        let customer = Address::from_slice(&contract.customer_address)
            .map_err(|e| ExecutionError::MalformedPayload(e.to_string()))?;

        if contract.direction == SupplyDirection::Increase && !ctx.accounts.has(&customer) {
            let default_permissions = ctx.properties.allow_multi_sign() == 1;
            ctx.accounts.put(Account::new(
                customer,
                AccountType::Normal,
                ctx.properties.head_block_time(),
                default_permissions,
            ));
            *fee += account_creation_fee(&*ctx.properties);
        }

        let total_before = ctx.properties.total_supply();
        debug!(
            total_supply = total_before,
            amount = contract.amount,
            direction = %contract.direction,
            "Supply modification begin"
        );

        burn_fee(ctx.accounts, &owner, *fee)?;

        // The balance change and the supply counter move together; the
        // counter is never recomputed by scanning accounts.
        let total_after = match contract.direction {
            SupplyDirection::Increase => {
                adjust_balance(ctx.accounts, &customer, contract.amount)?;
                total_before
                    .checked_add(contract.amount)
                    .ok_or(ExecutionError::SupplyOverflow)?
            }
            SupplyDirection::Decrease => {
                adjust_balance(ctx.accounts, &customer, -contract.amount)?;
                total_before
                    .checked_sub(contract.amount)
                    .ok_or(ExecutionError::SupplyOverflow)?
            }
        };
        ctx.properties.save_total_supply(total_after);

        debug!(total_supply = total_after, "Supply modification complete");
        Ok(())
    }
}

impl Actuator for ModifySupplyActuator {
    fn validate(&self, ctx: &ChainContext<'_>) -> Result<(), ValidationError> {
        let contract = self
            .unpack()
            .ok_or_else(|| ValidationError::ContractTypeMismatch {
                expected: EXPECTED_TYPE,
                actual: self.contract.type_name(),
            })?;

        let owner = Address::from_slice(&contract.owner_address)
            .map_err(|source| ValidationError::InvalidAddress {
                field: "owner",
                source,
            })?;
        let owner_account =
            ctx.accounts
                .get(&owner)
                .ok_or_else(|| ValidationError::AccountNotFound {
                    address: owner.to_hex(),
                })?;

        let authority = match contract.direction {
            SupplyDirection::Increase => ctx.properties.supply_increase_authority(),
            SupplyDirection::Decrease => ctx.properties.supply_decrease_authority(),
        };
        if authority != Some(owner) {
            return Err(ValidationError::UnauthorizedSupplyChange {
                direction: contract.direction,
            });
        }

        let customer = Address::from_slice(&contract.customer_address)
            .map_err(|source| ValidationError::InvalidAddress {
                field: "customer",
                source,
            })?;

        let mut fee = self.calc_fee();
        let customer_account = ctx.accounts.get(&customer);
        if customer_account.is_none() {
            match contract.direction {
                SupplyDirection::Increase => {
                    fee += account_creation_fee(&*ctx.properties);
                }
                SupplyDirection::Decrease => {
                    return Err(ValidationError::AccountNotFound {
                        address: customer.to_hex(),
                    });
                }
            }
        }

        if owner_account.balance < fee {
            return Err(ValidationError::InsufficientFee {
                fee,
                balance: owner_account.balance,
            });
        }
        if contract.amount <= 0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        if contract.direction == SupplyDirection::Decrease {
            // Existence was checked above on this path.
            let balance = customer_account.map_or(0, |account| account.balance);
            if balance < contract.amount {
                return Err(ValidationError::InsufficientBalance {
                    amount: contract.amount,
                    balance,
                });
            }
        }
        Ok(())
    }

    fn execute(
        &self,
        ctx: &mut ChainContext<'_>,
        result: &mut TransactionResult,
    ) -> Result<bool, ExecutionError> {
        let mut fee = self.calc_fee();
        match self.apply(ctx, &mut fee) {
            Ok(()) => {
                result.set_status(fee, ResultCode::Success);
                Ok(true)
            }
            Err(e) => {
                debug!(error = %e, "Supply modification failed");
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
            Contract::ModifySupply(contract) => &contract.owner_address,
            _ => &[],
        }
    }
}
