//! # Ledger Services
//!
//! Balance arithmetic over the account store. All mutation is checked: a
//! debit below zero or an overflowing credit aborts before anything is
//! written, so a failed transfer leaves no partial state.

use crate::domain::errors::LedgerError;
use crate::ports::AccountStore;
use shared_types::Address;
use tracing::debug;

/// Reserved account absorbing burned transaction fees. Seeded at genesis;
/// no user key controls it.
pub const FEE_SINK_ADDRESS: Address = Address::repeat(0x00);

/// Adjusts an existing account's balance by `delta` (positive credit,
/// negative debit). The account must already exist; lazy creation is the
/// caller's decision, made where the contract type allows it.
pub fn adjust_balance(
    accounts: &mut dyn AccountStore,
    address: &Address,
    delta: i64,
) -> Result<(), LedgerError> {
    let mut account = accounts
        .get(address)
        .ok_or(LedgerError::AccountNotFound { address: *address })?;

    if delta == 0 {
        return Ok(());
    }
    if delta < 0 && account.balance < -delta {
        return Err(LedgerError::InsufficientBalance {
            address: *address,
            required: -delta,
            available: account.balance,
        });
    }

    account.balance = account
        .balance
        .checked_add(delta)
        .ok_or(LedgerError::BalanceOverflow { address: *address })?;
    accounts.put(account);
    Ok(())
}

/// Moves `fee` from the payer into the fee sink. The debit is checked
/// first, so an unaffordable fee mutates nothing.
pub fn burn_fee(
    accounts: &mut dyn AccountStore,
    payer: &Address,
    fee: i64,
) -> Result<(), LedgerError> {
    let sink = accounts.fee_sink_address();
    adjust_balance(accounts, payer, -fee)?;
    adjust_balance(accounts, &sink, fee)?;
    debug!(payer = ?payer, fee, "Burned transaction fee");
    Ok(())
}
