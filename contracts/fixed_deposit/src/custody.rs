//! Value-transfer plumbing against the custody token.
//!
//! Calls go through the generated `try_` client methods so a rejected
//! transfer becomes `Error::TransferFailed` and the whole invocation,
//! including any bookkeeping already written, is rolled back by the host.

use crate::errors::Error;
use crate::storage::read_token;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, Address, Env};

/// Pulls `amount` from `from` into the ledger. `from` must have approved
/// the ledger as spender.
pub fn transfer_into_ledger(e: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let token = read_token(e)?;
    let ledger = e.current_contract_address();
    match TokenClient::new(e, &token).try_transfer_from(&ledger, from, &ledger, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(e, "inbound transfer rejected", from.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}

/// Pays `amount` out of the ledger to `to`. Zero is a no-op.
pub fn transfer_from_ledger(e: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token = read_token(e)?;
    let ledger = e.current_contract_address();
    match TokenClient::new(e, &token).try_transfer(&ledger, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(e, "payout rejected", to.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}
