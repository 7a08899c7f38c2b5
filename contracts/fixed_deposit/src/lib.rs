//! Fixed-Term Deposit Ledger
//!
//! Lets any address lock a token for a whole number of days. While the
//! deposit is live it accrues `daily_rate_bps` basis points of principal per
//! elapsed day; accrued interest can be claimed at any time, and once the term
//! has elapsed the depositor reclaims principal plus any interest still owed.
//!
//! ## Key design decisions
//!
//! - **One live deposit per account**: a second deposit is rejected until the
//!   first is withdrawn; withdrawal deletes the record outright.
//! - **Checks-Effects-Interactions**: bookkeeping is written *before* every
//!   outbound token transfer.
//! - **Typed errors, atomic failure**: every mutation returns
//!   `Result<_, Error>`; an `Err` rolls back all writes and events of the call.
//! - **Integer-only accrual**: `principal * rate_bps * days / 10_000`, checked
//!   and truncating. Accrual stops at maturity.
//! - **Single global rate**: accrual is evaluated at claim time with the
//!   current rate, so a rate change also reprices elapsed-but-unclaimed days.
//! - **Interest reserve**: interest is paid only from tokens funded into the
//!   reserve, never from other depositors' principal.

#![no_std]

mod custody;
mod errors;
mod events;
mod math;
mod storage;
mod types;

pub use errors::{Error, ErrorCategory};
pub use types::{DataKey, DepositRecord, BPS_DENOMINATOR, SECONDS_PER_DAY};

use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[cfg(test)]
mod test_helpers;


// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_owner(e: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = storage::read_owner(e)?;
    if owner != *caller {
        return Err(Error::NotOwner);
    }
    storage::bump_instance(e);
    Ok(())
}

/// Interest owed on `record` right now under the current global rate.
fn pending_for(e: &Env, record: &DepositRecord) -> Result<i128, Error> {
    let now = e.ledger().timestamp();
    let days = math::elapsed_days(record.start_time, now, record.duration);
    let total = math::accrued_interest(record.principal, storage::read_rate(e), days)?;
    Ok(math::outstanding_interest(total, record.claimed_interest))
}

/// Earmarks `amount` of the reserve for a payout.
fn debit_reserve(e: &Env, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let reserve = storage::read_reserve(e);
    if reserve < amount {
        log!(e, "reserve too small", reserve, amount);
        return Err(Error::InsufficientReserve);
    }
    storage::write_reserve(e, math::sub_i128(reserve, amount)?);
    Ok(())
}

/// Earmarks as much of `owed` as the reserve holds and returns that amount.
/// Principal never waits on the reserve, so any shortfall is forfeited.
fn debit_reserve_up_to(e: &Env, owed: i128) -> Result<i128, Error> {
    let reserve = storage::read_reserve(e);
    let covered = owed.min(reserve);
    if covered < owed {
        log!(e, "interest shortfall at withdrawal", owed, covered);
    }
    debit_reserve(e, covered)?;
    Ok(covered)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct FixedDeposit;

#[contractimpl]
impl FixedDeposit {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization: stores the owner, the custody token and the
    /// starting daily rate.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called a second time
    pub fn initialize(
        e: Env,
        owner: Address,
        token: Address,
        daily_rate_bps: u32,
    ) -> Result<(), Error> {
        if storage::is_initialized(&e) {
            return Err(Error::AlreadyInitialized);
        }
        storage::write_owner(&e, &owner);
        storage::write_token(&e, &token);
        storage::write_rate(&e, daily_rate_bps);
        storage::bump_instance(&e);
        Ok(())
    }

    // ── Deposit lifecycle ──────────────────────────────────────────────────

    /// Lock `amount` tokens for `duration_days` days.
    ///
    /// `account` must have approved the ledger to spend `amount`. The record
    /// is created only after the tokens have arrived.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount <= 0`
    /// * `InvalidDuration` - `duration_days == 0`
    /// * `AlreadyActive` - `account` already holds a live deposit
    /// * `Overflow` - the maturity timestamp does not fit in a `u64`, or the
    ///   interest accrued over the full term at the current rate would not fit
    ///   in an `i128`
    /// * `TransferFailed` - the token rejected the inbound transfer
    pub fn deposit(
        e: Env,
        account: Address,
        amount: i128,
        duration_days: u64,
    ) -> Result<DepositRecord, Error> {
        account.require_auth();
        storage::require_initialized(&e)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if duration_days == 0 {
            return Err(Error::InvalidDuration);
        }
        if storage::read_deposit(&e, &account).is_some() {
            log!(&e, "deposit rejected: already active", account.clone());
            return Err(Error::AlreadyActive);
        }

        let start_time = e.ledger().timestamp();
        math::maturity_time(start_time, duration_days)?;
        math::accrued_interest(amount, storage::read_rate(&e), duration_days)?;
        let total = math::add_i128(storage::read_total_principal(&e), amount)?;

        custody::transfer_into_ledger(&e, &account, amount)?;

        let record = DepositRecord {
            principal: amount,
            start_time,
            duration: duration_days,
            claimed_interest: 0,
        };
        storage::write_deposit(&e, &account, &record);
        storage::write_total_principal(&e, total);

        events::emit_deposited(&e, &account, amount, duration_days, start_time);
        Ok(record)
    }

    /// Pay out all interest accrued so far. Returns the amount paid.
    ///
    /// # Errors
    /// * `NothingToClaim` - no live deposit, or nothing accrued since the last claim
    /// * `InsufficientReserve` - the reserve cannot cover the payout
    /// * `TransferFailed` - the payout was rejected; the claim is rolled back
    pub fn claim_interest(e: Env, account: Address) -> Result<i128, Error> {
        account.require_auth();
        storage::require_initialized(&e)?;

        let mut record = storage::read_deposit(&e, &account).ok_or(Error::NothingToClaim)?;
        let pending = pending_for(&e, &record)?;
        if pending == 0 {
            return Err(Error::NothingToClaim);
        }

        debit_reserve(&e, pending)?;
        record.claimed_interest = math::add_i128(record.claimed_interest, pending)?;
        storage::write_deposit(&e, &account, &record);

        custody::transfer_from_ledger(&e, &account, pending)?;

        events::emit_interest_claimed(&e, &account, pending);
        Ok(pending)
    }

    /// Close a matured deposit: returns principal plus any interest still owed
    /// and deletes the record. Returns the total paid out.
    ///
    /// Principal is always returned in full. If the reserve has been drawn
    /// below the final interest, only what the reserve holds is paid on top.
    ///
    /// # Errors
    /// * `NoActiveDeposit` - `account` holds no live deposit
    /// * `NotMatured` - called before `start_time + duration * 86_400`
    /// * `TransferFailed` - the payout was rejected; the record is restored
    pub fn withdraw_principal(e: Env, account: Address) -> Result<i128, Error> {
        account.require_auth();
        storage::require_initialized(&e)?;

        let record = storage::read_deposit(&e, &account).ok_or(Error::NoActiveDeposit)?;

        let maturity = math::maturity_time(record.start_time, record.duration)?;
        if e.ledger().timestamp() < maturity {
            return Err(Error::NotMatured);
        }

        let interest = debit_reserve_up_to(&e, pending_for(&e, &record)?)?;

        // CEI: clear the record before paying out.
        storage::remove_deposit(&e, &account);
        let total = math::sub_i128(storage::read_total_principal(&e), record.principal)?;
        storage::write_total_principal(&e, total);

        let payout = math::add_i128(record.principal, interest)?;
        custody::transfer_from_ledger(&e, &account, payout)?;

        events::emit_principal_withdrawn(&e, &account, record.principal, interest);
        Ok(payout)
    }

    // ── Owner operations ───────────────────────────────────────────────────

    /// Replace the global daily rate. No bounds are enforced; zero pauses
    /// accrual for every live deposit.
    ///
    /// # Errors
    /// * `NotOwner` - `caller` is not the owner
    pub fn set_rate(e: Env, caller: Address, new_rate_bps: u32) -> Result<(), Error> {
        require_owner(&e, &caller)?;
        let old = storage::read_rate(&e);
        storage::write_rate(&e, new_rate_bps);
        events::emit_rate_changed(&e, old, new_rate_bps);
        Ok(())
    }

    /// Hand the owner role to `new_owner`.
    ///
    /// # Errors
    /// * `NotOwner` - `caller` is not the owner
    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_owner(&e, &caller)?;
        storage::write_owner(&e, &new_owner);
        events::emit_ownership_transferred(&e, &caller, &new_owner);
        Ok(())
    }

    /// Add `amount` tokens to the interest reserve. Anyone may fund it;
    /// `funder` must have approved the ledger. Returns the new reserve.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount <= 0`
    /// * `TransferFailed` - the token rejected the inbound transfer
    pub fn fund_reserve(e: Env, funder: Address, amount: i128) -> Result<i128, Error> {
        funder.require_auth();
        storage::require_initialized(&e)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let reserve = math::add_i128(storage::read_reserve(&e), amount)?;
        custody::transfer_into_ledger(&e, &funder, amount)?;
        storage::write_reserve(&e, reserve);

        events::emit_reserve_funded(&e, &funder, amount, reserve);
        Ok(reserve)
    }

    /// Move `amount` of unused reserve to `to`. Owner only. Returns the
    /// remaining reserve.
    ///
    /// # Errors
    /// * `NotOwner` - `caller` is not the owner
    /// * `InvalidAmount` - `amount <= 0`
    /// * `InsufficientReserve` - `amount` exceeds the reserve
    /// * `TransferFailed` - the payout was rejected
    pub fn withdraw_reserve(
        e: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        require_owner(&e, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        debit_reserve(&e, amount)?;
        custody::transfer_from_ledger(&e, &to, amount)?;

        let reserve = storage::read_reserve(&e);
        events::emit_reserve_withdrawn(&e, &to, amount, reserve);
        Ok(reserve)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Interest accrued but not yet claimed. Zero when `account` has no
    /// live deposit. Fails only if the accrual product overflows `i128`.
    pub fn pending_interest(e: Env, account: Address) -> Result<i128, Error> {
        match storage::read_deposit(&e, &account) {
            Some(record) => pending_for(&e, &record),
            None => Ok(0),
        }
    }

    /// The live deposit for `account`, if any.
    pub fn get_deposit(e: Env, account: Address) -> Option<DepositRecord> {
        storage::read_deposit(&e, &account)
    }

    /// Returns `true` once the deposit's term has elapsed.
    pub fn is_matured(e: Env, account: Address) -> Result<bool, Error> {
        let record = storage::read_deposit(&e, &account).ok_or(Error::NoActiveDeposit)?;
        let maturity = math::maturity_time(record.start_time, record.duration)?;
        Ok(e.ledger().timestamp() >= maturity)
    }

    /// Seconds until maturity; 0 once matured.
    pub fn time_remaining(e: Env, account: Address) -> Result<u64, Error> {
        let record = storage::read_deposit(&e, &account).ok_or(Error::NoActiveDeposit)?;
        let maturity = math::maturity_time(record.start_time, record.duration)?;
        Ok(maturity.saturating_sub(e.ledger().timestamp()))
    }

    /// Current global daily rate in basis points.
    pub fn rate(e: Env) -> u32 {
        storage::read_rate(&e)
    }

    /// The address allowed to change the rate and manage the reserve.
    pub fn owner(e: Env) -> Result<Address, Error> {
        storage::read_owner(&e)
    }

    /// The token held in custody.
    pub fn token(e: Env) -> Result<Address, Error> {
        storage::read_token(&e)
    }

    /// Sum of principal across all live deposits.
    pub fn total_principal(e: Env) -> i128 {
        storage::read_total_principal(&e)
    }

    /// Tokens currently available for interest payouts.
    pub fn reserve(e: Env) -> i128 {
        storage::read_reserve(&e)
    }
}
