use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a deposit is admitted.
///
/// # Topics
/// * `Symbol` - "deposited"
/// * `Address` - The depositing account
///
/// # Data
/// * `i128` - Principal locked
/// * `u64` - Term in days
/// * `u64` - Start timestamp
pub fn emit_deposited(
    e: &Env,
    account: &Address,
    amount: i128,
    duration_days: u64,
    start_time: u64,
) {
    let topics = (Symbol::new(e, "deposited"), account.clone());
    e.events().publish(topics, (amount, duration_days, start_time));
}

/// Emitted when accrued interest is paid out ahead of maturity.
///
/// # Topics
/// * `Symbol` - "interest_claimed"
/// * `Address` - The claiming account
///
/// # Data
/// * `i128` - Interest paid in this claim
pub fn emit_interest_claimed(e: &Env, account: &Address, amount: i128) {
    let topics = (Symbol::new(e, "interest_claimed"), account.clone());
    e.events().publish(topics, amount);
}

/// Emitted when a matured deposit is closed.
///
/// # Topics
/// * `Symbol` - "principal_withdrawn"
/// * `Address` - The withdrawing account
///
/// # Data
/// * `i128` - Principal returned
/// * `i128` - Final interest paid alongside the principal
pub fn emit_principal_withdrawn(e: &Env, account: &Address, principal: i128, interest: i128) {
    let topics = (Symbol::new(e, "principal_withdrawn"), account.clone());
    e.events().publish(topics, (principal, interest));
}

/// Emitted when the owner changes the daily rate.
///
/// # Data
/// * `u32` - Previous rate in bps
/// * `u32` - New rate in bps
pub fn emit_rate_changed(e: &Env, old_rate_bps: u32, new_rate_bps: u32) {
    let topics = (Symbol::new(e, "rate_changed"),);
    e.events().publish(topics, (old_rate_bps, new_rate_bps));
}

/// Emitted when tokens are added to the interest reserve.
pub fn emit_reserve_funded(e: &Env, funder: &Address, amount: i128, reserve: i128) {
    let topics = (Symbol::new(e, "reserve_funded"), funder.clone());
    e.events().publish(topics, (amount, reserve));
}

/// Emitted when the owner pulls tokens out of the interest reserve.
pub fn emit_reserve_withdrawn(e: &Env, to: &Address, amount: i128, reserve: i128) {
    let topics = (Symbol::new(e, "reserve_withdrawn"), to.clone());
    e.events().publish(topics, (amount, reserve));
}

pub fn emit_ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
    let topics = (Symbol::new(e, "ownership_transferred"),);
    e.events().publish(topics, (previous.clone(), new_owner.clone()));
}
