//! Typed accessors over the two storage tiers.
//!
//! | Key                     | Tier           |
//! |-------------------------|----------------|
//! | `Owner`, `Token`        | `instance()`   |
//! | `DailyRateBps`          | `instance()`   |
//! | `TotalPrincipal`        | `instance()`   |
//! | `Reserve`               | `instance()`   |
//! | `Deposit(account)`      | `persistent()` |

use crate::errors::Error;
use crate::types::{DataKey, DepositRecord, BUMP_TARGET, BUMP_THRESHOLD};
use soroban_sdk::{Address, Env};

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub fn require_initialized(e: &Env) -> Result<(), Error> {
    if !is_initialized(e) {
        return Err(Error::NotInitialized);
    }
    bump_instance(e);
    Ok(())
}

pub fn read_owner(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_token(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn write_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

pub fn read_rate(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::DailyRateBps)
        .unwrap_or(0)
}

pub fn write_rate(e: &Env, rate_bps: u32) {
    e.storage().instance().set(&DataKey::DailyRateBps, &rate_bps);
}

pub fn read_total_principal(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalPrincipal)
        .unwrap_or(0)
}

pub fn write_total_principal(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalPrincipal, &total);
}

pub fn read_reserve(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::Reserve)
        .unwrap_or(0)
}

pub fn write_reserve(e: &Env, reserve: i128) {
    e.storage().instance().set(&DataKey::Reserve, &reserve);
}

/// Reads the live deposit for `account`, refreshing its TTL when present.
pub fn read_deposit(e: &Env, account: &Address) -> Option<DepositRecord> {
    let key = DataKey::Deposit(account.clone());
    let storage = e.storage().persistent();
    let record: DepositRecord = storage.get(&key)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Some(record)
}

/// Persists `record` and refreshes its TTL.
pub fn write_deposit(e: &Env, account: &Address, record: &DepositRecord) {
    let key = DataKey::Deposit(account.clone());
    let storage = e.storage().persistent();
    storage.set(&key, record);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Deletes the entry outright so a closed deposit leaves nothing behind.
pub fn remove_deposit(e: &Env, account: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Deposit(account.clone()));
}
