//! Shared test helpers for fixed_deposit tests.

#![cfg(test)]

use crate::{FixedDeposit, FixedDepositClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Default mint: large enough for all test scenarios.
pub const DEFAULT_MINT: i128 = 100_000_000_000_000;

/// Reserve funded by `setup_funded`.
pub const DEFAULT_RESERVE: i128 = 1_000_000_000;

/// Default daily rate: 10 bps (0.1 % per day).
pub const DEFAULT_RATE_BPS: u32 = 10;

/// One day in seconds.
pub const ONE_DAY: u64 = 86_400;

/// Full environment setup: deploys ledger + token, mints to `owner` and
/// `account`, approves the ledger for both.
/// Returns `(client, owner, account, token_address, contract_id)`.
pub fn setup(
    e: &Env,
) -> (
    FixedDepositClient<'_>,
    Address,
    Address,
    Address,
    Address,
) {
    setup_with_rate(e, DEFAULT_RATE_BPS)
}

pub fn setup_with_rate(
    e: &Env,
    rate_bps: u32,
) -> (
    FixedDepositClient<'_>,
    Address,
    Address,
    Address,
    Address,
) {
    e.mock_all_auths();

    let contract_id = e.register(FixedDeposit, ());
    let client = FixedDepositClient::new(e, &contract_id);
    let owner = Address::generate(e);
    let account = Address::generate(e);

    let token_admin = Address::generate(e);
    let stellar_asset = e
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    let asset_admin = StellarAssetClient::new(e, &stellar_asset);
    asset_admin.mint(&owner, &DEFAULT_MINT);
    asset_admin.mint(&account, &DEFAULT_MINT);

    let token = TokenClient::new(e, &stellar_asset);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    token.approve(&owner, &contract_id, &DEFAULT_MINT, &expiry_ledger);
    token.approve(&account, &contract_id, &DEFAULT_MINT, &expiry_ledger);

    client.initialize(&owner, &stellar_asset, &rate_bps);

    (client, owner, account, stellar_asset, contract_id)
}

/// Like `setup_with_rate`, with `DEFAULT_RESERVE` already funded by the owner.
pub fn setup_funded(
    e: &Env,
    rate_bps: u32,
) -> (
    FixedDepositClient<'_>,
    Address,
    Address,
    Address,
    Address,
) {
    let (client, owner, account, token, contract_id) = setup_with_rate(e, rate_bps);
    client.fund_reserve(&owner, &DEFAULT_RESERVE);
    (client, owner, account, token, contract_id)
}

/// Mints `amount` to a fresh account and approves the ledger to pull it.
pub fn new_depositor(e: &Env, token: &Address, contract_id: &Address, amount: i128) -> Address {
    let depositor = Address::generate(e);
    StellarAssetClient::new(e, token).mint(&depositor, &amount);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    TokenClient::new(e, token).approve(&depositor, contract_id, &amount, &expiry_ledger);
    depositor
}

/// Advances the ledger clock by `secs`.
pub fn advance(e: &Env, secs: u64) {
    use soroban_sdk::testutils::Ledger;
    e.ledger().with_mut(|li| li.timestamp += secs);
}
