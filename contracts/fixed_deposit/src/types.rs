use soroban_sdk::{contracttype, Address};

// ─── Constants ─────────────────────────────────────────────────────────────

/// Seconds in one accrual day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Basis-point denominator (10_000 bps = 100 %).
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Ledgers closed per day at 5 s/ledger.
pub const DAY_IN_LEDGERS: u32 = 17_280;
/// TTL target after a bump (~30 days).
pub const BUMP_TARGET: u32 = 30 * DAY_IN_LEDGERS;
/// Remaining TTL below which any access re-extends to `BUMP_TARGET`.
pub const BUMP_THRESHOLD: u32 = BUMP_TARGET - DAY_IN_LEDGERS;

// ─── Deposit state ─────────────────────────────────────────────────────────

/// The single live deposit held by one account.
///
/// A record only exists while `principal > 0`; withdrawal removes the
/// storage entry entirely so no residual fields survive.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRecord {
    /// Deposited amount in the token's smallest unit.
    pub principal: i128,
    /// Ledger timestamp at which the deposit was admitted.
    pub start_time: u64,
    /// Term length in whole days, fixed at deposit time.
    pub duration: u64,
    /// Cumulative interest already paid out for this record.
    pub claimed_interest: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// Globals live in `instance()`, deposits in `persistent()`.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Account allowed to change the rate and manage the reserve.
    Owner,
    /// SEP-41 token held in custody.
    Token,
    /// Interest accrued per elapsed day, in basis points of principal.
    DailyRateBps,
    /// Sum of principal across all live deposits.
    TotalPrincipal,
    /// Tokens set aside for interest payouts.
    Reserve,
    /// Per-account live deposit.
    Deposit(Address),
}
