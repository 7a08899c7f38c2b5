//! Overflow-safe arithmetic for interest accrual.
//!
//! All helpers are integer-only and return `Error::Overflow` / `Error::Underflow`
//! instead of wrapping. Division truncates toward zero; the sub-basis-point
//! remainder of each computation is dropped, not carried.

use crate::errors::Error;
use crate::types::{BPS_DENOMINATOR, SECONDS_PER_DAY};

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_add(b).ok_or(Error::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_sub(b).ok_or(Error::Underflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_mul(b).ok_or(Error::Overflow)
}

/// Timestamp at which a deposit of `duration_days` started at `start_time` matures.
pub fn maturity_time(start_time: u64, duration_days: u64) -> Result<u64, Error> {
    duration_days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| start_time.checked_add(secs))
        .ok_or(Error::Overflow)
}

/// Whole days elapsed between `start_time` and `now`, capped at `duration_days`.
///
/// A clock reading earlier than `start_time` counts as zero days.
pub fn elapsed_days(start_time: u64, now: u64, duration_days: u64) -> u64 {
    let days = now.saturating_sub(start_time) / SECONDS_PER_DAY;
    days.min(duration_days)
}

/// Total interest earned by `principal` over `days` at `rate_bps` per day:
/// `principal * rate_bps * days / 10_000`, truncated.
pub fn accrued_interest(principal: i128, rate_bps: u32, days: u64) -> Result<i128, Error> {
    let per_day = mul_i128(principal, rate_bps as i128)?;
    let numerator = mul_i128(per_day, days as i128)?;
    Ok(numerator / BPS_DENOMINATOR)
}

/// Interest accrued but not yet paid out.
///
/// Saturates at zero when the global rate was lowered after earlier claims
/// were paid at a higher rate.
pub fn outstanding_interest(total_accrued: i128, claimed: i128) -> i128 {
    if total_accrued > claimed {
        total_accrued - claimed
    } else {
        0
    }
}
