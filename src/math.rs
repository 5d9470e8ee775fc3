//! Pure staking math — extracted for property tests and Kani verification.
//!
//! No Solana/Pubkey dependencies. Just arithmetic.
//! Every function documents its rounding direction; all intermediates go
//! through u128 so no input combination can panic.

/// Basis-point denominator for all fee rates.
pub const RATIO: u64 = 10_000;

/// Seconds per lockup day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Ceiling division. `None` only when `b == 0`.
pub fn ceil_div(a: u128, b: u128) -> Option<u128> {
    if b == 0 {
        return None;
    }
    Some(a / b + u128::from(a % b != 0))
}

/// Absolute deadline for a new lock: `now + lockup_days * SECONDS_PER_DAY`.
///
/// The source system computed this with wrap-permitting arithmetic; here the
/// ops are checked. With `lockup_days <= u32::MAX` the product is below 2^49,
/// so for any realistic clock value the checked path cannot fail — `None`
/// would mean a corrupted clock, surfaced as an explicit error upstream.
pub fn lockup_deadline(now: i64, lockup_days: u32) -> Option<i64> {
    let lock_seconds = i64::from(lockup_days).checked_mul(SECONDS_PER_DAY)?;
    now.checked_add(lock_seconds)
}

/// Deadline after extending an open lock by `extend_days`.
pub fn extend_deadline(deadline: i64, extend_days: u32) -> Option<i64> {
    let extra = i64::from(extend_days).checked_mul(SECONDS_PER_DAY)?;
    deadline.checked_add(extra)
}

/// Whole days between `now` and `new_deadline`, rounded DOWN.
/// Used to re-validate an extended lock against the configured range.
pub fn floor_days_between(now: i64, new_deadline: i64) -> Option<u64> {
    if new_deadline < now {
        return None;
    }
    Some(((new_deadline - now) / SECONDS_PER_DAY) as u64)
}

/// Remaining locked days at exit time, rounded UP.
///
/// Returns 0 once `now >= deadline`. The ceiling means an exit one second
/// before the deadline still counts a full day — the clawback never
/// under-collects.
pub fn remaining_days(deadline: i64, now: i64) -> u64 {
    if now >= deadline {
        return 0;
    }
    let remaining = (deadline - now) as u128;
    // SECONDS_PER_DAY > 0, so ceil_div cannot fail
    ceil_div(remaining, SECONDS_PER_DAY as u128).unwrap_or(0) as u64
}

/// Yield-claim tokens minted for a stake: `principal * lockup_days`.
///
/// A day-weighted unit, not a currency amount. `None` when the product
/// exceeds u64.
pub fn yield_claim_for_stake(principal: u64, lockup_days: u32) -> Option<u64> {
    let yt = (principal as u128).checked_mul(lockup_days as u128)?;
    if yt > u64::MAX as u128 {
        None
    } else {
        Some(yt as u64)
    }
}

/// Principal-claim tokens under the additive-yield policy.
///
/// `pt = principal - yield_claim * total_yield_pool / total_yield_supply`.
/// The depositor pre-pays for a pro-rata slice of the pooled yield by
/// receiving fewer PT. The discount divides rounding DOWN; an empty YT
/// supply means no pool to buy into, so PT is 1:1.
///
/// `None` when the discount exceeds the principal (the pool is too large
/// for this stake to buy into) or on overflow.
pub fn principal_claim_additive(
    principal: u64,
    yield_claim: u64,
    total_yield_pool: u64,
    total_yield_supply: u64,
) -> Option<u64> {
    if total_yield_supply == 0 {
        return Some(principal);
    }
    let discount = (yield_claim as u128)
        .checked_mul(total_yield_pool as u128)?
        .checked_div(total_yield_supply as u128)?;
    if discount > principal as u128 {
        return None;
    }
    Some(principal - discount as u64)
}

/// Principal-claim tokens under the share-ratio policy.
///
/// First depositor (supply == 0 and staked == 0): 1:1.
/// Otherwise `pt = principal * total_principal_supply / total_staked`
/// (pro-rata, rounded DOWN — pool-favoring).
///
/// Deposits are blocked (`None`) when exactly one of supply/staked is zero:
/// orphaned pool value would be claimable by the next depositor, and a
/// valueless supply would be diluted at 1:1.
pub fn principal_claim_share_ratio(
    principal: u64,
    total_principal_supply: u64,
    total_staked: u64,
) -> Option<u64> {
    if total_principal_supply == 0 && total_staked == 0 {
        Some(principal)
    } else if total_principal_supply == 0 || total_staked == 0 {
        None
    } else {
        let pt = (principal as u128)
            .checked_mul(total_principal_supply as u128)?
            .checked_div(total_staked as u128)?;
        if pt > u64::MAX as u128 {
            None
        } else {
            Some(pt as u64)
        }
    }
}

/// Principal redeemed when `share` of a position's `principal_claim_amount`
/// is burned: `principal_amount * share / principal_claim_amount`, rounded
/// DOWN. `None` when the claim amount is zero.
pub fn principal_share(
    principal_amount: u64,
    share: u64,
    principal_claim_amount: u64,
) -> Option<u64> {
    if principal_claim_amount == 0 {
        return None;
    }
    let ps = (principal_amount as u128)
        .checked_mul(share as u128)?
        .checked_div(principal_claim_amount as u128)?;
    if ps > u64::MAX as u128 {
        None
    } else {
        Some(ps as u64)
    }
}

/// Yield-claim clawback for an early exit.
///
/// `principal_share * days_left * (RATIO + burned_yt_fee_rate) / RATIO`.
/// `days_left` has already been rounded UP by [`remaining_days`]; the
/// basis-point division rounds DOWN. A zero fee rate degenerates to the
/// exact product `principal_share * days_left` (atomic model).
pub fn yield_claim_burn(
    principal_share: u64,
    days_left: u64,
    burned_yt_fee_rate: u16,
) -> Option<u64> {
    let base = (principal_share as u128).checked_mul(days_left as u128)?;
    let inflated = base
        .checked_mul((RATIO + burned_yt_fee_rate as u64) as u128)?
        .checked_div(RATIO as u128)?;
    if inflated > u64::MAX as u128 {
        None
    } else {
        Some(inflated as u64)
    }
}

/// Early-exit fee on the redeemed principal:
/// `principal_share * fee_rate / RATIO`, rounded DOWN.
///
/// The setter bounds `fee_rate <= RATIO`, so `fee <= principal_share`.
pub fn exit_fee(principal_share: u64, fee_rate: u16) -> Option<u64> {
    let fee = (principal_share as u128)
        .checked_mul(fee_rate as u128)?
        .checked_div(RATIO as u128)?;
    if fee > u64::MAX as u128 {
        None
    } else {
        Some(fee as u64)
    }
}

/// Yield paid out for burning `burned` YT:
/// `total_yield_pool * burned / total_yield_supply`, rounded DOWN —
/// pool-favoring. `None` when the YT supply is zero.
///
/// With `burned <= total_yield_supply` the result never exceeds
/// `total_yield_pool`, so the caller's pool decrement cannot underflow
/// within one call.
pub fn yield_for_burn(
    total_yield_pool: u64,
    total_yield_supply: u64,
    burned: u64,
) -> Option<u64> {
    if total_yield_supply == 0 {
        return None;
    }
    let amount = (total_yield_pool as u128)
        .checked_mul(burned as u128)?
        .checked_div(total_yield_supply as u128)?;
    if amount > u64::MAX as u128 {
        None
    } else {
        Some(amount as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Lockup Deadlines ──

    #[test]
    fn test_deadline_basic() {
        assert_eq!(lockup_deadline(1_000, 10), Some(1_000 + 10 * 86_400));
    }

    #[test]
    fn test_deadline_zero_days() {
        assert_eq!(lockup_deadline(500, 0), Some(500));
    }

    #[test]
    fn test_deadline_max_days_no_overflow() {
        // u32::MAX days ≈ 2^48.6 seconds, far below i64::MAX
        assert!(lockup_deadline(1_700_000_000, u32::MAX).is_some());
    }

    #[test]
    fn test_extend_deadline() {
        assert_eq!(extend_deadline(100_000, 5), Some(100_000 + 5 * 86_400));
    }

    #[test]
    fn test_floor_days_between() {
        assert_eq!(floor_days_between(0, 86_400 * 7), Some(7));
        assert_eq!(floor_days_between(0, 86_400 * 7 + 86_399), Some(7));
        assert_eq!(floor_days_between(100, 50), None);
    }

    // ── Remaining Days (ceiling) ──

    #[test]
    fn test_remaining_days_exact() {
        assert_eq!(remaining_days(10 * 86_400, 0), 10);
    }

    #[test]
    fn test_remaining_days_one_second_left_is_full_day() {
        let deadline = 10 * 86_400;
        assert_eq!(remaining_days(deadline, deadline - 1), 1);
    }

    #[test]
    fn test_remaining_days_partial_rounds_up() {
        // 9 days + 1 second left → 10 days
        let deadline = 10 * 86_400;
        assert_eq!(remaining_days(deadline, 86_400 - 1), 10);
    }

    #[test]
    fn test_remaining_days_at_deadline_zero() {
        assert_eq!(remaining_days(86_400, 86_400), 0);
    }

    #[test]
    fn test_remaining_days_past_deadline_zero() {
        assert_eq!(remaining_days(86_400, 2 * 86_400), 0);
    }

    // ── YT Issuance ──

    #[test]
    fn test_yt_issuance_day_weighted() {
        assert_eq!(yield_claim_for_stake(1_000, 10), Some(10_000));
    }

    #[test]
    fn test_yt_issuance_overflow() {
        assert_eq!(yield_claim_for_stake(u64::MAX, 2), None);
    }

    // ── PT Issuance: additive-yield policy ──

    #[test]
    fn test_pt_additive_empty_pool_1_to_1() {
        assert_eq!(principal_claim_additive(1_000, 10_000, 0, 0), Some(1_000));
    }

    #[test]
    fn test_pt_additive_discount() {
        // yt=10_000, pool=500, supply=100_000 → discount = 10_000*500/100_000 = 50
        assert_eq!(
            principal_claim_additive(1_000, 10_000, 500, 100_000),
            Some(950)
        );
    }

    #[test]
    fn test_pt_additive_discount_rounds_down() {
        // discount = 10_000 * 7 / 100_001 = 0.699.. → 0
        assert_eq!(
            principal_claim_additive(1_000, 10_000, 7, 100_001),
            Some(1_000)
        );
    }

    #[test]
    fn test_pt_additive_discount_exceeds_principal_blocked() {
        // discount = 10_000 * 10_000 / 100 = 1_000_000 > 1_000
        assert_eq!(principal_claim_additive(1_000, 10_000, 10_000, 100), None);
    }

    #[test]
    fn test_pt_additive_never_exceeds_principal() {
        for pool in [0u64, 1, 50, 10_000] {
            if let Some(pt) = principal_claim_additive(1_000, 10_000, pool, 100_000) {
                assert!(pt <= 1_000);
            }
        }
    }

    // ── PT Issuance: share-ratio policy ──

    #[test]
    fn test_pt_share_ratio_first_depositor() {
        assert_eq!(principal_claim_share_ratio(1_000, 0, 0), Some(1_000));
    }

    #[test]
    fn test_pt_share_ratio_pro_rata() {
        assert_eq!(principal_claim_share_ratio(500, 1_000, 2_000), Some(250));
    }

    #[test]
    fn test_pt_share_ratio_rounds_down() {
        // 7 * 3 / 10 = 2.1 → 2
        assert_eq!(principal_claim_share_ratio(7, 3, 10), Some(2));
    }

    #[test]
    fn test_pt_share_ratio_orphaned_value_blocked() {
        assert_eq!(principal_claim_share_ratio(1, 0, 10_000_000), None);
    }

    #[test]
    fn test_pt_share_ratio_valueless_supply_blocked() {
        assert_eq!(principal_claim_share_ratio(500, 1_000, 0), None);
    }

    #[test]
    fn test_pt_share_ratio_large_values() {
        let max = u64::MAX / 2;
        assert!(principal_claim_share_ratio(max, max, max).is_some());
    }

    // ── Principal Share ──

    #[test]
    fn test_principal_share_full() {
        assert_eq!(principal_share(1_000, 1_000, 1_000), Some(1_000));
    }

    #[test]
    fn test_principal_share_half() {
        assert_eq!(principal_share(1_000, 500, 1_000), Some(500));
    }

    #[test]
    fn test_principal_share_discounted_claim() {
        // Position minted 950 PT against 1_000 principal (additive discount).
        // Redeeming all 950 returns the full principal.
        assert_eq!(principal_share(1_000, 950, 950), Some(1_000));
    }

    #[test]
    fn test_principal_share_zero_claim_none() {
        assert_eq!(principal_share(1_000, 10, 0), None);
    }

    #[test]
    fn test_principal_share_rounds_down() {
        // 1000 * 333 / 1000 = 333; 100 * 1 / 3 = 33.3 → 33
        assert_eq!(principal_share(100, 1, 3), Some(33));
    }

    // ── Early-Exit Clawback ──

    #[test]
    fn test_clawback_no_fee_exact_product() {
        assert_eq!(yield_claim_burn(1_000, 10, 0), Some(10_000));
    }

    #[test]
    fn test_clawback_with_fee_multiplier() {
        // 1_000 * 10 * (10_000 + 500) / 10_000 = 10_500
        assert_eq!(yield_claim_burn(1_000, 10, 500), Some(10_500));
    }

    #[test]
    fn test_clawback_fee_division_rounds_down() {
        // 3 * 1 * 10_001 / 10_000 = 3.0003 → 3
        assert_eq!(yield_claim_burn(3, 1, 1), Some(3));
    }

    #[test]
    fn test_clawback_zero_days_zero_burn() {
        assert_eq!(yield_claim_burn(1_000, 0, 500), Some(0));
    }

    // ── Exit Fee ──

    #[test]
    fn test_exit_fee_basic() {
        // 1_000 * 250 / 10_000 = 25
        assert_eq!(exit_fee(1_000, 250), Some(25));
    }

    #[test]
    fn test_exit_fee_rounds_down() {
        // 999 * 250 / 10_000 = 24.975 → 24
        assert_eq!(exit_fee(999, 250), Some(24));
    }

    #[test]
    fn test_exit_fee_zero_rate() {
        assert_eq!(exit_fee(1_000, 0), Some(0));
    }

    #[test]
    fn test_exit_fee_full_rate_takes_all() {
        assert_eq!(exit_fee(1_000, RATIO as u16), Some(1_000));
    }

    // ── Yield Distribution ──

    #[test]
    fn test_yield_for_burn_pro_rata() {
        assert_eq!(yield_for_burn(1_000, 10_000, 2_500), Some(250));
    }

    #[test]
    fn test_yield_for_burn_rounds_down() {
        // 100 * 1 / 3 = 33.3 → 33
        assert_eq!(yield_for_burn(100, 3, 1), Some(33));
    }

    #[test]
    fn test_yield_for_burn_zero_supply_none() {
        assert_eq!(yield_for_burn(1_000, 0, 100), None);
    }

    #[test]
    fn test_yield_for_burn_full_supply_drains_pool() {
        assert_eq!(yield_for_burn(777, 10_000, 10_000), Some(777));
    }

    #[test]
    fn test_yield_for_burn_never_exceeds_pool() {
        for burned in [1u64, 999, 5_000, 10_000] {
            let y = yield_for_burn(12_345, 10_000, burned).unwrap();
            assert!(y <= 12_345);
        }
    }

    // ── ceil_div ──

    #[test]
    fn test_ceil_div_exact() {
        assert_eq!(ceil_div(10, 5), Some(2));
    }

    #[test]
    fn test_ceil_div_remainder_rounds_up() {
        assert_eq!(ceil_div(11, 5), Some(3));
    }

    #[test]
    fn test_ceil_div_zero_numerator() {
        assert_eq!(ceil_div(0, 5), Some(0));
    }

    #[test]
    fn test_ceil_div_zero_denominator() {
        assert_eq!(ceil_div(10, 0), None);
    }

    // ── End-to-end issuance/exit vectors ──

    #[test]
    fn test_empty_pool_issuance_vector() {
        let yt = yield_claim_for_stake(1_000, 10).unwrap();
        assert_eq!(yt, 10_000);
        assert_eq!(principal_claim_share_ratio(1_000, 0, 0), Some(1_000));
        assert_eq!(principal_claim_additive(1_000, yt, 0, 0), Some(1_000));
    }

    #[test]
    fn test_immediate_exit_burns_full_day_weight() {
        // Position: 1_000 for 10 days; exit at t=0 → 10 full days remain.
        let days = remaining_days(10 * 86_400, 0);
        assert_eq!(days, 10);
        assert_eq!(yield_claim_burn(1_000, days, 0), Some(10_000));
        let fee = exit_fee(1_000, 300).unwrap();
        assert_eq!(fee, 30);
        assert_eq!(1_000 - fee, 970);
    }
}
