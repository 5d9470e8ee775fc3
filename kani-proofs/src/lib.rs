//! Kani formal verification for strata-stake settlement math.
//!
//! ZERO dependencies. Pure Rust. CBMC-friendly.
//!
//! KEY DESIGN DECISION: Functions use u32 inputs / u64 intermediates.
//! The production code uses u64/u128, but the arithmetic properties
//! (conservation, ceiling rounding, bounds) are scale-invariant.
//! u32 keeps SAT formulas tractable for CBMC (<60s per proof).
//!
//! Run all:   cargo kani --lib
//! Run one:   cargo kani --harness proof_exit_conserves_share

/// Basis-point denominator (matches production RATIO).
pub const RATIO: u32 = 10_000;

/// Seconds per day, narrowed for CBMC (production uses 86_400; the ceiling
/// property is independent of the divisor's magnitude).
pub const DAY: u32 = 86_400;

// ═══════════════════════════════════════════════════════════════
// Settlement math (u32/u64 mirror of strata-stake/src/math.rs)
// Arithmetic is IDENTICAL — just narrower types for CBMC tractability.
// ═══════════════════════════════════════════════════════════════

/// Remaining locked days, rounded UP. 0 once now >= deadline.
pub fn remaining_days(deadline: u32, now: u32) -> u32 {
    if now >= deadline {
        return 0;
    }
    let gap = deadline - now;
    gap / DAY + u32::from(gap % DAY != 0)
}

/// YT clawback: `ps * days * (RATIO + rate) / RATIO`, bps division floors.
pub fn yield_claim_burn(ps: u32, days: u32, rate: u32) -> Option<u32> {
    if rate > RATIO {
        return None;
    }
    let base = (ps as u64).checked_mul(days as u64)?;
    let inflated = base.checked_mul((RATIO + rate) as u64)? / RATIO as u64;
    if inflated > u32::MAX as u64 {
        None
    } else {
        Some(inflated as u32)
    }
}

/// Exit fee: `ps * rate / RATIO`, floors.
pub fn exit_fee(ps: u32, rate: u32) -> Option<u32> {
    if rate > RATIO {
        return None;
    }
    Some(((ps as u64) * (rate as u64) / RATIO as u64) as u32)
}

/// Principal redeemed for a share burn: `principal * share / claim`, floors.
pub fn principal_share(principal: u32, share: u32, claim: u32) -> Option<u32> {
    if claim == 0 {
        return None;
    }
    let ps = (principal as u64) * (share as u64) / (claim as u64);
    if ps > u32::MAX as u64 {
        None
    } else {
        Some(ps as u32)
    }
}

/// Yield for a YT burn: `pool * burned / supply`, floors.
pub fn yield_for_burn(pool: u32, supply: u32, burned: u32) -> Option<u32> {
    if supply == 0 {
        return None;
    }
    let y = (pool as u64) * (burned as u64) / (supply as u64);
    if y > u32::MAX as u64 {
        None
    } else {
        Some(y as u32)
    }
}

/// Share-ratio PT issuance with the orphaned-value / dilution guards.
pub fn principal_claim_share_ratio(principal: u32, supply: u32, staked: u32) -> Option<u32> {
    if supply == 0 && staked == 0 {
        Some(principal)
    } else if supply == 0 || staked == 0 {
        None
    } else {
        let pt = (principal as u64) * (supply as u64) / (staked as u64);
        if pt > u32::MAX as u64 {
            None
        } else {
            Some(pt as u32)
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// KANI PROOFS
// ═══════════════════════════════════════════════════════════════

#[cfg(kani)]
mod proofs {
    use super::*;

    // ── 1. Conservation ──

    /// Exit fee never exceeds the principal share; the split is exact.
    #[kani::proof]
    fn proof_exit_conserves_share() {
        let ps: u32 = kani::any();
        let rate: u32 = kani::any();
        kani::assume(rate <= RATIO);

        let fee = exit_fee(ps, rate).unwrap();
        assert!(fee <= ps);
        assert_eq!((ps - fee) as u64 + fee as u64, ps as u64);
    }

    /// Full-share redemption returns exactly the principal.
    #[kani::proof]
    fn proof_full_share_exact() {
        let principal: u32 = kani::any();
        let claim: u32 = kani::any();
        kani::assume(claim > 0);

        assert_eq!(principal_share(principal, claim, claim), Some(principal));
    }

    /// Two sequential partial redemptions never pay more than the principal.
    #[kani::proof]
    fn proof_partial_shares_conserve() {
        let principal: u32 = kani::any();
        let claim: u32 = kani::any();
        let first: u32 = kani::any();
        kani::assume(claim > 0 && claim < 1_000);
        kani::assume(principal < 1_000);
        kani::assume(first <= claim);

        let ps1 = principal_share(principal, first, claim).unwrap();
        let rem_claim = claim - first;
        let rem_principal = principal - ps1;
        let ps2 = if rem_claim > 0 {
            principal_share(rem_principal, rem_claim, rem_claim).unwrap()
        } else {
            0
        };
        assert!(ps1 as u64 + ps2 as u64 <= principal as u64);
    }

    // ── 2. Ceiling rounding ──

    /// remaining_days is the least day count covering the gap.
    #[kani::proof]
    fn proof_remaining_days_ceiling() {
        let deadline: u32 = kani::any();
        let now: u32 = kani::any();
        kani::assume(now < deadline);

        let days = remaining_days(deadline, now);
        let gap = (deadline - now) as u64;
        assert!(days as u64 * DAY as u64 >= gap);
        assert!((days as u64 - 1) * DAY as u64 < gap);
    }

    /// One second early still burns a full day.
    #[kani::proof]
    fn proof_one_second_early_one_day() {
        let deadline: u32 = kani::any();
        kani::assume(deadline >= 1);

        assert!(remaining_days(deadline, deadline - 1) >= 1);
    }

    // ── 3. Clawback bounds ──

    /// The multiplier never reduces the clawback and at most doubles it.
    #[kani::proof]
    fn proof_clawback_multiplier_bounds() {
        let ps: u32 = kani::any();
        let days: u32 = kani::any();
        let rate: u32 = kani::any();
        kani::assume(rate <= RATIO);
        kani::assume(ps < 10_000 && days < 10_000);

        let base = yield_claim_burn(ps, days, 0).unwrap();
        let inflated = yield_claim_burn(ps, days, rate).unwrap();
        assert!(inflated >= base);
        assert!(inflated as u64 <= 2 * base as u64);
    }

    // ── 4. Yield bounds ──

    /// Burning within the supply never extracts more than the pool.
    #[kani::proof]
    fn proof_yield_burn_bounded() {
        let pool: u32 = kani::any();
        let supply: u32 = kani::any();
        let burned: u32 = kani::any();
        kani::assume(supply > 0);
        kani::assume(burned <= supply);

        let y = yield_for_burn(pool, supply, burned).unwrap();
        assert!(y <= pool);
    }

    // ── 5. Issuance guards ──

    /// Share-ratio issuance floors (pool-favoring).
    #[kani::proof]
    fn proof_share_ratio_rounds_down() {
        let principal: u32 = kani::any();
        let supply: u32 = kani::any();
        let staked: u32 = kani::any();
        kani::assume(supply > 0 && staked > 0);

        if let Some(pt) = principal_claim_share_ratio(principal, supply, staked) {
            assert!(pt as u64 * staked as u64 <= principal as u64 * supply as u64);
        }
    }

    /// Orphaned value and valueless supply both block issuance.
    #[kani::proof]
    fn proof_share_ratio_guards() {
        let principal: u32 = kani::any();
        let nonzero: u32 = kani::any();
        kani::assume(nonzero > 0);

        assert_eq!(principal_claim_share_ratio(principal, 0, nonzero), None);
        assert_eq!(principal_claim_share_ratio(principal, nonzero, 0), None);
        assert_eq!(principal_claim_share_ratio(principal, 0, 0), Some(principal));
    }

    // ── 6. No panic ──

    #[kani::proof]
    fn proof_no_panics() {
        let _ = remaining_days(kani::any(), kani::any());
        let _ = yield_claim_burn(kani::any(), kani::any(), kani::any());
        let _ = exit_fee(kani::any(), kani::any());
        let _ = principal_share(kani::any(), kani::any(), kani::any());
        let _ = yield_for_burn(kani::any(), kani::any(), kani::any());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sanity checks that the mirror matches the production vectors

    #[test]
    fn test_immediate_exit_mirror() {
        assert_eq!(remaining_days(10 * DAY, 0), 10);
        assert_eq!(yield_claim_burn(1_000, 10, 0), Some(10_000));
        assert_eq!(exit_fee(1_000, 300), Some(30));
    }

    #[test]
    fn test_one_second_early_mirror() {
        assert_eq!(remaining_days(10 * DAY, 10 * DAY - 1), 1);
    }

    #[test]
    fn test_full_burn_drains_pool_mirror() {
        assert_eq!(yield_for_burn(777, 10_000, 10_000), Some(777));
    }
}
