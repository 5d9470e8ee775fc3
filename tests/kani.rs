//! Kani formal verification proofs for the staking math.
//!
//! Proves critical safety properties on the PURE MATH layer:
//! 1. Conservation: payout + fee never exceeds the redeemed principal share
//! 2. Rounding: the clawback day count is a true ceiling
//! 3. Arithmetic safety: no overflow/panic at any input
//! 4. Yield bounds: a burn never extracts more than the pool holds
//!
//! Run all:  cargo kani --tests
//! Run one:  cargo kani --harness <name>

#[cfg(kani)]
mod kani_proofs {
    use strata_stake::math::{
        exit_fee, principal_share, remaining_days, yield_claim_burn, yield_for_burn,
        RATIO, SECONDS_PER_DAY,
    };

    // ═══════════════════════════════════════════════════════════
    // 1. Conservation
    // ═══════════════════════════════════════════════════════════

    /// PROOF: fee <= principal share for any bounded rate, so the payout
    /// split never mints value.
    #[kani::proof]
    fn proof_exit_fee_bounded_by_share() {
        let ps: u64 = kani::any();
        let rate: u16 = kani::any();
        kani::assume(u64::from(rate) <= RATIO);
        kani::assume(ps <= 1_000_000_000_000);

        let fee = exit_fee(ps, rate).unwrap();
        assert!(fee <= ps);
        assert_eq!((ps - fee) + fee, ps);
    }

    /// PROOF: full-share redemption returns exactly the principal.
    #[kani::proof]
    fn proof_full_share_exact() {
        let principal: u64 = kani::any();
        let claim: u64 = kani::any();
        kani::assume(claim > 0);
        kani::assume(principal <= 1_000_000_000_000);
        kani::assume(claim <= 1_000_000_000_000);

        assert_eq!(principal_share(principal, claim, claim), Some(principal));
    }

    // ═══════════════════════════════════════════════════════════
    // 2. Rounding: ceiling law
    // ═══════════════════════════════════════════════════════════

    /// PROOF: remaining_days is the least day count covering the gap.
    #[kani::proof]
    fn proof_remaining_days_ceiling() {
        let deadline: i64 = kani::any();
        let now: i64 = kani::any();
        kani::assume(deadline > 0 && deadline <= 4_000_000_000);
        kani::assume(now >= 0 && now < deadline);

        let days = remaining_days(deadline, now);
        let gap = deadline - now;
        assert!((days as i64) * SECONDS_PER_DAY >= gap);
        assert!((days as i64 - 1) * SECONDS_PER_DAY < gap);
    }

    /// PROOF: exiting even one second early burns at least one day.
    #[kani::proof]
    fn proof_one_second_early_one_day() {
        let deadline: i64 = kani::any();
        kani::assume(deadline > 1 && deadline <= 4_000_000_000);

        assert!(remaining_days(deadline, deadline - 1) >= 1);
    }

    // ═══════════════════════════════════════════════════════════
    // 3. Arithmetic safety
    // ═══════════════════════════════════════════════════════════

    #[kani::proof]
    fn proof_clawback_no_panic() {
        let _ = yield_claim_burn(kani::any(), kani::any(), kani::any());
    }

    #[kani::proof]
    fn proof_exit_fee_no_panic() {
        let _ = exit_fee(kani::any(), kani::any());
    }

    #[kani::proof]
    fn proof_yield_for_burn_no_panic() {
        let _ = yield_for_burn(kani::any(), kani::any(), kani::any());
    }

    // ═══════════════════════════════════════════════════════════
    // 4. Yield bounds
    // ═══════════════════════════════════════════════════════════

    /// PROOF: burning within the supply never extracts more than the pool.
    #[kani::proof]
    fn proof_yield_burn_bounded() {
        let pool: u64 = kani::any();
        let supply: u64 = kani::any();
        let burned: u64 = kani::any();
        kani::assume(supply > 0);
        kani::assume(burned <= supply);

        if let Some(y) = yield_for_burn(pool, supply, burned) {
            assert!(y <= pool);
        }
    }
}
