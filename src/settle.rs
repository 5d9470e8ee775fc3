//! Unstake Settlement Engine — pure planning of a position exit.
//!
//! Like the math module, this has no Solana dependencies: the processor
//! snapshots the position and clock, asks for a plan, and then executes the
//! token CPIs and ledger commit from the plan. Keeping the decision here
//! lets tests and proofs cover the whole exit state machine directly.

use crate::math;

/// Everything an exit changes, computed before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Base-asset principal redeemed by this exit.
    pub principal_share: u64,
    /// PT burned (the share amount itself).
    pub principal_claim_burned: u64,
    /// YT clawed back for the remaining locked days (0 on on-time exit).
    pub yield_claim_burned: u64,
    /// Principal routed to the revenue pool (0 on on-time exit).
    pub fee: u64,
    /// Base asset paid to the exiting holder: `principal_share - fee`.
    pub payout: u64,
    /// Whether the exit happened before the deadline.
    pub early: bool,
}

/// Plan an exit of `share` principal-claim tokens from a position.
///
/// On-time (`now >= deadline`): no clawback, no fee, full principal share.
/// Early: YT clawback for the remaining days (day count rounded UP,
/// optionally inflated by `burned_yt_fee_rate` bps) plus a principal exit
/// fee of `force_unstake_fee_rate` bps.
///
/// `None` on arithmetic overflow or a zero outstanding claim. The caller
/// checks authorization, closed-state, and share bounds first.
pub fn plan_unstake(
    principal_amount: u64,
    principal_claim_amount: u64,
    deadline: i64,
    now: i64,
    share: u64,
    burned_yt_fee_rate: u16,
    force_unstake_fee_rate: u16,
) -> Option<Settlement> {
    let principal_share = math::principal_share(principal_amount, share, principal_claim_amount)?;

    let days_left = math::remaining_days(deadline, now);
    let early = days_left > 0;

    let (yield_claim_burned, fee) = if early {
        (
            math::yield_claim_burn(principal_share, days_left, burned_yt_fee_rate)?,
            math::exit_fee(principal_share, force_unstake_fee_rate)?,
        )
    } else {
        (0, 0)
    };

    // fee_rate <= RATIO is enforced at config time, so fee <= principal_share
    let payout = principal_share.checked_sub(fee)?;

    Some(Settlement {
        principal_share,
        principal_claim_burned: share,
        yield_claim_burned,
        fee,
        payout,
        early,
    })
}
