//! Strata Yield-Tokenization Staking Program
//!
//! Depositors lock a yield-bearing base asset for a chosen number of days and
//! receive two claims against the pool:
//! - Principal Token (PT): redeemable for the locked principal, 1:1 or at a
//!   pool-determined share ratio depending on the vault's issuance policy.
//! - Yield Token (YT): a day-weighted claim on yield accrued by the pooled
//!   deposits, burned pro-rata on early exit.
//!
//! Architecture:
//! - One StakeVault PDA per base-asset mint holds all pool accounting:
//!   total staked, the undistributed yield pool, claim-supply mirrors,
//!   lockup bounds, and basis-point fee rates
//! - Each stake creates a Position PDA keyed by a monotonic id (never reused)
//! - The vault_auth PDA owns the asset vault and both claim mints; all token
//!   movement goes through CPI with vault_auth signing
//! - Two position models share one engine, selected at InitVault:
//!   fractional-share (partial redemption by PT amount, authorized by the PT
//!   burn itself) and atomic (single-owner, all-or-nothing, closed once)
//! - Two issuance policies: additive-yield (PT discounted by the depositor's
//!   pro-rata slice of the current yield pool) and share-ratio (vault-style
//!   PT price = total_staked / pt_supply)
//! - Yield accrual is reported by a single authorized reporter address; the
//!   reported amount is trusted by design (see processor::process_accrue_yield)
//!
//! Instructions:
//!   0 - InitVault:              Create vault for a base mint, PT/YT mints, asset vault
//!   1 - Stake:                  Lock base asset, mint PT + YT, open a position
//!   2 - Unstake:                Redeem a position (full or by share); early exit
//!                               claws back YT for remaining days + charges exit fee
//!   3 - ExtendLockTime:         Push a position's deadline out, minting YT for the added days
//!   4 - WithdrawYield:          Burn YT for a pro-rata slice of the yield pool
//!   5 - AccrueYield:            Reporter-only: add newly-available yield to the pool
//!   6 - SetMinLockupDays:       Admin: lower lockup bound
//!   7 - SetMaxLockupDays:       Admin: upper lockup bound
//!   8 - SetForceUnstakeFeeRate: Admin: early-exit principal fee (bps)
//!   9 - SetBurnedYtFeeRate:     Admin: extra YT clawback multiplier (bps)
//!  10 - SetYieldReporter:       Admin: rotate the authorized yield reporter
//!  11 - SetMinStakeAmount:      Admin: minimum stake floor

pub mod cpi;
pub mod error;
pub mod instruction;
pub mod math;
pub mod processor;
pub mod settle;
pub mod state;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;
