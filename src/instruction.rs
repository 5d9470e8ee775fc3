use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Instructions for the Strata yield-tokenization staking program.
#[derive(Debug)]
pub enum StakeInstruction {
    /// Initialize a stake vault for a base-asset mint.
    /// Creates the vault PDA and initializes the PT mint, YT mint, and
    /// asset vault token account (all under the vault_auth PDA).
    ///
    /// Accounts:
    ///   0. `[signer, writable]` Admin (pays rent, becomes vault admin)
    ///   1. `[]` Base-asset mint (the wrapped yield-bearing asset)
    ///   2. `[writable]` Vault PDA (stake_vault, to be created)
    ///   3. `[writable]` PT mint (to be initialized, authority = vault_auth)
    ///   4. `[writable]` YT mint (to be initialized, authority = vault_auth)
    ///   5. `[writable]` Asset vault token account (to be initialized)
    ///   6. `[]` Vault authority PDA
    ///   7. `[]` Revenue pool token account (fee sink, recorded)
    ///   8. `[]` Yield reporter (sole AccrueYield caller, recorded)
    ///   9. `[]` Token program
    ///  10. `[]` System program
    ///  11. `[]` Rent sysvar
    InitVault {
        position_model: u8,
        issuance_policy: u8,
        decimals: u8,
        min_lockup_days: u32,
        max_lockup_days: u32,
        force_unstake_fee_rate: u16,
        burned_yt_fee_rate: u16,
        min_stake_amount: u64,
    },

    /// Lock `amount` of the base asset for `lockup_days`. Mints PT per the
    /// vault's issuance policy and `amount * lockup_days` YT, and opens a
    /// position under the next monotonic id.
    ///
    /// Accounts:
    ///   0. `[signer, writable]` User staking (pays position rent)
    ///   1. `[writable]` Vault PDA
    ///   2. `[writable]` User's base-asset token account (source)
    ///   3. `[writable]` Asset vault token account (destination)
    ///   4. `[writable]` PT mint
    ///   5. `[writable]` User's PT token account
    ///   6. `[writable]` YT mint
    ///   7. `[writable]` User's YT token account
    ///   8. `[]` Vault authority PDA (mint authority)
    ///   9. `[writable]` Position PDA (to be created)
    ///  10. `[]` Token program
    ///  11. `[]` Clock sysvar
    ///  12. `[]` System program
    Stake { amount: u64, lockup_days: u32 },

    /// Redeem a position. Fractional model: `share_amount` PT is burned and
    /// the matching principal share settles. Atomic model: all-or-nothing,
    /// `share_amount` must equal the position's full outstanding claim.
    /// Before the deadline, YT for the remaining days (rounded up) is clawed
    /// back and an exit fee routes to the revenue pool.
    ///
    /// Accounts:
    ///   0. `[signer]` User unstaking
    ///   1. `[writable]` Vault PDA
    ///   2. `[writable]` Position PDA
    ///   3. `[writable]` User's PT token account (burn source)
    ///   4. `[writable]` PT mint
    ///   5. `[writable]` User's YT token account (burn source on early exit)
    ///   6. `[writable]` YT mint
    ///   7. `[writable]` Asset vault token account (payout source)
    ///   8. `[writable]` User's base-asset token account (payout destination)
    ///   9. `[writable]` Revenue pool token account (fee destination)
    ///  10. `[]` Vault authority PDA (transfer authority)
    ///  11. `[]` Token program
    ///  12. `[]` Clock sysvar
    Unstake { position_id: u64, share_amount: u64 },

    /// Push an open position's deadline out by `extend_days`, minting
    /// `principal * extend_days` additional YT to the owner. The new total
    /// remaining days must stay inside the configured lockup range.
    ///
    /// Accounts:
    ///   0. `[signer]` Position owner
    ///   1. `[writable]` Vault PDA
    ///   2. `[writable]` Position PDA
    ///   3. `[writable]` YT mint
    ///   4. `[writable]` Owner's YT token account
    ///   5. `[]` Vault authority PDA (mint authority)
    ///   6. `[]` Token program
    ///   7. `[]` Clock sysvar
    ExtendLockTime { position_id: u64, extend_days: u32 },

    /// Burn `amount` YT for a pro-rata slice of the yield pool.
    ///
    /// Accounts:
    ///   0. `[signer]` User withdrawing yield
    ///   1. `[writable]` Vault PDA
    ///   2. `[writable]` User's YT token account (burn source)
    ///   3. `[writable]` YT mint
    ///   4. `[writable]` Asset vault token account (yield source)
    ///   5. `[writable]` User's base-asset token account (destination)
    ///   6. `[]` Vault authority PDA (transfer authority)
    ///   7. `[]` Token program
    WithdrawYield { amount: u64 },

    /// Report newly-available yield. Restricted to the vault's recorded
    /// yield reporter; the amount is trusted as reported. A zero amount is
    /// a deliberate no-op.
    ///
    /// Accounts:
    ///   0. `[signer]` Yield reporter
    ///   1. `[writable]` Vault PDA
    AccrueYield { amount: u64 },

    /// Admin sets the lower lockup bound. Fails if it would exceed the
    /// current upper bound.
    ///
    /// Accounts:
    ///   0. `[signer]` Admin
    ///   1. `[writable]` Vault PDA
    SetMinLockupDays { days: u32 },

    /// Admin sets the upper lockup bound. Fails if it would fall below the
    /// current lower bound.
    ///
    /// Accounts:
    ///   0. `[signer]` Admin
    ///   1. `[writable]` Vault PDA
    SetMaxLockupDays { days: u32 },

    /// Admin sets the early-exit principal fee rate (bps, <= RATIO).
    ///
    /// Accounts:
    ///   0. `[signer]` Admin
    ///   1. `[writable]` Vault PDA
    SetForceUnstakeFeeRate { rate: u16 },

    /// Admin sets the extra YT-clawback rate (bps, <= RATIO).
    ///
    /// Accounts:
    ///   0. `[signer]` Admin
    ///   1. `[writable]` Vault PDA
    SetBurnedYtFeeRate { rate: u16 },

    /// Admin rotates the authorized yield reporter.
    ///
    /// Accounts:
    ///   0. `[signer]` Admin
    ///   1. `[writable]` Vault PDA
    SetYieldReporter { reporter: Pubkey },

    /// Admin sets the minimum stake floor.
    ///
    /// Accounts:
    ///   0. `[signer]` Admin
    ///   1. `[writable]` Vault PDA
    SetMinStakeAmount { amount: u64 },
}

impl StakeInstruction {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let (&tag, rest) = data.split_first().ok_or(ProgramError::InvalidInstructionData)?;

        match tag {
            0 => {
                // InitVault: model(1) + policy(1) + decimals(1) + min_days(4)
                //          + max_days(4) + force_fee(2) + burn_fee(2) + min_stake(8)
                if rest.len() < 23 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let position_model = rest[0];
                let issuance_policy = rest[1];
                let decimals = rest[2];
                let min_lockup_days = u32::from_le_bytes(rest[3..7].try_into().unwrap());
                let max_lockup_days = u32::from_le_bytes(rest[7..11].try_into().unwrap());
                let force_unstake_fee_rate = u16::from_le_bytes(rest[11..13].try_into().unwrap());
                let burned_yt_fee_rate = u16::from_le_bytes(rest[13..15].try_into().unwrap());
                let min_stake_amount = u64::from_le_bytes(rest[15..23].try_into().unwrap());
                Ok(Self::InitVault {
                    position_model,
                    issuance_policy,
                    decimals,
                    min_lockup_days,
                    max_lockup_days,
                    force_unstake_fee_rate,
                    burned_yt_fee_rate,
                    min_stake_amount,
                })
            }
            1 => {
                if rest.len() < 12 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let amount = u64::from_le_bytes(rest[0..8].try_into().unwrap());
                let lockup_days = u32::from_le_bytes(rest[8..12].try_into().unwrap());
                Ok(Self::Stake { amount, lockup_days })
            }
            2 => {
                if rest.len() < 16 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let position_id = u64::from_le_bytes(rest[0..8].try_into().unwrap());
                let share_amount = u64::from_le_bytes(rest[8..16].try_into().unwrap());
                Ok(Self::Unstake { position_id, share_amount })
            }
            3 => {
                if rest.len() < 12 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let position_id = u64::from_le_bytes(rest[0..8].try_into().unwrap());
                let extend_days = u32::from_le_bytes(rest[8..12].try_into().unwrap());
                Ok(Self::ExtendLockTime { position_id, extend_days })
            }
            4 => {
                if rest.len() < 8 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let amount = u64::from_le_bytes(rest[0..8].try_into().unwrap());
                Ok(Self::WithdrawYield { amount })
            }
            5 => {
                if rest.len() < 8 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let amount = u64::from_le_bytes(rest[0..8].try_into().unwrap());
                Ok(Self::AccrueYield { amount })
            }
            6 => {
                if rest.len() < 4 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let days = u32::from_le_bytes(rest[0..4].try_into().unwrap());
                Ok(Self::SetMinLockupDays { days })
            }
            7 => {
                if rest.len() < 4 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let days = u32::from_le_bytes(rest[0..4].try_into().unwrap());
                Ok(Self::SetMaxLockupDays { days })
            }
            8 => {
                if rest.len() < 2 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let rate = u16::from_le_bytes(rest[0..2].try_into().unwrap());
                Ok(Self::SetForceUnstakeFeeRate { rate })
            }
            9 => {
                if rest.len() < 2 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let rate = u16::from_le_bytes(rest[0..2].try_into().unwrap());
                Ok(Self::SetBurnedYtFeeRate { rate })
            }
            10 => {
                if rest.len() < 32 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let reporter = Pubkey::try_from(&rest[0..32])
                    .map_err(|_| ProgramError::InvalidInstructionData)?;
                Ok(Self::SetYieldReporter { reporter })
            }
            11 => {
                if rest.len() < 8 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let amount = u64::from_le_bytes(rest[0..8].try_into().unwrap());
                Ok(Self::SetMinStakeAmount { amount })
            }
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
