use bytemuck::{Pod, Zeroable};
use solana_program::pubkey::Pubkey;

/// Fractional-share model: positions are multi-owner, partially redeemable
/// by PT amount; authorization is the PT burn itself.
pub const POSITION_MODEL_FRACTIONAL: u8 = 0;
/// Atomic model: single-owner, all-or-nothing, closed exactly once.
pub const POSITION_MODEL_ATOMIC: u8 = 1;

/// Additive-yield issuance: PT discounted by the stake's pro-rata slice of
/// the current yield pool.
pub const ISSUANCE_ADDITIVE: u8 = 0;
/// Share-ratio issuance: PT priced like vault shares against total staked.
pub const ISSUANCE_SHARE_RATIO: u8 = 1;

/// Staking vault state — one per base-asset mint.
/// PDA seeds: [b"stake_vault", base_mint]
///
/// Holds the whole pool ledger: total staked principal, the undistributed
/// yield pool, mirrors of both claim-token supplies (kept in-state so the
/// issuance/distribution math stays pure), lockup bounds, and fee rates.
/// The vault_auth PDA derived from this account owns the asset vault token
/// account and both claim mints.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct StakeVault {
    /// Whether the vault is initialized (1 = yes, 0 = no)
    pub is_initialized: u8,

    /// Bump seed for the vault PDA
    pub bump: u8,

    /// Bump seed for the vault authority PDA
    pub vault_authority_bump: u8,

    /// POSITION_MODEL_FRACTIONAL or POSITION_MODEL_ATOMIC (fixed at init)
    pub position_model: u8,

    /// ISSUANCE_ADDITIVE or ISSUANCE_SHARE_RATIO (fixed at init)
    pub issuance_policy: u8,

    /// Padding for alignment
    pub _padding: [u8; 3],

    /// Vault admin (config setters)
    pub admin: [u8; 32],

    /// Sole address allowed to call AccrueYield
    pub yield_reporter: [u8; 32],

    /// The wrapped base-asset mint staked into this vault
    pub base_mint: [u8; 32],

    /// Principal Token mint (authority = vault_auth PDA)
    pub principal_mint: [u8; 32],

    /// Yield Token mint (authority = vault_auth PDA)
    pub yield_mint: [u8; 32],

    /// Token account holding staked principal + accrued yield
    /// (owned by vault_auth PDA)
    pub asset_vault: [u8; 32],

    /// Token account receiving early-exit fees (external revenue pool)
    pub revenue_pool: [u8; 32],

    /// Sum of all open positions' principal (base units)
    pub total_staked: u64,

    /// Undistributed yield owned pro-rata by outstanding YT (base units)
    pub total_yield_pool: u64,

    /// PT in circulation (mirror of the mint supply)
    pub total_principal_supply: u64,

    /// YT in circulation (mirror of the mint supply)
    pub total_yield_supply: u64,

    /// Shortest permitted lockup, in days
    pub min_lockup_days: u32,

    /// Longest permitted lockup, in days
    pub max_lockup_days: u32,

    /// Early-exit fee on redeemed principal, in bps of RATIO
    pub force_unstake_fee_rate: u16,

    /// Extra YT-clawback multiplier on early exit, in bps of RATIO
    /// (applied in the fractional model only)
    pub burned_yt_fee_rate: u16,

    /// Padding for alignment
    pub _padding2: [u8; 4],

    /// Minimum stake amount (base units)
    pub min_stake_amount: u64,

    /// Next position id — monotonically increasing, never reused
    pub next_position_id: u64,

    /// Reserved for future use
    pub _reserved: [u8; 64],
}

/// Size of StakeVault in bytes
pub const STAKE_VAULT_SIZE: usize = core::mem::size_of::<StakeVault>();

/// Per-stake position record.
/// PDA seeds: [b"position", vault_pda, position_id_le]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct Position {
    /// Whether this record is initialized
    pub is_initialized: u8,

    /// Bump seed for the position PDA
    pub bump: u8,

    /// Terminal flag (atomic model; 1 = closed, no further mutation)
    pub closed: u8,

    /// Padding
    pub _padding: [u8; 5],

    /// Depositor. Atomic model: required signer for unstake/extend.
    /// Fractional model: required signer for extend only.
    pub owner: [u8; 32],

    /// Outstanding locked principal (base units)
    pub principal_amount: u64,

    /// Outstanding PT minted against this position
    pub principal_claim_amount: u64,

    /// Unix timestamp after which exit is penalty-free
    pub deadline: i64,

    /// Unix timestamp of creation
    pub created_at: i64,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

/// Size of Position in bytes
pub const POSITION_SIZE: usize = core::mem::size_of::<Position>();

impl StakeVault {
    pub fn admin_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.admin)
    }

    pub fn yield_reporter_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.yield_reporter)
    }

    pub fn base_mint_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.base_mint)
    }

    pub fn principal_mint_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.principal_mint)
    }

    pub fn yield_mint_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.yield_mint)
    }

    pub fn asset_vault_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.asset_vault)
    }

    pub fn revenue_pool_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.revenue_pool)
    }

    /// Inclusive range check for a requested lockup (stake or extension).
    pub fn lockup_days_in_range(&self, days: u64) -> bool {
        days >= u64::from(self.min_lockup_days) && days <= u64::from(self.max_lockup_days)
    }

    /// PT + YT to mint for a stake, per the vault's issuance policy.
    /// Delegates to the pure math module.
    pub fn calc_claims_for_stake(&self, amount: u64, lockup_days: u32) -> Option<(u64, u64)> {
        let yt = crate::math::yield_claim_for_stake(amount, lockup_days)?;
        let pt = match self.issuance_policy {
            ISSUANCE_ADDITIVE => crate::math::principal_claim_additive(
                amount,
                yt,
                self.total_yield_pool,
                self.total_yield_supply,
            ),
            ISSUANCE_SHARE_RATIO => crate::math::principal_claim_share_ratio(
                amount,
                self.total_principal_supply,
                self.total_staked,
            ),
            _ => None,
        }?;
        Some((pt, yt))
    }

    /// Yield paid for burning `burned` YT against the current pool.
    pub fn calc_yield_for_burn(&self, burned: u64) -> Option<u64> {
        crate::math::yield_for_burn(self.total_yield_pool, self.total_yield_supply, burned)
    }

    /// Claim the next position id. Monotonic; ids are never reused.
    pub fn alloc_position_id(&mut self) -> Option<u64> {
        let id = self.next_position_id;
        self.next_position_id = self.next_position_id.checked_add(1)?;
        Some(id)
    }

    /// Commit a stake to the ledger. All-or-nothing: on None the caller
    /// aborts the instruction and no field has been observed mutated.
    pub fn record_stake(&mut self, principal: u64, pt_minted: u64, yt_minted: u64) -> Option<()> {
        let staked = self.total_staked.checked_add(principal)?;
        let pt = self.total_principal_supply.checked_add(pt_minted)?;
        let yt = self.total_yield_supply.checked_add(yt_minted)?;
        self.total_staked = staked;
        self.total_principal_supply = pt;
        self.total_yield_supply = yt;
        Some(())
    }

    /// Commit an exit to the ledger.
    pub fn record_unstake(
        &mut self,
        principal_share: u64,
        pt_burned: u64,
        yt_burned: u64,
    ) -> Option<()> {
        let staked = self.total_staked.checked_sub(principal_share)?;
        let pt = self.total_principal_supply.checked_sub(pt_burned)?;
        let yt = self.total_yield_supply.checked_sub(yt_burned)?;
        self.total_staked = staked;
        self.total_principal_supply = pt;
        self.total_yield_supply = yt;
        Some(())
    }

    /// Commit a lock extension: only the YT supply grows.
    pub fn record_extend(&mut self, yt_minted: u64) -> Option<()> {
        self.total_yield_supply = self.total_yield_supply.checked_add(yt_minted)?;
        Some(())
    }

    /// Additive-only yield accrual (trusted reporter input).
    pub fn record_yield_accrual(&mut self, amount: u64) -> Option<()> {
        self.total_yield_pool = self.total_yield_pool.checked_add(amount)?;
        Some(())
    }

    /// Commit a yield withdrawal: pool and YT supply both shrink.
    /// `yield_amount` was derived from the same pool in this call, so the
    /// subtraction cannot underflow.
    pub fn record_yield_withdrawal(&mut self, yt_burned: u64, yield_amount: u64) -> Option<()> {
        let pool = self.total_yield_pool.checked_sub(yield_amount)?;
        let yt = self.total_yield_supply.checked_sub(yt_burned)?;
        self.total_yield_pool = pool;
        self.total_yield_supply = yt;
        Some(())
    }
}

impl Position {
    pub fn owner_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.owner)
    }

    /// Open = initialized, not closed, and with outstanding claim.
    pub fn is_open(&self) -> bool {
        self.is_initialized == 1 && self.closed == 0 && self.principal_claim_amount > 0
    }
}

/// Derive the stake vault PDA for a base mint.
pub fn derive_vault_pda(program_id: &Pubkey, base_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"stake_vault", base_mint.as_ref()], program_id)
}

/// Derive the vault authority PDA for a vault.
/// Controls: PT/YT mint authority + asset vault token account authority.
pub fn derive_vault_authority(program_id: &Pubkey, vault: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"vault_auth", vault.as_ref()], program_id)
}

/// Derive the position PDA for a vault and position id.
pub fn derive_position_pda(program_id: &Pubkey, vault: &Pubkey, position_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"position", vault.as_ref(), &position_id.to_le_bytes()],
        program_id,
    )
}
