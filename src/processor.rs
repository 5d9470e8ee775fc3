use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
    sysvar::{clock::Clock, Sysvar},
};

use crate::cpi;
use crate::error::StakeError;
use crate::instruction::StakeInstruction;
use crate::math;
use crate::settle;
use crate::state::{
    self, Position, StakeVault, ISSUANCE_SHARE_RATIO, POSITION_MODEL_ATOMIC, POSITION_SIZE,
    STAKE_VAULT_SIZE,
};

/// Verify the token program is the real token program.
/// Without this check an attacker can pass a fake program, receive PDA
/// signer authority via invoke_signed, and drain the asset vault.
fn verify_token_program(token_program: &AccountInfo) -> ProgramResult {
    if *token_program.key != cpi::TOKEN_PROGRAM_ID {
        msg!("Error: invalid token program {}", token_program.key);
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = StakeInstruction::unpack(instruction_data)?;

    match instruction {
        StakeInstruction::InitVault {
            position_model,
            issuance_policy,
            decimals,
            min_lockup_days,
            max_lockup_days,
            force_unstake_fee_rate,
            burned_yt_fee_rate,
            min_stake_amount,
        } => process_init_vault(
            program_id,
            accounts,
            position_model,
            issuance_policy,
            decimals,
            min_lockup_days,
            max_lockup_days,
            force_unstake_fee_rate,
            burned_yt_fee_rate,
            min_stake_amount,
        ),
        StakeInstruction::Stake { amount, lockup_days } => {
            process_stake(program_id, accounts, amount, lockup_days)
        }
        StakeInstruction::Unstake { position_id, share_amount } => {
            process_unstake(program_id, accounts, position_id, share_amount)
        }
        StakeInstruction::ExtendLockTime { position_id, extend_days } => {
            process_extend_lock_time(program_id, accounts, position_id, extend_days)
        }
        StakeInstruction::WithdrawYield { amount } => {
            process_withdraw_yield(program_id, accounts, amount)
        }
        StakeInstruction::AccrueYield { amount } => {
            process_accrue_yield(program_id, accounts, amount)
        }
        StakeInstruction::SetMinLockupDays { days } => {
            process_set_min_lockup_days(program_id, accounts, days)
        }
        StakeInstruction::SetMaxLockupDays { days } => {
            process_set_max_lockup_days(program_id, accounts, days)
        }
        StakeInstruction::SetForceUnstakeFeeRate { rate } => {
            process_set_force_unstake_fee_rate(program_id, accounts, rate)
        }
        StakeInstruction::SetBurnedYtFeeRate { rate } => {
            process_set_burned_yt_fee_rate(program_id, accounts, rate)
        }
        StakeInstruction::SetYieldReporter { reporter } => {
            process_set_yield_reporter(program_id, accounts, &reporter)
        }
        StakeInstruction::SetMinStakeAmount { amount } => {
            process_set_min_stake_amount(program_id, accounts, amount)
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// 0: InitVault
// ═══════════════════════════════════════════════════════════════

#[allow(clippy::too_many_arguments)]
fn process_init_vault(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    position_model: u8,
    issuance_policy: u8,
    decimals: u8,
    min_lockup_days: u32,
    max_lockup_days: u32,
    force_unstake_fee_rate: u16,
    burned_yt_fee_rate: u16,
    min_stake_amount: u64,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();

    let admin = next_account_info(accounts_iter)?;
    let base_mint = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;
    let principal_mint = next_account_info(accounts_iter)?;
    let yield_mint = next_account_info(accounts_iter)?;
    let asset_vault = next_account_info(accounts_iter)?;
    let vault_auth = next_account_info(accounts_iter)?;
    let revenue_pool = next_account_info(accounts_iter)?;
    let yield_reporter = next_account_info(accounts_iter)?;
    let token_program = next_account_info(accounts_iter)?;
    let system_program = next_account_info(accounts_iter)?;
    let rent_sysvar = next_account_info(accounts_iter)?;

    if !admin.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    // Reject bad config before touching any account
    if position_model > POSITION_MODEL_ATOMIC || issuance_policy > ISSUANCE_SHARE_RATIO {
        return Err(StakeError::InvalidConfig.into());
    }
    if min_lockup_days > max_lockup_days {
        return Err(StakeError::InvalidLockupRange.into());
    }
    if u64::from(force_unstake_fee_rate) > math::RATIO
        || u64::from(burned_yt_fee_rate) > math::RATIO
    {
        return Err(StakeError::FeeRateOverflow.into());
    }

    // Derive and verify vault PDA
    let (expected_vault, vault_bump) = state::derive_vault_pda(program_id, base_mint.key);
    if *vault_pda.key != expected_vault {
        return Err(StakeError::InvalidPda.into());
    }
    if !vault_pda.data_is_empty() {
        return Err(StakeError::AlreadyInitialized.into());
    }

    let (expected_vault_auth, vault_auth_bump) =
        state::derive_vault_authority(program_id, &expected_vault);
    if *vault_auth.key != expected_vault_auth {
        return Err(StakeError::InvalidPda.into());
    }

    // Validate token program BEFORE any CPI that initializes accounts under
    // the vault_auth PDA
    verify_token_program(token_program)?;

    let rent = Rent::from_account_info(rent_sysvar)?;

    // Create the vault PDA account
    let vault_seeds: &[&[u8]] = &[b"stake_vault", base_mint.key.as_ref(), &[vault_bump]];
    invoke_signed(
        &system_instruction::create_account(
            admin.key,
            vault_pda.key,
            rent.minimum_balance(STAKE_VAULT_SIZE),
            STAKE_VAULT_SIZE as u64,
            program_id,
        ),
        &[admin.clone(), vault_pda.clone(), system_program.clone()],
        &[vault_seeds],
    )?;

    // Initialize both claim mints (authority = vault_auth PDA)
    cpi::initialize_mint(token_program, principal_mint, rent_sysvar, vault_auth.key, decimals)?;
    cpi::initialize_mint(token_program, yield_mint, rent_sysvar, vault_auth.key, decimals)?;

    // Initialize the asset vault token account (authority = vault_auth PDA)
    cpi::initialize_account(token_program, asset_vault, base_mint, vault_auth, rent_sysvar)?;

    // Write vault state
    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);

    vault.is_initialized = 1;
    vault.bump = vault_bump;
    vault.vault_authority_bump = vault_auth_bump;
    vault.position_model = position_model;
    vault.issuance_policy = issuance_policy;
    vault.admin = admin.key.to_bytes();
    vault.yield_reporter = yield_reporter.key.to_bytes();
    vault.base_mint = base_mint.key.to_bytes();
    vault.principal_mint = principal_mint.key.to_bytes();
    vault.yield_mint = yield_mint.key.to_bytes();
    vault.asset_vault = asset_vault.key.to_bytes();
    vault.revenue_pool = revenue_pool.key.to_bytes();
    vault.total_staked = 0;
    vault.total_yield_pool = 0;
    vault.total_principal_supply = 0;
    vault.total_yield_supply = 0;
    vault.min_lockup_days = min_lockup_days;
    vault.max_lockup_days = max_lockup_days;
    vault.force_unstake_fee_rate = force_unstake_fee_rate;
    vault.burned_yt_fee_rate = burned_yt_fee_rate;
    vault.min_stake_amount = min_stake_amount;
    vault.next_position_id = 0;

    msg!("StakeVault initialized for base mint {}", base_mint.key);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// 1: Stake
// ═══════════════════════════════════════════════════════════════

fn process_stake(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
    lockup_days: u32,
) -> ProgramResult {
    if amount == 0 {
        return Err(StakeError::ZeroInput.into());
    }

    let accounts_iter = &mut accounts.iter();

    let user = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;
    let user_asset_ata = next_account_info(accounts_iter)?;
    let asset_vault = next_account_info(accounts_iter)?;
    let principal_mint = next_account_info(accounts_iter)?;
    let user_pt_ata = next_account_info(accounts_iter)?;
    let yield_mint = next_account_info(accounts_iter)?;
    let user_yt_ata = next_account_info(accounts_iter)?;
    let vault_auth = next_account_info(accounts_iter)?;
    let position_pda = next_account_info(accounts_iter)?;
    let token_program = next_account_info(accounts_iter)?;
    let clock_sysvar = next_account_info(accounts_iter)?;
    let system_program = next_account_info(accounts_iter)?;

    if !user.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);

    if vault.is_initialized != 1 {
        return Err(StakeError::NotInitialized.into());
    }
    if amount < vault.min_stake_amount {
        return Err(StakeError::MinStakeInsufficient.into());
    }
    if !vault.lockup_days_in_range(u64::from(lockup_days)) {
        return Err(StakeError::InvalidLockupDays.into());
    }
    if vault.principal_mint != principal_mint.key.to_bytes()
        || vault.yield_mint != yield_mint.key.to_bytes()
    {
        return Err(StakeError::InvalidMint.into());
    }
    if vault.asset_vault != asset_vault.key.to_bytes() {
        return Err(StakeError::InvalidPda.into());
    }

    // Validate token program BEFORE any invoke_signed that grants PDA
    // signer authority
    verify_token_program(token_program)?;

    let clock = Clock::from_account_info(clock_sysvar)?;
    let now = clock.unix_timestamp;

    // lockup_days <= u32::MAX bounds the product well below i64::MAX; a
    // failure here means a corrupted clock, not a user error
    let deadline = math::lockup_deadline(now, lockup_days).ok_or(StakeError::Overflow)?;

    let (pt_minted, yt_minted) = vault
        .calc_claims_for_stake(amount, lockup_days)
        .ok_or(StakeError::Overflow)?;
    if pt_minted == 0 {
        return Err(StakeError::ZeroInput.into());
    }

    // Verify the position PDA for the next id before moving any tokens
    let position_id = vault.next_position_id;
    let (expected_position, position_bump) =
        state::derive_position_pda(program_id, vault_pda.key, position_id);
    if *position_pda.key != expected_position {
        return Err(StakeError::InvalidPda.into());
    }
    if !position_pda.data_is_empty() {
        return Err(StakeError::AlreadyInitialized.into());
    }

    // Move principal: user → asset vault
    cpi::transfer(token_program, user_asset_ata, asset_vault, user, amount)?;

    // Mint both claims to the user
    let (_, vault_auth_bump) = state::derive_vault_authority(program_id, vault_pda.key);
    let vault_auth_seeds: &[&[u8]] = &[b"vault_auth", vault_pda.key.as_ref(), &[vault_auth_bump]];

    cpi::mint_to_signed(
        token_program,
        principal_mint,
        user_pt_ata,
        vault_auth,
        pt_minted,
        vault_auth_seeds,
    )?;
    cpi::mint_to_signed(
        token_program,
        yield_mint,
        user_yt_ata,
        vault_auth,
        yt_minted,
        vault_auth_seeds,
    )?;

    // Create the position record
    let id_bytes = position_id.to_le_bytes();
    let position_seeds: &[&[u8]] =
        &[b"position", vault_pda.key.as_ref(), &id_bytes, &[position_bump]];
    let rent = Rent::get()?;
    invoke_signed(
        &system_instruction::create_account(
            user.key,
            position_pda.key,
            rent.minimum_balance(POSITION_SIZE),
            POSITION_SIZE as u64,
            program_id,
        ),
        &[user.clone(), position_pda.clone(), system_program.clone()],
        &[position_seeds],
    )?;

    let mut position_data = position_pda.try_borrow_mut_data()?;
    let position: &mut Position = bytemuck::from_bytes_mut(&mut position_data[..POSITION_SIZE]);

    position.is_initialized = 1;
    position.bump = position_bump;
    position.closed = 0;
    position.owner = user.key.to_bytes();
    position.principal_amount = amount;
    position.principal_claim_amount = pt_minted;
    position.deadline = deadline;
    position.created_at = now;

    // Commit ledger totals
    let allocated = vault.alloc_position_id().ok_or(StakeError::Overflow)?;
    debug_assert_eq!(allocated, position_id);
    vault
        .record_stake(amount, pt_minted, yt_minted)
        .ok_or(StakeError::Overflow)?;

    msg!(
        "Staked {} for {} days: position {} minted {} PT, {} YT",
        amount,
        lockup_days,
        position_id,
        pt_minted,
        yt_minted
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// 2: Unstake
// ═══════════════════════════════════════════════════════════════

fn process_unstake(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    position_id: u64,
    share_amount: u64,
) -> ProgramResult {
    if share_amount == 0 {
        return Err(StakeError::ZeroInput.into());
    }

    let accounts_iter = &mut accounts.iter();

    let user = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;
    let position_pda = next_account_info(accounts_iter)?;
    let user_pt_ata = next_account_info(accounts_iter)?;
    let principal_mint = next_account_info(accounts_iter)?;
    let user_yt_ata = next_account_info(accounts_iter)?;
    let yield_mint = next_account_info(accounts_iter)?;
    let asset_vault = next_account_info(accounts_iter)?;
    let user_asset_ata = next_account_info(accounts_iter)?;
    let revenue_pool = next_account_info(accounts_iter)?;
    let vault_auth = next_account_info(accounts_iter)?;
    let token_program = next_account_info(accounts_iter)?;
    let clock_sysvar = next_account_info(accounts_iter)?;

    if !user.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);

    if vault.is_initialized != 1 {
        return Err(StakeError::NotInitialized.into());
    }
    if vault.principal_mint != principal_mint.key.to_bytes()
        || vault.yield_mint != yield_mint.key.to_bytes()
    {
        return Err(StakeError::InvalidMint.into());
    }
    if vault.asset_vault != asset_vault.key.to_bytes()
        || vault.revenue_pool != revenue_pool.key.to_bytes()
    {
        return Err(StakeError::InvalidPda.into());
    }

    let (expected_position, _) = state::derive_position_pda(program_id, vault_pda.key, position_id);
    if *position_pda.key != expected_position {
        return Err(StakeError::InvalidPda.into());
    }

    let mut position_data = position_pda.try_borrow_mut_data()?;
    let position: &mut Position = bytemuck::from_bytes_mut(&mut position_data[..POSITION_SIZE]);

    if position.is_initialized != 1 {
        return Err(StakeError::NotInitialized.into());
    }

    let atomic = vault.position_model == POSITION_MODEL_ATOMIC;
    if atomic {
        // Authorization first, then terminal-state conflict
        if position.owner != user.key.to_bytes() {
            return Err(StakeError::PermissionDenied.into());
        }
        if position.closed == 1 {
            return Err(StakeError::PositionClosed.into());
        }
        // All-or-nothing: the full outstanding claim settles at once
        if share_amount != position.principal_claim_amount {
            return Err(ProgramError::InvalidArgument);
        }
    } else if share_amount > position.principal_claim_amount {
        // Fractional model authorizes via the PT burn below; the share just
        // can't exceed what this position still has outstanding
        return Err(StakeError::InsufficientPrincipalClaim.into());
    }

    verify_token_program(token_program)?;

    let clock = Clock::from_account_info(clock_sysvar)?;
    let now = clock.unix_timestamp;

    // Atomic model never applies the extra clawback multiplier
    let burn_fee_rate = if atomic { 0 } else { vault.burned_yt_fee_rate };
    let plan = settle::plan_unstake(
        position.principal_amount,
        position.principal_claim_amount,
        position.deadline,
        now,
        share_amount,
        burn_fee_rate,
        vault.force_unstake_fee_rate,
    )
    .ok_or(StakeError::Overflow)?;

    // Burn the redeemed principal claim. The token program checks the
    // caller's actual balance — that IS the fractional-model authorization.
    cpi::burn(token_program, user_pt_ata, principal_mint, user, plan.principal_claim_burned)?;

    // Early exit: claw back the yield claim for the remaining days. Fails
    // inside the token program when the caller's YT balance is short.
    if plan.yield_claim_burned > 0 {
        cpi::burn(token_program, user_yt_ata, yield_mint, user, plan.yield_claim_burned)?;
    }

    let (_, vault_auth_bump) = state::derive_vault_authority(program_id, vault_pda.key);
    let vault_auth_seeds: &[&[u8]] = &[b"vault_auth", vault_pda.key.as_ref(), &[vault_auth_bump]];

    if plan.payout > 0 {
        cpi::transfer_signed(
            token_program,
            asset_vault,
            user_asset_ata,
            vault_auth,
            plan.payout,
            vault_auth_seeds,
        )?;
    }
    if plan.fee > 0 {
        cpi::transfer_signed(
            token_program,
            asset_vault,
            revenue_pool,
            vault_auth,
            plan.fee,
            vault_auth_seeds,
        )?;
    }

    // Commit: position first, then pool totals
    position.principal_amount = position
        .principal_amount
        .checked_sub(plan.principal_share)
        .ok_or(StakeError::Overflow)?;
    position.principal_claim_amount = position
        .principal_claim_amount
        .checked_sub(plan.principal_claim_burned)
        .ok_or(StakeError::Overflow)?;
    if plan.early {
        // The lock is settled; a later partial exit of the remainder is not
        // penalized again
        position.deadline = now;
    }
    if atomic {
        position.closed = 1;
    }

    vault
        .record_unstake(plan.principal_share, plan.principal_claim_burned, plan.yield_claim_burned)
        .ok_or(StakeError::Overflow)?;

    msg!(
        "Unstaked position {}: {} principal out ({} fee), {} PT + {} YT burned{}",
        position_id,
        plan.payout,
        plan.fee,
        plan.principal_claim_burned,
        plan.yield_claim_burned,
        if plan.early { " [early]" } else { "" }
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// 3: ExtendLockTime
// ═══════════════════════════════════════════════════════════════

fn process_extend_lock_time(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    position_id: u64,
    extend_days: u32,
) -> ProgramResult {
    if extend_days == 0 {
        return Err(StakeError::ZeroInput.into());
    }

    let accounts_iter = &mut accounts.iter();

    let owner = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;
    let position_pda = next_account_info(accounts_iter)?;
    let yield_mint = next_account_info(accounts_iter)?;
    let owner_yt_ata = next_account_info(accounts_iter)?;
    let vault_auth = next_account_info(accounts_iter)?;
    let token_program = next_account_info(accounts_iter)?;
    let clock_sysvar = next_account_info(accounts_iter)?;

    if !owner.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);

    if vault.is_initialized != 1 {
        return Err(StakeError::NotInitialized.into());
    }
    if vault.yield_mint != yield_mint.key.to_bytes() {
        return Err(StakeError::InvalidMint.into());
    }

    let (expected_position, _) = state::derive_position_pda(program_id, vault_pda.key, position_id);
    if *position_pda.key != expected_position {
        return Err(StakeError::InvalidPda.into());
    }

    let mut position_data = position_pda.try_borrow_mut_data()?;
    let position: &mut Position = bytemuck::from_bytes_mut(&mut position_data[..POSITION_SIZE]);

    if position.is_initialized != 1 {
        return Err(StakeError::NotInitialized.into());
    }
    if position.owner != owner.key.to_bytes() {
        return Err(StakeError::PermissionDenied.into());
    }
    if !position.is_open() {
        return Err(StakeError::PositionClosed.into());
    }

    let clock = Clock::from_account_info(clock_sysvar)?;
    let now = clock.unix_timestamp;

    if position.deadline <= now {
        return Err(StakeError::ReachedDeadline.into());
    }

    let new_deadline =
        math::extend_deadline(position.deadline, extend_days).ok_or(StakeError::Overflow)?;
    let total_days = math::floor_days_between(now, new_deadline).ok_or(StakeError::Overflow)?;
    if !vault.lockup_days_in_range(total_days) {
        return Err(StakeError::InvalidExtendDays.into());
    }

    // The added days carry a yield obligation: mint YT for them
    let yt_minted = math::yield_claim_for_stake(position.principal_amount, extend_days)
        .ok_or(StakeError::Overflow)?;

    verify_token_program(token_program)?;

    let (_, vault_auth_bump) = state::derive_vault_authority(program_id, vault_pda.key);
    let vault_auth_seeds: &[&[u8]] = &[b"vault_auth", vault_pda.key.as_ref(), &[vault_auth_bump]];
    cpi::mint_to_signed(
        token_program,
        yield_mint,
        owner_yt_ata,
        vault_auth,
        yt_minted,
        vault_auth_seeds,
    )?;

    position.deadline = new_deadline;
    vault.record_extend(yt_minted).ok_or(StakeError::Overflow)?;

    msg!(
        "Extended position {} by {} days (deadline {}), minted {} YT",
        position_id,
        extend_days,
        new_deadline,
        yt_minted
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// 4: WithdrawYield
// ═══════════════════════════════════════════════════════════════

fn process_withdraw_yield(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    if amount == 0 {
        return Err(StakeError::ZeroInput.into());
    }

    let accounts_iter = &mut accounts.iter();

    let user = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;
    let user_yt_ata = next_account_info(accounts_iter)?;
    let yield_mint = next_account_info(accounts_iter)?;
    let asset_vault = next_account_info(accounts_iter)?;
    let user_asset_ata = next_account_info(accounts_iter)?;
    let vault_auth = next_account_info(accounts_iter)?;
    let token_program = next_account_info(accounts_iter)?;

    if !user.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);

    if vault.is_initialized != 1 {
        return Err(StakeError::NotInitialized.into());
    }
    if vault.yield_mint != yield_mint.key.to_bytes() {
        return Err(StakeError::InvalidMint.into());
    }
    if vault.asset_vault != asset_vault.key.to_bytes() {
        return Err(StakeError::InvalidPda.into());
    }

    verify_token_program(token_program)?;

    let yield_amount = vault.calc_yield_for_burn(amount).ok_or(StakeError::Overflow)?;

    // Burn the yield claim; the token program enforces the balance
    cpi::burn(token_program, user_yt_ata, yield_mint, user, amount)?;

    // Dust burns round to zero yield — the burn still counts, the transfer
    // is skipped
    if yield_amount > 0 {
        let (_, vault_auth_bump) = state::derive_vault_authority(program_id, vault_pda.key);
        let vault_auth_seeds: &[&[u8]] =
            &[b"vault_auth", vault_pda.key.as_ref(), &[vault_auth_bump]];
        cpi::transfer_signed(
            token_program,
            asset_vault,
            user_asset_ata,
            vault_auth,
            yield_amount,
            vault_auth_seeds,
        )?;
    }

    vault
        .record_yield_withdrawal(amount, yield_amount)
        .ok_or(StakeError::Overflow)?;

    msg!("Withdrew {} yield for {} YT burned", yield_amount, amount);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// 5: AccrueYield — trusted reporter input
// ═══════════════════════════════════════════════════════════════

fn process_accrue_yield(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();

    let reporter = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;

    if !reporter.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);

    if vault.is_initialized != 1 {
        return Err(StakeError::NotInitialized.into());
    }
    if vault.yield_reporter != reporter.key.to_bytes() {
        return Err(StakeError::PermissionDenied.into());
    }

    // Deliberate no-op when the reporter computed zero new yield
    if amount == 0 {
        return Ok(());
    }

    // TRUST BOUNDARY: the amount is accepted as reported. Only the address
    // is authenticated; a compromised reporter can inflate the pool. Keep
    // this in the threat model when rotating the reporter key.
    vault.record_yield_accrual(amount).ok_or(StakeError::Overflow)?;

    msg!("YieldAccrued: {} (pool {})", amount, vault.total_yield_pool);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// 6–11: Bounded config setters
// ═══════════════════════════════════════════════════════════════

/// Common prologue for admin setters: vault initialized + admin match.
fn validate_admin(vault: &StakeVault, admin: &AccountInfo) -> ProgramResult {
    if vault.is_initialized != 1 {
        return Err(StakeError::NotInitialized.into());
    }
    if vault.admin != admin.key.to_bytes() {
        return Err(StakeError::PermissionDenied.into());
    }
    Ok(())
}

fn process_set_min_lockup_days(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    days: u32,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let admin = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;

    if !admin.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);
    validate_admin(vault, admin)?;

    // Never let the range invert — that would make every stake impossible
    if days > vault.max_lockup_days {
        return Err(StakeError::InvalidLockupRange.into());
    }
    vault.min_lockup_days = days;

    msg!("MinLockupDaysUpdated: {}", days);
    Ok(())
}

fn process_set_max_lockup_days(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    days: u32,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let admin = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;

    if !admin.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);
    validate_admin(vault, admin)?;

    if days < vault.min_lockup_days {
        return Err(StakeError::InvalidLockupRange.into());
    }
    vault.max_lockup_days = days;

    msg!("MaxLockupDaysUpdated: {}", days);
    Ok(())
}

fn process_set_force_unstake_fee_rate(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    rate: u16,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let admin = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;

    if !admin.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);
    validate_admin(vault, admin)?;

    if u64::from(rate) > math::RATIO {
        return Err(StakeError::FeeRateOverflow.into());
    }
    vault.force_unstake_fee_rate = rate;

    msg!("ForceUnstakeFeeRateUpdated: {}", rate);
    Ok(())
}

fn process_set_burned_yt_fee_rate(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    rate: u16,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let admin = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;

    if !admin.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);
    validate_admin(vault, admin)?;

    if u64::from(rate) > math::RATIO {
        return Err(StakeError::FeeRateOverflow.into());
    }
    vault.burned_yt_fee_rate = rate;

    msg!("BurnedYtFeeRateUpdated: {}", rate);
    Ok(())
}

fn process_set_yield_reporter(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    reporter: &Pubkey,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let admin = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;

    if !admin.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);
    validate_admin(vault, admin)?;

    vault.yield_reporter = reporter.to_bytes();

    msg!("YieldReporterUpdated: {}", reporter);
    Ok(())
}

fn process_set_min_stake_amount(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let admin = next_account_info(accounts_iter)?;
    let vault_pda = next_account_info(accounts_iter)?;

    if !admin.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let mut vault_data = vault_pda.try_borrow_mut_data()?;
    let vault: &mut StakeVault = bytemuck::from_bytes_mut(&mut vault_data[..STAKE_VAULT_SIZE]);
    validate_admin(vault, admin)?;

    vault.min_stake_amount = amount;

    msg!("MinStakeAmountUpdated: {}", amount);
    Ok(())
}
