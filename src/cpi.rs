//! CPI helpers for the token program backing the base asset and both claims.
//!
//! We construct raw instruction data manually since we don't depend on a
//! token crate. Tags match the token program's instruction decoder; the
//! builders are public so tests can cross-check the encodings.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    program::{invoke, invoke_signed},
    pubkey,
    pubkey::Pubkey,
};

/// The token program every vault's mints and token accounts belong to.
/// The processor rejects any other program id before granting PDA signer
/// authority through invoke_signed.
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

// ═══════════════════════════════════════════════════════════════
// Token instruction tags (from the token program's decoder)
// ═══════════════════════════════════════════════════════════════

pub const TAG_INITIALIZE_MINT: u8 = 0;
pub const TAG_INITIALIZE_ACCOUNT: u8 = 1;
pub const TAG_TRANSFER: u8 = 3;
pub const TAG_MINT_TO: u8 = 7;
pub const TAG_BURN: u8 = 8;

// ═══════════════════════════════════════════════════════════════
// Instruction builders
// ═══════════════════════════════════════════════════════════════

/// InitializeMint (Tag 0)
/// Accounts: [mint(w), rent]
/// Data: tag(1) + decimals(1) + mint_authority(32) + freeze COption(1+32)
pub fn initialize_mint_ix(
    token_program: &Pubkey,
    mint: &Pubkey,
    rent_sysvar: &Pubkey,
    mint_authority: &Pubkey,
    decimals: u8,
) -> Instruction {
    let mut data = Vec::with_capacity(67);
    data.push(TAG_INITIALIZE_MINT);
    data.push(decimals);
    data.extend_from_slice(mint_authority.as_ref());
    data.push(1); // freeze authority = Some(mint_authority)
    data.extend_from_slice(mint_authority.as_ref());

    Instruction {
        program_id: *token_program,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*rent_sysvar, false),
        ],
        data,
    }
}

/// InitializeAccount (Tag 1)
/// Accounts: [account(w), mint, owner, rent]
/// Data: tag(1)
pub fn initialize_account_ix(
    token_program: &Pubkey,
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    rent_sysvar: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *token_program,
        accounts: vec![
            AccountMeta::new(*account, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(*rent_sysvar, false),
        ],
        data: vec![TAG_INITIALIZE_ACCOUNT],
    }
}

/// Transfer (Tag 3)
/// Accounts: [source(w), destination(w), authority(signer)]
/// Data: tag(1) + amount(8)
pub fn transfer_ix(
    token_program: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(9);
    data.push(TAG_TRANSFER);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: *token_program,
        accounts: vec![
            AccountMeta::new(*source, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        data,
    }
}

/// MintTo (Tag 7)
/// Accounts: [mint(w), destination(w), mint_authority(signer)]
/// Data: tag(1) + amount(8)
pub fn mint_to_ix(
    token_program: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(9);
    data.push(TAG_MINT_TO);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: *token_program,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*mint_authority, true),
        ],
        data,
    }
}

/// Burn (Tag 8)
/// Accounts: [account(w), mint(w), owner(signer)]
/// Data: tag(1) + amount(8)
pub fn burn_ix(
    token_program: &Pubkey,
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(9);
    data.push(TAG_BURN);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: *token_program,
        accounts: vec![
            AccountMeta::new(*account, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data,
    }
}

// ═══════════════════════════════════════════════════════════════
// Invoke wrappers
// ═══════════════════════════════════════════════════════════════

pub fn initialize_mint<'a>(
    token_program: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    rent_sysvar: &AccountInfo<'a>,
    mint_authority: &Pubkey,
    decimals: u8,
) -> ProgramResult {
    let ix = initialize_mint_ix(
        token_program.key,
        mint.key,
        rent_sysvar.key,
        mint_authority,
        decimals,
    );
    invoke(&ix, &[mint.clone(), rent_sysvar.clone()])
}

pub fn initialize_account<'a>(
    token_program: &AccountInfo<'a>,
    account: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    owner: &AccountInfo<'a>,
    rent_sysvar: &AccountInfo<'a>,
) -> ProgramResult {
    let ix = initialize_account_ix(token_program.key, account.key, mint.key, owner.key, rent_sysvar.key);
    invoke(
        &ix,
        &[account.clone(), mint.clone(), owner.clone(), rent_sysvar.clone()],
    )
}

/// Transfer signed by the outer transaction's signer.
pub fn transfer<'a>(
    token_program: &AccountInfo<'a>,
    source: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    authority: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    let ix = transfer_ix(token_program.key, source.key, destination.key, authority.key, amount);
    invoke(
        &ix,
        &[source.clone(), destination.clone(), authority.clone(), token_program.clone()],
    )
}

/// Transfer signed by a program PDA (vault authority).
pub fn transfer_signed<'a>(
    token_program: &AccountInfo<'a>,
    source: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    authority: &AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let ix = transfer_ix(token_program.key, source.key, destination.key, authority.key, amount);
    invoke_signed(
        &ix,
        &[source.clone(), destination.clone(), authority.clone(), token_program.clone()],
        &[signer_seeds],
    )
}

/// Mint claims; the mint authority is always the vault_auth PDA.
pub fn mint_to_signed<'a>(
    token_program: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    mint_authority: &AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let ix = mint_to_ix(token_program.key, mint.key, destination.key, mint_authority.key, amount);
    invoke_signed(
        &ix,
        &[mint.clone(), destination.clone(), mint_authority.clone(), token_program.clone()],
        &[signer_seeds],
    )
}

/// Burn claims from the holder. Fails inside the token program when the
/// holder's balance is short (clawback over-burn is delegated here).
pub fn burn<'a>(
    token_program: &AccountInfo<'a>,
    account: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    owner: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    let ix = burn_ix(token_program.key, account.key, mint.key, owner.key, amount);
    invoke(
        &ix,
        &[account.clone(), mint.clone(), owner.clone(), token_program.clone()],
    )
}
