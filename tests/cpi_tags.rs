//! CPI encoding verification tests.
//!
//! Cross-references our hand-built token instructions with the token
//! program's wire format. A tag or layout mismatch = calling the wrong
//! instruction with PDA signer authority attached.

use solana_program::pubkey::Pubkey;
use strata_stake::cpi;

/// These tags MUST match the token program's decoder:
///   Tag 0: InitializeMint
///   Tag 1: InitializeAccount
///   Tag 3: Transfer
///   Tag 7: MintTo
///   Tag 8: Burn
#[test]
fn test_token_tags() {
    assert_eq!(cpi::TAG_INITIALIZE_MINT, 0);
    assert_eq!(cpi::TAG_INITIALIZE_ACCOUNT, 1);
    assert_eq!(cpi::TAG_TRANSFER, 3);
    assert_eq!(cpi::TAG_MINT_TO, 7);
    assert_eq!(cpi::TAG_BURN, 8);
}

#[test]
fn test_initialize_mint_encoding() {
    let tp = cpi::TOKEN_PROGRAM_ID;
    let mint = Pubkey::new_unique();
    let rent = Pubkey::new_unique();
    let auth = Pubkey::new_unique();

    let ix = cpi::initialize_mint_ix(&tp, &mint, &rent, &auth, 9);
    assert_eq!(ix.program_id, tp);
    // tag + decimals + authority + COption tag + freeze authority
    assert_eq!(ix.data.len(), 67);
    assert_eq!(ix.data[0], 0);
    assert_eq!(ix.data[1], 9);
    assert_eq!(&ix.data[2..34], auth.as_ref());
    assert_eq!(ix.data[34], 1); // freeze authority present
    assert_eq!(&ix.data[35..67], auth.as_ref());
    assert_eq!(ix.accounts.len(), 2);
    assert!(ix.accounts[0].is_writable);
    assert!(!ix.accounts[0].is_signer);
}

#[test]
fn test_initialize_account_encoding() {
    let tp = cpi::TOKEN_PROGRAM_ID;
    let ix = cpi::initialize_account_ix(
        &tp,
        &Pubkey::new_unique(),
        &Pubkey::new_unique(),
        &Pubkey::new_unique(),
        &Pubkey::new_unique(),
    );
    assert_eq!(ix.data, vec![1u8]);
    assert_eq!(ix.accounts.len(), 4);
    assert!(ix.accounts[0].is_writable);
    assert!(!ix.accounts[1].is_writable);
}

#[test]
fn test_transfer_encoding() {
    let tp = cpi::TOKEN_PROGRAM_ID;
    let src = Pubkey::new_unique();
    let dst = Pubkey::new_unique();
    let auth = Pubkey::new_unique();

    let ix = cpi::transfer_ix(&tp, &src, &dst, &auth, 12_345);
    assert_eq!(ix.data[0], 3);
    assert_eq!(u64::from_le_bytes(ix.data[1..9].try_into().unwrap()), 12_345);
    assert_eq!(ix.accounts[0].pubkey, src);
    assert!(ix.accounts[0].is_writable);
    assert_eq!(ix.accounts[1].pubkey, dst);
    assert!(ix.accounts[1].is_writable);
    // Authority signs, never writable
    assert_eq!(ix.accounts[2].pubkey, auth);
    assert!(ix.accounts[2].is_signer);
    assert!(!ix.accounts[2].is_writable);
}

#[test]
fn test_mint_to_encoding() {
    let tp = cpi::TOKEN_PROGRAM_ID;
    let mint = Pubkey::new_unique();
    let dst = Pubkey::new_unique();
    let auth = Pubkey::new_unique();

    let ix = cpi::mint_to_ix(&tp, &mint, &dst, &auth, u64::MAX);
    assert_eq!(ix.data[0], 7);
    assert_eq!(u64::from_le_bytes(ix.data[1..9].try_into().unwrap()), u64::MAX);
    // Mint first, then destination, then signing authority
    assert_eq!(ix.accounts[0].pubkey, mint);
    assert_eq!(ix.accounts[1].pubkey, dst);
    assert!(ix.accounts[2].is_signer);
}

#[test]
fn test_burn_encoding() {
    let tp = cpi::TOKEN_PROGRAM_ID;
    let account = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let owner = Pubkey::new_unique();

    let ix = cpi::burn_ix(&tp, &account, &mint, &owner, 500);
    // CRITICAL: Burn is tag 8, NOT 7 (7 = MintTo). Swapping them would
    // mint instead of claw back on early exit.
    assert_eq!(ix.data[0], 8, "Burn must be tag 8, not 7");
    assert_eq!(ix.accounts[0].pubkey, account);
    assert_eq!(ix.accounts[1].pubkey, mint);
    assert!(ix.accounts[1].is_writable);
    assert!(ix.accounts[2].is_signer);
}

#[test]
fn test_token_program_id_canonical() {
    assert_eq!(
        cpi::TOKEN_PROGRAM_ID.to_string(),
        "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
    );
}
