use solana_program::program_error::ProgramError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum StakeError {
    /// Vault already initialized for this base mint
    AlreadyInitialized = 0,
    /// Vault not initialized
    NotInitialized = 1,
    /// Caller is not authorized (wrong admin, owner, or reporter)
    PermissionDenied = 2,
    /// Zero amount where a positive input is required
    ZeroInput = 3,
    /// Stake amount below the vault's minimum floor
    MinStakeInsufficient = 4,
    /// Lockup days outside [min_lockup_days, max_lockup_days]
    InvalidLockupDays = 5,
    /// Extension would push total remaining days outside the configured range
    InvalidExtendDays = 6,
    /// Lock already expired — nothing left to extend
    ReachedDeadline = 7,
    /// Position already closed (atomic model double-close)
    PositionClosed = 8,
    /// Share amount exceeds the position's outstanding principal claim
    InsufficientPrincipalClaim = 9,
    /// Fee rate above RATIO (10_000 bps)
    FeeRateOverflow = 10,
    /// Setter would invert the lockup range (min > max)
    InvalidLockupRange = 11,
    /// Unknown position model or issuance policy byte
    InvalidConfig = 12,
    /// Arithmetic overflow
    Overflow = 13,
    /// Mint account does not match the vault's recorded mint
    InvalidMint = 14,
    /// Account does not match its expected PDA or recorded address
    InvalidPda = 15,
}

impl From<StakeError> for ProgramError {
    fn from(e: StakeError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
