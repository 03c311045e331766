use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Signer must be the update authority")]
    SignerMustBeUpdateAuthority,

    #[msg("Cannot change the amount")]
    CannotChangeAmount,

    #[msg("New date must be in the future")]
    NewDateMustBeInTheFuture,

    #[msg("New date must be later than the previous date")]
    NewDateMustBeLaterThanCurrent,

    #[msg("Destination address must match VestingContract")]
    DestinationMustMatchVestingContract,

    #[msg("The token vault must be empty")]
    TokenVaultNotEmpty,

    #[msg("The token vault must match the VestingContract")]
    TokenVaultIsWrong,

    #[msg("Destination's mint address doesn't match the token")]
    DestinationMintMismatch,

    #[msg("Token mint must match the VestingContract")]
    InvalidTokenMint,

    #[msg("Vault authority does not match the VestingContract")]
    VaultAuthorityMismatch,

    #[msg("Issuer must match VestingContract")]
    IssuerMustMatchVestingContract,

    #[msg("Update authority must be a valid public key")]
    InvalidUpdateAuthority,

    #[msg("Vesting schedule must not be empty")]
    EmptySchedule,

    #[msg("Vesting schedule exceeds the maximum length")]
    ScheduleTooLong,

    #[msg("Unsupported VestingContract version")]
    UnsupportedVersion,

    #[msg("Math overflow")]
    MathOverflow,
}
