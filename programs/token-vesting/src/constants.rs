//! Program-wide constants.

/// Seed tag for the token vault PDA: `[destination, mint, TOKEN_VAULT_SEED]`.
pub const TOKEN_VAULT_SEED: &[u8] = b"vault";

/// Seed tag for the vault authority PDA: `[destination, mint, VAULT_AUTHORITY_SEED]`.
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vaultAuth";

/// Seed tag for the VestingContract PDA: `[VESTING_CONTRACT_SEED, token_vault]`.
pub const VESTING_CONTRACT_SEED: &[u8] = b"vesting_contract";

/// Current VestingContract layout version.
pub const ACCOUNT_VERSION: u8 = 1;

/// Max vests per schedule. Keeps the account under the CPI allocation limit.
pub const MAX_SCHEDULE_LEN: usize = 128;
