//! Program address derivations.
//! - token vault     = PDA(destination, mint, "vault")
//! - vault authority = PDA(destination, mint, "vaultAuth")
//! - record          = PDA("vesting_contract", token vault)

use anchor_lang::prelude::*;

use crate::constants::{TOKEN_VAULT_SEED, VAULT_AUTHORITY_SEED, VESTING_CONTRACT_SEED};
use crate::error::VestingError;

pub fn token_vault_address(destination: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[destination.as_ref(), mint.as_ref(), TOKEN_VAULT_SEED],
        &crate::ID,
    )
}

pub fn vault_authority_address(destination: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[destination.as_ref(), mint.as_ref(), VAULT_AUTHORITY_SEED],
        &crate::ID,
    )
}

pub fn vesting_contract_address(token_vault: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VESTING_CONTRACT_SEED, token_vault.as_ref()], &crate::ID)
}

/// Re-derive the vault authority from `(destination, mint, bump)` and compare
/// it with the account the caller supplied.
pub fn verify_vault_authority(
    destination: &Pubkey,
    mint: &Pubkey,
    bump: u8,
    supplied: &Pubkey,
) -> core::result::Result<(), VestingError> {
    let derived = Pubkey::create_program_address(
        &[destination.as_ref(), mint.as_ref(), VAULT_AUTHORITY_SEED, &[bump]],
        &crate::ID,
    )
    .map_err(|_| VestingError::VaultAuthorityMismatch)?;
    if derived != *supplied {
        return Err(VestingError::VaultAuthorityMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_vault_per_destination_and_mint() {
        let destination = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let (vault, _) = token_vault_address(&destination, &mint);
        assert_eq!(token_vault_address(&destination, &mint).0, vault);
        assert_ne!(token_vault_address(&Pubkey::new_unique(), &mint).0, vault);
        assert_ne!(token_vault_address(&destination, &Pubkey::new_unique()).0, vault);

        let (authority, _) = vault_authority_address(&destination, &mint);
        assert_ne!(authority, vault);
        assert_ne!(vesting_contract_address(&vault).0, vault);
    }

    #[test]
    fn verifies_canonical_vault_authority() {
        let destination = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let (authority, bump) = vault_authority_address(&destination, &mint);

        assert!(verify_vault_authority(&destination, &mint, bump, &authority).is_ok());
        assert!(matches!(
            verify_vault_authority(&destination, &mint, bump, &Pubkey::new_unique()),
            Err(VestingError::VaultAuthorityMismatch)
        ));
        // Derived from another destination.
        assert!(matches!(
            verify_vault_authority(&Pubkey::new_unique(), &mint, bump, &authority),
            Err(VestingError::VaultAuthorityMismatch)
        ));
    }
}
