use anchor_lang::prelude::*;

use crate::constants::ACCOUNT_VERSION;
use crate::error::VestingError;
use crate::state::Vest;

/// Vesting record PDA (seeds = [b"vesting_contract", token_vault]).
#[account]
#[derive(Default)]
pub struct VestingContract {
    /// Layout version.
    pub version: u8,
    /// Canonical bump of this PDA.
    pub bump: u8,
    /// The address that funded the vault and receives the rent back on close.
    pub issuer_address: Pubkey,
    /// The token account the vested tokens are sent to.
    pub destination_address: Pubkey,
    /// The mint of the SPL token being vested.
    pub mint_address: Pubkey,
    /// PDA token account holding the unclaimed tokens.
    pub token_vault: Pubkey,
    /// Canonical bump of the vault authority PDA.
    pub vault_authority_bump: u8,
    /// Optional authority that can delay unlock dates (`Pubkey::default()` when absent).
    pub update_authority: Pubkey,
    /// The vesting schedule, sorted by unlock date.
    pub schedule: Vec<Vest>,
}

impl VestingContract {
    pub const HEADER_SIZE: usize =
        1 +  // version
        1 +  // bump
        32 + // issuer_address
        32 + // destination_address
        32 + // mint_address
        32 + // token_vault
        1 +  // vault_authority_bump
        32 + // update_authority
        4;   // schedule length prefix

    /// Space for discriminator + header + `vest_count` fixed-size vests.
    pub const fn space(vest_count: usize) -> usize {
        8 + Self::HEADER_SIZE + Vest::SIZE * vest_count
    }

    pub fn has_update_authority(&self) -> bool {
        self.update_authority != Pubkey::default()
    }

    pub fn check_version(&self) -> core::result::Result<(), VestingError> {
        if self.version != ACCOUNT_VERSION {
            return Err(VestingError::UnsupportedVersion);
        }
        Ok(())
    }

    /// Accounts a claim must present: the stored destination and vault, and
    /// the stored mint on both the mint account and the destination.
    pub fn check_claim_accounts(
        &self,
        destination: &Pubkey,
        destination_mint: &Pubkey,
        token_vault: &Pubkey,
        mint: &Pubkey,
    ) -> core::result::Result<(), VestingError> {
        if *destination != self.destination_address {
            return Err(VestingError::DestinationMustMatchVestingContract);
        }
        if *token_vault != self.token_vault {
            return Err(VestingError::TokenVaultIsWrong);
        }
        if *mint != self.mint_address {
            return Err(VestingError::InvalidTokenMint);
        }
        if *destination_mint != self.mint_address {
            return Err(VestingError::DestinationMintMismatch);
        }
        Ok(())
    }

    /// A contract created without an update authority can never be updated.
    pub fn check_update_authority(&self, signer: &Pubkey) -> core::result::Result<(), VestingError> {
        if !self.has_update_authority() || *signer != self.update_authority {
            return Err(VestingError::SignerMustBeUpdateAuthority);
        }
        Ok(())
    }

    pub fn check_close_accounts(
        &self,
        issuer: &Pubkey,
        token_vault: &Pubkey,
        vault_balance: u64,
    ) -> core::result::Result<(), VestingError> {
        if *issuer != self.issuer_address {
            return Err(VestingError::IssuerMustMatchVestingContract);
        }
        if *token_vault != self.token_vault {
            return Err(VestingError::TokenVaultIsWrong);
        }
        if vault_balance > 0 {
            return Err(VestingError::TokenVaultNotEmpty);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(update_authority: Pubkey) -> VestingContract {
        VestingContract {
            version: ACCOUNT_VERSION,
            bump: 254,
            issuer_address: Pubkey::new_unique(),
            destination_address: Pubkey::new_unique(),
            mint_address: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            vault_authority_bump: 253,
            update_authority,
            schedule: vec![Vest::new(1, 100), Vest::new(2, 200)],
        }
    }

    #[test]
    fn serialized_size_matches_space() {
        let vc = contract(Pubkey::new_unique());
        let mut data = Vec::new();
        vc.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), VestingContract::space(2));

        let decoded = VestingContract::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded.schedule, vc.schedule);
        assert_eq!(decoded.token_vault, vc.token_vault);
        assert_eq!(decoded.vault_authority_bump, 253);
    }

    #[test]
    fn rejects_unknown_version() {
        let mut vc = contract(Pubkey::default());
        assert!(vc.check_version().is_ok());
        vc.version = ACCOUNT_VERSION + 1;
        assert!(matches!(
            vc.check_version(),
            Err(VestingError::UnsupportedVersion)
        ));
    }

    #[test]
    fn claim_requires_stored_destination_and_vault() {
        let vc = contract(Pubkey::default());
        let mint = vc.mint_address;
        assert!(vc
            .check_claim_accounts(&vc.destination_address, &mint, &vc.token_vault, &mint)
            .is_ok());

        let spoofed = Pubkey::new_unique();
        assert!(matches!(
            vc.check_claim_accounts(&spoofed, &mint, &vc.token_vault, &mint),
            Err(VestingError::DestinationMustMatchVestingContract)
        ));
        assert!(matches!(
            vc.check_claim_accounts(&vc.destination_address, &mint, &spoofed, &mint),
            Err(VestingError::TokenVaultIsWrong)
        ));
        assert!(matches!(
            vc.check_claim_accounts(&vc.destination_address, &mint, &vc.token_vault, &spoofed),
            Err(VestingError::InvalidTokenMint)
        ));
        assert!(matches!(
            vc.check_claim_accounts(&vc.destination_address, &spoofed, &vc.token_vault, &mint),
            Err(VestingError::DestinationMintMismatch)
        ));
    }

    #[test]
    fn update_requires_the_stored_authority() {
        let authority = Pubkey::new_unique();
        let vc = contract(authority);
        assert!(vc.check_update_authority(&authority).is_ok());
        assert!(matches!(
            vc.check_update_authority(&Pubkey::new_unique()),
            Err(VestingError::SignerMustBeUpdateAuthority)
        ));
    }

    #[test]
    fn contract_without_authority_is_never_updatable() {
        let vc = contract(Pubkey::default());
        assert!(!vc.has_update_authority());
        assert!(matches!(
            vc.check_update_authority(&Pubkey::default()),
            Err(VestingError::SignerMustBeUpdateAuthority)
        ));
    }

    #[test]
    fn close_requires_empty_stored_vault() {
        let vc = contract(Pubkey::default());
        assert!(vc
            .check_close_accounts(&vc.issuer_address, &vc.token_vault, 0)
            .is_ok());
        assert!(matches!(
            vc.check_close_accounts(&vc.issuer_address, &vc.token_vault, 5),
            Err(VestingError::TokenVaultNotEmpty)
        ));
        assert!(matches!(
            vc.check_close_accounts(&vc.issuer_address, &Pubkey::new_unique(), 0),
            Err(VestingError::TokenVaultIsWrong)
        ));
        assert!(matches!(
            vc.check_close_accounts(&Pubkey::new_unique(), &vc.token_vault, 0),
            Err(VestingError::IssuerMustMatchVestingContract)
        ));
    }
}
