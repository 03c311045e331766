use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount};

use crate::constants::{VAULT_AUTHORITY_SEED, VESTING_CONTRACT_SEED};
use crate::state::VestingContract;
use crate::utils::pda;

pub fn close_vesting_contract(ctx: Context<CloseVestingContract>) -> Result<()> {
    let vc = &ctx.accounts.vesting_contract;
    vc.check_version()?;
    vc.check_close_accounts(
        &ctx.accounts.issuer.key(),
        &ctx.accounts.token_vault.key(),
        ctx.accounts.token_vault.amount,
    )?;
    pda::verify_vault_authority(
        &vc.destination_address,
        &vc.mint_address,
        vc.vault_authority_bump,
        &ctx.accounts.vault_authority.key(),
    )?;

    let destination = vc.destination_address;
    let mint = vc.mint_address;
    let token_vault = vc.token_vault;
    let issuer = vc.issuer_address;
    let signer_seeds: &[&[&[u8]]] = &[&[
        destination.as_ref(),
        mint.as_ref(),
        VAULT_AUTHORITY_SEED,
        &[vc.vault_authority_bump],
    ]];

    // Vault rent goes to the issuer here; the record's rent follows via `close = issuer`.
    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.token_vault.to_account_info(),
            destination: ctx.accounts.issuer.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    ))?;

    emit!(VestingContractClosed {
        vesting_contract: ctx.accounts.vesting_contract.key(),
        issuer,
        token_vault,
    });

    msg!("[vesting] closed vault={} issuer={}", token_vault, issuer);
    Ok(())
}

#[derive(Accounts)]
pub struct CloseVestingContract<'info> {
    /// CHECK: Must equal the VestingContract's issuer; checked in-handler.
    #[account(mut)]
    pub issuer: UncheckedAccount<'info>,

    #[account(
        mut,
        close = issuer,
        seeds = [VESTING_CONTRACT_SEED, vesting_contract.token_vault.as_ref()],
        bump = vesting_contract.bump,
    )]
    pub vesting_contract: Account<'info, VestingContract>,

    #[account(mut)]
    pub token_vault: Account<'info, TokenAccount>,

    /// CHECK: Re-derived from the VestingContract's destination and mint in-handler.
    pub vault_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingContractClosed {
    pub vesting_contract: Pubkey,
    pub issuer: Pubkey,
    pub token_vault: Pubkey,
}
