use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_AUTHORITY_SEED, VESTING_CONTRACT_SEED};
use crate::error::VestingError;
use crate::state::{schedule, VestingContract};
use crate::utils::pda;

pub fn transfer_vested(ctx: Context<TransferVested>, vault_authority_bump: u8) -> Result<()> {
    let vc = &ctx.accounts.vesting_contract;
    vc.check_version()?;
    vc.check_claim_accounts(
        &ctx.accounts.destination_address.key(),
        &ctx.accounts.destination_address.mint,
        &ctx.accounts.token_vault.key(),
        &ctx.accounts.token_mint.key(),
    )?;
    require!(
        vault_authority_bump == vc.vault_authority_bump,
        VestingError::VaultAuthorityMismatch
    );
    pda::verify_vault_authority(
        &vc.destination_address,
        &vc.mint_address,
        vault_authority_bump,
        &ctx.accounts.vault_authority.key(),
    )?;

    let now = Clock::get()?.unix_timestamp;
    let amount = schedule::claimable_amount(&vc.schedule, now)?;
    // Already-claimed vests never count again, so a repeat call is a no-op.
    if amount == 0 {
        msg!("[vesting] nothing claimable contract={}", vc.key());
        return Ok(());
    }

    let destination = vc.destination_address;
    let mint = vc.mint_address;
    let signer_seeds: &[&[&[u8]]] = &[&[
        destination.as_ref(),
        mint.as_ref(),
        VAULT_AUTHORITY_SEED,
        &[vault_authority_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.destination_address.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let vesting_contract_key = ctx.accounts.vesting_contract.key();
    let vc = &mut ctx.accounts.vesting_contract;
    let flagged = schedule::mark_claimed(&mut vc.schedule, now);
    let claimed_total = schedule::claimed_amount(&vc.schedule)?;
    let remaining = schedule::total_amount(&vc.schedule)?
        .checked_sub(claimed_total)
        .ok_or(VestingError::MathOverflow)?;

    emit!(VestedTransferred {
        vesting_contract: vesting_contract_key,
        destination,
        amount,
        claimed_total,
        remaining,
        timestamp: now,
    });

    msg!(
        "[vesting] transferred amount={} vests={} remaining={}",
        amount,
        flagged,
        remaining
    );
    Ok(())
}

#[derive(Accounts)]
pub struct TransferVested<'info> {
    #[account(mut)]
    pub destination_address: Account<'info, TokenAccount>,

    #[account(mut)]
    pub token_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VESTING_CONTRACT_SEED, vesting_contract.token_vault.as_ref()],
        bump = vesting_contract.bump,
    )]
    pub vesting_contract: Account<'info, VestingContract>,

    /// CHECK: Re-derived from the VestingContract's destination and mint in-handler.
    pub vault_authority: UncheckedAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestedTransferred {
    pub vesting_contract: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub remaining: u64,
    pub timestamp: i64,
}
