use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{
    ACCOUNT_VERSION, TOKEN_VAULT_SEED, VAULT_AUTHORITY_SEED, VESTING_CONTRACT_SEED,
};
use crate::error::VestingError;
use crate::state::{schedule, VestInput, VestingContract};

pub fn create_vesting_contract(
    ctx: Context<CreateVestingContract>,
    vesting_schedule: Vec<VestInput>,
    update_authority: Option<Pubkey>,
) -> Result<()> {
    let sorted = schedule::build(&vesting_schedule)?;
    let total = schedule::total_amount(&sorted)?;

    let update_authority = match update_authority {
        Some(key) => {
            require!(key != Pubkey::default(), VestingError::InvalidUpdateAuthority);
            key
        }
        None => Pubkey::default(),
    };

    // Move the committed total into custody before the record exists.
    if total > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.token_src.to_account_info(),
                    to: ctx.accounts.token_vault.to_account_info(),
                    authority: ctx.accounts.authority.to_account_info(),
                },
            ),
            total,
        )?;
    }

    let vesting_contract_key = ctx.accounts.vesting_contract.key();
    let vc = &mut ctx.accounts.vesting_contract;
    vc.version = ACCOUNT_VERSION;
    vc.bump = ctx.bumps.vesting_contract;
    vc.issuer_address = ctx.accounts.authority.key();
    vc.destination_address = ctx.accounts.destination_address.key();
    vc.mint_address = ctx.accounts.token_mint.key();
    vc.token_vault = ctx.accounts.token_vault.key();
    vc.vault_authority_bump = ctx.bumps.vault_authority;
    vc.update_authority = update_authority;
    vc.schedule = sorted;

    emit!(VestingContractCreated {
        vesting_contract: vesting_contract_key,
        issuer: vc.issuer_address,
        destination: vc.destination_address,
        mint: vc.mint_address,
        token_vault: vc.token_vault,
        update_authority: vc.update_authority,
        total_amount: total,
        vest_count: vc.schedule.len() as u16,
    });

    msg!(
        "[vesting] created contract={} total={} vests={}",
        vesting_contract_key,
        total,
        vc.schedule.len()
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(vesting_schedule: Vec<VestInput>)]
pub struct CreateVestingContract<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = token_src.mint == token_mint.key() @ VestingError::InvalidTokenMint,
    )]
    pub token_src: Box<Account<'info, TokenAccount>>,

    /// The destination for the tokens when they are vested.
    #[account(
        constraint = destination_address.mint == token_mint.key() @ VestingError::DestinationMintMismatch,
    )]
    pub destination_address: Box<Account<'info, TokenAccount>>,

    pub token_mint: Box<Account<'info, Mint>>,

    /// CHECK: PDA that only signs for the vault; holds no data.
    #[account(
        seeds = [
            destination_address.key().as_ref(),
            token_mint.key().as_ref(),
            VAULT_AUTHORITY_SEED,
        ],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = authority,
        token::mint = token_mint,
        token::authority = vault_authority,
        seeds = [
            destination_address.key().as_ref(),
            token_mint.key().as_ref(),
            TOKEN_VAULT_SEED,
        ],
        bump
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        space = VestingContract::space(vesting_schedule.len()),
        seeds = [VESTING_CONTRACT_SEED, token_vault.key().as_ref()],
        bump
    )]
    pub vesting_contract: Box<Account<'info, VestingContract>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingContractCreated {
    pub vesting_contract: Pubkey,
    pub issuer: Pubkey,
    pub destination: Pubkey,
    pub mint: Pubkey,
    pub token_vault: Pubkey,
    pub update_authority: Pubkey,
    pub total_amount: u64,
    pub vest_count: u16,
}
