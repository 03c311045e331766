use anchor_lang::prelude::*;

use crate::constants::VESTING_CONTRACT_SEED;
use crate::state::{schedule, VestingContract};

/// Read-only: emits what a claim would move right now. Mutates nothing.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
    let vc = &ctx.accounts.vesting_contract;
    vc.check_version()?;
    let now = Clock::get()?.unix_timestamp;

    emit!(VestingQuote {
        vesting_contract: vc.key(),
        claimable: schedule::claimable_amount(&vc.schedule, now)?,
        claimed: schedule::claimed_amount(&vc.schedule)?,
        locked: schedule::locked_amount(&vc.schedule, now)?,
        next_unlock_date: schedule::next_unlock_date(&vc.schedule, now),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [VESTING_CONTRACT_SEED, vesting_contract.token_vault.as_ref()],
        bump = vesting_contract.bump,
    )]
    pub vesting_contract: Account<'info, VestingContract>,
}

#[event]
pub struct VestingQuote {
    pub vesting_contract: Pubkey,
    pub claimable: u64,
    pub claimed: u64,
    pub locked: u64,
    pub next_unlock_date: Option<i64>,
}
