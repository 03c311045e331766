use anchor_lang::prelude::*;

use crate::constants::VESTING_CONTRACT_SEED;
use crate::state::{schedule, VestInput, VestingContract};

pub fn update_vesting_schedule(
    ctx: Context<UpdateVestingSchedule>,
    vesting_schedule: Vec<VestInput>,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let vesting_contract_key = ctx.accounts.vesting_contract.key();

    let vc = &mut ctx.accounts.vesting_contract;
    vc.check_version()?;
    vc.check_update_authority(&authority)?;

    let now = Clock::get()?.unix_timestamp;
    let updated = schedule::apply_update(&vc.schedule, &vesting_schedule, now)?;

    let previous_digest = schedule::digest(&vc.schedule);
    vc.schedule = updated;
    let new_digest = schedule::digest(&vc.schedule);

    emit!(VestingScheduleUpdated {
        vesting_contract: vesting_contract_key,
        authority,
        previous_digest,
        new_digest,
        timestamp: now,
    });

    msg!(
        "[vesting] schedule updated contract={} next_unlock={:?}",
        vesting_contract_key,
        schedule::next_unlock_date(&vc.schedule, now)
    );
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateVestingSchedule<'info> {
    pub authority: Signer<'info>,

    /// The VestingContract account to update.
    #[account(
        mut,
        seeds = [VESTING_CONTRACT_SEED, vesting_contract.token_vault.as_ref()],
        bump = vesting_contract.bump,
    )]
    pub vesting_contract: Account<'info, VestingContract>,
}

#[event]
pub struct VestingScheduleUpdated {
    pub vesting_contract: Pubkey,
    pub authority: Pubkey,
    pub previous_digest: [u8; 32],
    pub new_digest: [u8; 32],
    pub timestamp: i64,
}
