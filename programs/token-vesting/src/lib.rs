#![allow(unexpected_cfgs)]

//! # Token Vesting
//!
//! Custodies an SPL token balance and releases it to a fixed destination
//! according to a schedule of discrete unlock dates. An optional update
//! authority may delay (never accelerate) unclaimed unlocks.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
use state::VestInput;

declare_id!("61EiRiRNSU4ZEhnn8JpC6L9VRHz6oKvD9YzSP6bNZNWp");

#[program]
pub mod token_vesting {
    use super::*;

    /// Fund a new vault with the schedule total and store the sorted schedule.
    pub fn create_vesting_contract(
        ctx: Context<CreateVestingContract>,
        vesting_schedule: Vec<VestInput>,
        update_authority: Option<Pubkey>,
    ) -> Result<()> {
        instructions::create_vesting_contract(ctx, vesting_schedule, update_authority)
    }

    /// Send every unlocked, unclaimed vest to the destination.
    pub fn transfer_vested(ctx: Context<TransferVested>, vault_authority_bump: u8) -> Result<()> {
        instructions::transfer_vested(ctx, vault_authority_bump)
    }

    /// Replace the schedule; only later unlock dates are accepted.
    pub fn update_vesting_schedule(
        ctx: Context<UpdateVestingSchedule>,
        vesting_schedule: Vec<VestInput>,
    ) -> Result<()> {
        instructions::update_vesting_schedule(ctx, vesting_schedule)
    }

    /// Close the drained vault and the record, returning rent to the issuer.
    pub fn close_vesting_contract(ctx: Context<CloseVestingContract>) -> Result<()> {
        instructions::close_vesting_contract(ctx)
    }

    /// Emit the current claimable, claimed and locked totals without mutating anything.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
        instructions::emit_vesting_quote(ctx)
    }
}
