//! Vesting schedule bookkeeping.
//! - a stored schedule is sorted ascending by `(unlock_date, amount)`
//! - a vest is claimable once `unlock_date <= now` and it is not yet claimed
//! - updates may only keep or push future dates later, never change amounts

use anchor_lang::prelude::borsh;
use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use bytemuck::{Pod, Zeroable};

use crate::constants::MAX_SCHEDULE_LEN;
use crate::error::VestingError;

/// A single release stored on the VestingContract.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable,
)]
#[repr(C)]
pub struct Vest {
    /// The amount that unlocks at the date.
    pub amount: u64,
    /// The current unlock date (Unix seconds, UTC).
    pub unlock_date: i64,
    /// Non-zero once the amount has been transferred to the destination.
    pub claimed: u8,
    pub _padding: [u8; 7],
}

impl Vest {
    pub const SIZE: usize = core::mem::size_of::<Vest>();

    pub fn new(amount: u64, unlock_date: i64) -> Self {
        Self {
            amount,
            unlock_date,
            claimed: 0,
            _padding: [0u8; 7],
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed != 0
    }

    pub fn is_claimable(&self, now: i64) -> bool {
        !self.is_claimed() && self.unlock_date <= now
    }

    fn sort_key(&self) -> (i64, u64) {
        (self.unlock_date, self.amount)
    }
}

/// Instruction input (amount + unlock date). The claimed flag is never caller-supplied.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestInput {
    pub amount: u64,
    pub unlock_date: i64,
}

impl From<VestInput> for Vest {
    fn from(input: VestInput) -> Self {
        Vest::new(input.amount, input.unlock_date)
    }
}

/// Build the stored schedule from creation input.
pub fn build(inputs: &[VestInput]) -> Result<Vec<Vest>, VestingError> {
    if inputs.is_empty() {
        return Err(VestingError::EmptySchedule);
    }
    if inputs.len() > MAX_SCHEDULE_LEN {
        return Err(VestingError::ScheduleTooLong);
    }
    let mut schedule: Vec<Vest> = inputs.iter().copied().map(Vest::from).collect();
    schedule.sort_by_key(Vest::sort_key);
    Ok(schedule)
}

/// Sum of every vest, claimed or not.
pub fn total_amount(schedule: &[Vest]) -> Result<u64, VestingError> {
    checked_sum(schedule.iter())
}

/// Sum of vests already transferred out.
pub fn claimed_amount(schedule: &[Vest]) -> Result<u64, VestingError> {
    checked_sum(schedule.iter().filter(|v| v.is_claimed()))
}

/// Sum of unclaimed vests whose unlock date has passed.
pub fn claimable_amount(schedule: &[Vest], now: i64) -> Result<u64, VestingError> {
    checked_sum(schedule.iter().filter(|v| v.is_claimable(now)))
}

/// Sum of unclaimed vests still waiting on their unlock date.
pub fn locked_amount(schedule: &[Vest], now: i64) -> Result<u64, VestingError> {
    checked_sum(
        schedule
            .iter()
            .filter(|v| !v.is_claimed() && v.unlock_date > now),
    )
}

/// Earliest unlock date strictly after `now`.
pub fn next_unlock_date(schedule: &[Vest], now: i64) -> Option<i64> {
    schedule
        .iter()
        .find(|v| !v.is_claimed() && v.unlock_date > now)
        .map(|v| v.unlock_date)
}

/// Flag every claimable vest as claimed. Returns the number of vests flagged.
///
/// Callers must only persist the result once the matching transfer of
/// [`claimable_amount`] has succeeded.
pub fn mark_claimed(schedule: &mut [Vest], now: i64) -> usize {
    let mut flagged = 0;
    for vest in schedule.iter_mut().filter(|v| v.is_claimable(now)) {
        vest.claimed = 1;
        flagged += 1;
    }
    flagged
}

/// Validate a replacement schedule against the stored one and return the
/// schedule to persist.
///
/// Both sides are compared position by position after sorting. Amounts must
/// match exactly and every date must lie strictly after `now`, so a vest that
/// has already unlocked (and may be claimed) can never appear in an update. A
/// date may stay as stored but never move earlier. Claimed flags always come
/// from the stored schedule.
pub fn apply_update(
    current: &[Vest],
    replacement: &[VestInput],
    now: i64,
) -> Result<Vec<Vest>, VestingError> {
    if current.len() != replacement.len() {
        return Err(VestingError::CannotChangeAmount);
    }

    let mut incoming = replacement.to_vec();
    incoming.sort_by_key(|v| (v.unlock_date, v.amount));

    let mut updated = Vec::with_capacity(current.len());
    for (existing, next) in current.iter().zip(incoming.iter()) {
        if existing.amount != next.amount {
            return Err(VestingError::CannotChangeAmount);
        }
        if next.unlock_date <= now {
            return Err(VestingError::NewDateMustBeInTheFuture);
        }
        if next.unlock_date < existing.unlock_date {
            return Err(VestingError::NewDateMustBeLaterThanCurrent);
        }
        updated.push(Vest {
            unlock_date: next.unlock_date,
            ..*existing
        });
    }
    // `incoming` is sorted and amounts match pairwise, so `updated` is sorted too.
    Ok(updated)
}

/// blake3 digest of the schedule's raw layout, emitted with schedule updates.
pub fn digest(schedule: &[Vest]) -> [u8; 32] {
    *blake3::hash(bytemuck::cast_slice(schedule)).as_bytes()
}

fn checked_sum<'a>(vests: impl Iterator<Item = &'a Vest>) -> Result<u64, VestingError> {
    let mut sum: u64 = 0;
    for vest in vests {
        sum = sum
            .checked_add(vest.amount)
            .ok_or(VestingError::MathOverflow)?;
    }
    Ok(sum)
}
