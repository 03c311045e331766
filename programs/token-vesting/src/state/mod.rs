pub mod schedule;
pub mod vesting_contract;

pub use schedule::{Vest, VestInput};
pub use vesting_contract::*;
