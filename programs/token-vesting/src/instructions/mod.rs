pub mod create_vesting_contract;
pub mod transfer_vested;
pub mod update_vesting_schedule;
pub mod close_vesting_contract;
pub mod emit_vesting_quote;

pub use create_vesting_contract::*;
pub use transfer_vested::*;
pub use update_vesting_schedule::*;
pub use close_vesting_contract::*;
pub use emit_vesting_quote::*;
