//! Instruction handlers for the reward vault.

pub mod admin;
pub mod deposit;
pub mod emergency_withdraw;
pub mod harvest;
pub mod initialize;
pub mod preview;
pub mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use emergency_withdraw::*;
pub use harvest::*;
pub use initialize::*;
pub use preview::*;
pub use withdraw::*;
