//! Event definitions for the reward vault.

use anchor_lang::prelude::*;

/// Emitted when a new vault is initialized.
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub asset_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub admin: Pubkey,
    pub reward_rate_per_slot: u64,
    pub auto_harvest: bool,
    pub timestamp: i64,
}

/// Emitted when a user deposits assets and receives shares.
#[event]
pub struct Deposited {
    pub depositor: Pubkey,
    pub receiver: Pubkey,
    pub vault: Pubkey,
    pub assets: u64,
    pub shares_minted: u64,
    pub total_shares: u64,
    pub timestamp: i64,
}

/// Emitted when a user withdraws principal (burning shares).
#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub assets: u64,
    pub shares_burned: u64,
    /// Reward paid out in the same call (immediate-payout vaults only).
    pub reward_paid: u64,
    pub timestamp: i64,
}

/// Emitted when a user harvests owed rewards.
#[event]
pub struct Harvested {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted when a user exits via emergency withdraw, forfeiting rewards.
#[event]
pub struct EmergencyWithdrawn {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub assets: u64,
    pub shares_burned: u64,
    /// Owed reward discarded by the forfeiture.
    pub reward_forfeited: u64,
    pub timestamp: i64,
}

/// Emitted when the vault is paused.
#[event]
pub struct VaultPausedEvent {
    pub vault: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted when the vault is resumed.
#[event]
pub struct VaultResumed {
    pub vault: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted when admin is updated.
#[event]
pub struct AdminUpdated {
    pub vault: Pubkey,
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}
