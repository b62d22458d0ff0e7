//! On-chain state definitions for the reward vault.

use anchor_lang::prelude::*;

// =============================================================================
// REWARD VAULT
// =============================================================================

/// Main vault state for an (asset, reward) token pair.
/// Seeds: ["vault", asset_mint, reward_mint]
#[account]
pub struct RewardVault {
    /// Version for future migrations
    pub version: u8,
    /// PDA bump
    pub bump: u8,
    /// Staked asset mint
    pub asset_mint: Pubkey,
    /// Reward token mint
    pub reward_mint: Pubkey,
    /// Vault's principal token account
    pub asset_vault: Pubkey,
    /// Vault's reward treasury token account (funded externally)
    pub reward_treasury: Pubkey,
    /// Admin authority
    pub admin: Pubkey,
    /// Is vault paused? (gates deposits only; exits stay open)
    pub paused: bool,
    /// Payout variant: true = withdraw pays owed reward in the same call,
    /// false = owed reward stays banked until an explicit harvest
    pub auto_harvest: bool,
    /// Total shares outstanding (equals the sum of all position shares)
    pub total_shares: u64,
    /// Principal asset units held by the vault
    pub total_assets: u64,
    /// Cumulative reward per share since genesis (scaled by REWARD_SCALE)
    pub acc_reward_per_share: u128,
    /// Slot at which the accumulator was last advanced
    pub last_accrual_slot: u64,
    /// Reward base units distributed per slot, fixed at initialization
    pub reward_rate_per_slot: u64,
    /// Reserved for future use
    pub _reserved: [u8; 64],
}

impl RewardVault {
    pub const LEN: usize = 8  // discriminator
        + 1   // version
        + 1   // bump
        + 32  // asset_mint
        + 32  // reward_mint
        + 32  // asset_vault
        + 32  // reward_treasury
        + 32  // admin
        + 1   // paused
        + 1   // auto_harvest
        + 8   // total_shares
        + 8   // total_assets
        + 16  // acc_reward_per_share
        + 8   // last_accrual_slot
        + 8   // reward_rate_per_slot
        + 64; // _reserved
}

// =============================================================================
// STAKE POSITION
// =============================================================================

/// Per-user stake state. Created lazily on first deposit, never closed:
/// a zero-share, zero-owed position is equivalent to absence.
/// Seeds: ["position", vault, owner]
#[account]
pub struct StakePosition {
    /// Version for future migrations
    pub version: u8,
    /// PDA bump
    pub bump: u8,
    /// Position owner
    pub owner: Pubkey,
    /// Parent vault
    pub vault: Pubkey,
    /// Share balance (1:1 with deposited assets)
    pub shares: u64,
    /// Accumulator value at the last reconciliation (scaled by REWARD_SCALE)
    pub reward_checkpoint: u128,
    /// Reward reconciled but not yet transferred out
    pub owed_reward: u64,
    /// Reserved for future use
    pub _reserved: [u8; 32],
}

impl StakePosition {
    pub const LEN: usize = 8  // discriminator
        + 1   // version
        + 1   // bump
        + 32  // owner
        + 32  // vault
        + 8   // shares
        + 16  // reward_checkpoint
        + 8   // owed_reward
        + 32; // _reserved
}
