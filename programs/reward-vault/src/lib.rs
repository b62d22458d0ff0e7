#![allow(clippy::too_many_arguments)]

//! # Reward Vault
//!
//! Tokenized staking vault that mints pooled shares 1:1 against a deposited
//! asset and continuously distributes a separate reward token to
//! share-holders, proportionally to the time-weighted size of their stake.
//!
//! Two deployable configurations share the same accrual engine: an
//! immediate-payout vault (withdraw auto-harvests) and a deferred-ledger
//! vault (owed reward stays claimable via `harvest` after the position is
//! closed). The variant is chosen at `initialize_vault`.

use anchor_lang::prelude::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

pub mod accrual;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use accrual::*;
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Reward Vault",
    project_url: "https://github.com/twzrd-sol/attention-oracle-program",
    contacts: "email:security@twzrd.xyz",
    policy: "https://github.com/twzrd-sol/attention-oracle-program/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/twzrd-sol/attention-oracle-program"
}

#[program]
pub mod reward_vault {
    use super::*;

    // -------------------------------------------------------------------------
    // Vault Lifecycle
    // -------------------------------------------------------------------------

    /// Initialize a new vault for an (asset, reward) token pair.
    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        reward_rate_per_slot: u64,
        auto_harvest: bool,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, reward_rate_per_slot, auto_harvest)
    }

    // -------------------------------------------------------------------------
    // User Actions
    // -------------------------------------------------------------------------

    /// Deposit assets; shares are minted 1:1 to the receiver's position.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Burn shares and withdraw principal 1:1. Immediate-payout vaults also
    /// transfer the crystallized reward in the same call.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Transfer all owed reward to the caller. No-op when nothing is owed.
    pub fn harvest(ctx: Context<Harvest>) -> Result<()> {
        instructions::harvest::handler(ctx)
    }

    /// Exit with principal only, forfeiting all owed and pending reward.
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw::handler(ctx)
    }

    /// Read-only: owed reward plus pending accrual at the current slot.
    pub fn preview_harvest_rewards(ctx: Context<PreviewHarvestRewards>) -> Result<u64> {
        instructions::preview::handler(ctx)
    }

    // -------------------------------------------------------------------------
    // Admin
    // -------------------------------------------------------------------------

    /// Pause the vault (admin only; stops deposits, exits stay open).
    pub fn pause(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::pause(ctx)
    }

    /// Resume the vault (admin only).
    pub fn resume(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::resume(ctx)
    }

    /// Update admin authority.
    pub fn update_admin(ctx: Context<AdminAction>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::update_admin(ctx, new_admin)
    }
}
