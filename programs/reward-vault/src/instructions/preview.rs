//! Read-only reward preview.

use anchor_lang::prelude::*;

use crate::accrual::preview_pending;
use crate::constants::{POSITION_SEED, VAULT_SEED};
use crate::state::{RewardVault, StakePosition};

#[derive(Accounts)]
pub struct PreviewHarvestRewards<'info> {
    #[account(
        seeds = [VAULT_SEED, vault.asset_mint.as_ref(), vault.reward_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, RewardVault>>,

    #[account(
        seeds = [POSITION_SEED, vault.key().as_ref(), position.owner.as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, StakePosition>>,
}

/// Owed reward plus what a reconciliation at the current slot would add.
/// Commits nothing; repeated calls within a slot return the same value.
pub fn handler(ctx: Context<PreviewHarvestRewards>) -> Result<u64> {
    let clock = Clock::get()?;
    let total = preview_pending(&ctx.accounts.vault, &ctx.accounts.position, clock.slot)?;

    msg!(
        "Previewed rewards for {}: {}",
        ctx.accounts.position.owner,
        total
    );
    Ok(total)
}
