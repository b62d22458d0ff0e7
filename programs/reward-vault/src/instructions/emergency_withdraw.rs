//! Principal-only exit that forfeits all owed and pending reward.
//!
//! The forfeited reward is not redistributed: it is simply never attributed
//! to any position. Future accrual is computed over the reduced share supply,
//! so remaining stakers earn a larger share going forward, but the forfeited
//! amount stays in the treasury.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::accrual::reconcile;
use crate::constants::{POSITION_SEED, VAULT_SEED};
use crate::errors::VaultError;
use crate::events::EmergencyWithdrawn;
use crate::state::{RewardVault, StakePosition};

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.asset_mint.as_ref(), vault.reward_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, RewardVault>>,

    /// Asset mint
    #[account(address = vault.asset_mint @ VaultError::InvalidMint)]
    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Owner's stake position
    #[account(
        mut,
        seeds = [POSITION_SEED, vault.key().as_ref(), owner.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == owner.key() @ VaultError::Unauthorized,
    )]
    pub position: Box<Account<'info, StakePosition>>,

    /// Vault's principal token account (source)
    #[account(
        mut,
        address = vault.asset_vault,
    )]
    pub asset_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Destination for the returned principal
    #[account(
        mut,
        constraint = receiver_asset.mint == vault.asset_mint @ VaultError::InvalidMint,
    )]
    pub receiver_asset: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let clock = Clock::get()?;

    // Reconcile first so the global accumulator advances for everyone else;
    // the owner's crystallized reward is then discarded, not paid.
    {
        let vault = &mut ctx.accounts.vault;
        let position = &mut ctx.accounts.position;
        reconcile(vault, position, clock.slot)?;
    }

    let shares = ctx.accounts.position.shares;
    let forfeited = ctx.accounts.position.owed_reward;

    {
        let vault = &mut ctx.accounts.vault;
        let position = &mut ctx.accounts.position;
        position.shares = 0;
        position.owed_reward = 0;
        vault.total_shares = vault
            .total_shares
            .checked_sub(shares)
            .ok_or(VaultError::MathOverflow)?;
        vault.total_assets = vault
            .total_assets
            .checked_sub(shares)
            .ok_or(VaultError::MathOverflow)?;
    }

    if shares > 0 {
        let asset_mint_key = ctx.accounts.vault.asset_mint;
        let reward_mint_key = ctx.accounts.vault.reward_mint;
        let bump = ctx.accounts.vault.bump;
        let vault_seeds: &[&[u8]] = &[
            VAULT_SEED,
            asset_mint_key.as_ref(),
            reward_mint_key.as_ref(),
            &[bump],
        ];
        let signer = &[vault_seeds];

        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.asset_token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.asset_vault.to_account_info(),
                mint: ctx.accounts.asset_mint.to_account_info(),
                to: ctx.accounts.receiver_asset.to_account_info(),
                authority: ctx.accounts.vault.to_account_info(),
            },
            signer,
        );
        anchor_spl::token_interface::transfer_checked(
            transfer_ctx,
            shares,
            ctx.accounts.asset_mint.decimals,
        )?;
    }

    emit!(EmergencyWithdrawn {
        owner: ctx.accounts.owner.key(),
        vault: ctx.accounts.vault.key(),
        assets: shares,
        shares_burned: shares,
        reward_forfeited: forfeited,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Emergency withdrew {} assets, forfeited {} reward tokens",
        shares,
        forfeited
    );
    Ok(())
}
