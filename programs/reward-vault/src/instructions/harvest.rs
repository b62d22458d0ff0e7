//! Harvest owed rewards without touching shares.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::accrual::reconcile;
use crate::constants::{POSITION_SEED, VAULT_SEED};
use crate::errors::VaultError;
use crate::events::Harvested;
use crate::state::{RewardVault, StakePosition};

#[derive(Accounts)]
pub struct Harvest<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.asset_mint.as_ref(), vault.reward_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, RewardVault>>,

    /// Reward mint
    #[account(address = vault.reward_mint @ VaultError::InvalidMint)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Owner's stake position
    #[account(
        mut,
        seeds = [POSITION_SEED, vault.key().as_ref(), owner.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == owner.key() @ VaultError::Unauthorized,
    )]
    pub position: Box<Account<'info, StakePosition>>,

    /// Vault's reward treasury (source)
    #[account(
        mut,
        address = vault.reward_treasury,
    )]
    pub reward_treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Owner's reward token account (destination)
    #[account(
        mut,
        constraint = owner_reward.owner == owner.key() @ VaultError::Unauthorized,
        constraint = owner_reward.mint == vault.reward_mint @ VaultError::InvalidMint,
    )]
    pub owner_reward: Box<InterfaceAccount<'info, TokenAccount>>,

    pub reward_token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<Harvest>) -> Result<()> {
    let clock = Clock::get()?;

    {
        let vault = &mut ctx.accounts.vault;
        let position = &mut ctx.accounts.position;
        reconcile(vault, position, clock.slot)?;
    }

    let payout = ctx.accounts.position.owed_reward;

    // Nothing owed: no transfer, still a successful call
    if payout > 0 {
        require!(
            ctx.accounts.reward_treasury.amount >= payout,
            VaultError::InsufficientRewardFunds
        );

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

        let payout_ctx = CpiContext::new_with_signer(
            ctx.accounts.reward_token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.reward_treasury.to_account_info(),
                mint: ctx.accounts.reward_mint.to_account_info(),
                to: ctx.accounts.owner_reward.to_account_info(),
                authority: ctx.accounts.vault.to_account_info(),
            },
            signer,
        );
        anchor_spl::token_interface::transfer_checked(
            payout_ctx,
            payout,
            ctx.accounts.reward_mint.decimals,
        )?;

        ctx.accounts.position.owed_reward = 0;
    }

    emit!(Harvested {
        owner: ctx.accounts.owner.key(),
        vault: ctx.accounts.vault.key(),
        amount: payout,
        timestamp: clock.unix_timestamp,
    });

    msg!("Harvested {} reward tokens", payout);
    Ok(())
}
