//! Withdraw principal by burning shares (1:1).
//!
//! Pending reward is crystallized into `owed_reward` before the share burn.
//! Immediate-payout vaults (`auto_harvest`) then transfer the owed reward in
//! the same call; deferred-ledger vaults leave it banked for a later harvest.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::accrual::reconcile;
use crate::constants::{POSITION_SEED, VAULT_SEED};
use crate::errors::VaultError;
use crate::events::Withdrawn;
use crate::state::{RewardVault, StakePosition};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    /// Vault's principal token account (source)
    #[account(
        mut,
        address = vault.asset_vault,
    )]
    pub asset_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Destination for the withdrawn principal; any account of the asset mint
    #[account(
        mut,
        constraint = receiver_asset.mint == vault.asset_mint @ VaultError::InvalidMint,
    )]
    pub receiver_asset: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Vault's reward treasury (source for immediate payout)
    #[account(
        mut,
        address = vault.reward_treasury,
    )]
    pub reward_treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Owner's reward token account (immediate payout destination)
    #[account(
        mut,
        constraint = owner_reward.owner == owner.key() @ VaultError::Unauthorized,
        constraint = owner_reward.mint == vault.reward_mint @ VaultError::InvalidMint,
    )]
    pub owner_reward: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_token_program: Interface<'info, TokenInterface>,
    pub reward_token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::ZeroAmount);
    require!(
        ctx.accounts.position.shares >= amount,
        VaultError::InsufficientShares
    );

    let clock = Clock::get()?;

    // Crystallize pending reward before the share balance changes.
    {
        let vault = &mut ctx.accounts.vault;
        let position = &mut ctx.accounts.position;
        reconcile(vault, position, clock.slot)?;
    }

    // Burn shares and release principal (1:1)
    {
        let vault = &mut ctx.accounts.vault;
        let position = &mut ctx.accounts.position;
        position.shares = position
            .shares
            .checked_sub(amount)
            .ok_or(VaultError::MathOverflow)?;
        vault.total_shares = vault
            .total_shares
            .checked_sub(amount)
            .ok_or(VaultError::MathOverflow)?;
        vault.total_assets = vault
            .total_assets
            .checked_sub(amount)
            .ok_or(VaultError::MathOverflow)?;
    }

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

    // Transfer principal to receiver via vault PDA signer
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
        amount,
        ctx.accounts.asset_mint.decimals,
    )?;

    // Immediate-payout variant: pay out the freshly crystallized reward now
    let mut reward_paid = 0u64;
    if ctx.accounts.vault.auto_harvest {
        let owed = ctx.accounts.position.owed_reward;
        if owed > 0 {
            require!(
                ctx.accounts.reward_treasury.amount >= owed,
                VaultError::InsufficientRewardFunds
            );

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
                owed,
                ctx.accounts.reward_mint.decimals,
            )?;

            ctx.accounts.position.owed_reward = 0;
            reward_paid = owed;
        }
    }

    emit!(Withdrawn {
        owner: ctx.accounts.owner.key(),
        vault: ctx.accounts.vault.key(),
        assets: amount,
        shares_burned: amount,
        reward_paid,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Withdrew {} assets, remaining shares={}, reward_paid={}",
        amount,
        ctx.accounts.position.shares,
        reward_paid
    );
    Ok(())
}
