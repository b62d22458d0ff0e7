//! Deposit assets and receive vault shares (1:1).

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::accrual::reconcile;
use crate::constants::{POSITION_SEED, VAULT_SEED};
use crate::errors::VaultError;
use crate::events::Deposited;
use crate::state::{RewardVault, StakePosition};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// CHECK: owner of the position the shares are credited to. May be the
    /// depositor or any third party; only its key is read.
    pub receiver: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.asset_mint.as_ref(), vault.reward_mint.as_ref()],
        bump = vault.bump,
        constraint = !vault.paused @ VaultError::VaultPaused,
    )]
    pub vault: Box<Account<'info, RewardVault>>,

    /// Asset mint
    #[account(address = vault.asset_mint @ VaultError::InvalidMint)]
    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Receiver's stake position (created on first deposit)
    #[account(
        init_if_needed,
        payer = depositor,
        space = StakePosition::LEN,
        seeds = [POSITION_SEED, vault.key().as_ref(), receiver.key().as_ref()],
        bump,
    )]
    pub position: Box<Account<'info, StakePosition>>,

    /// Depositor's asset token account (source)
    #[account(
        mut,
        constraint = depositor_asset.owner == depositor.key() @ VaultError::Unauthorized,
        constraint = depositor_asset.mint == vault.asset_mint @ VaultError::InvalidMint,
    )]
    pub depositor_asset: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Vault's principal token account (destination)
    #[account(
        mut,
        address = vault.asset_vault,
    )]
    pub asset_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::ZeroAmount);

    let clock = Clock::get()?;
    let vault = &mut ctx.accounts.vault;
    let position = &mut ctx.accounts.position;

    // Initialize position if new
    if position.version == 0 {
        position.version = 1;
        position.bump = ctx.bumps.position;
        position.owner = ctx.accounts.receiver.key();
        position.vault = vault.key();
        position.shares = 0;
        position.reward_checkpoint = 0;
        position.owed_reward = 0;
        position._reserved = [0u8; 32];
    }

    // Reconcile BEFORE any share change; the checkpoint must reflect the
    // accumulator as of the old balance.
    reconcile(vault, position, clock.slot)?;

    // Record vault balance before the transfer so transfer-fee mints
    // (Token-2022) mint shares for what actually arrived.
    let balance_before = ctx.accounts.asset_vault.amount;

    let transfer_ctx = CpiContext::new(
        ctx.accounts.asset_token_program.to_account_info(),
        TransferChecked {
            from: ctx.accounts.depositor_asset.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            to: ctx.accounts.asset_vault.to_account_info(),
            authority: ctx.accounts.depositor.to_account_info(),
        },
    );
    anchor_spl::token_interface::transfer_checked(
        transfer_ctx,
        amount,
        ctx.accounts.asset_mint.decimals,
    )?;

    ctx.accounts.asset_vault.reload()?;
    let actual_received = ctx
        .accounts
        .asset_vault
        .amount
        .checked_sub(balance_before)
        .ok_or(VaultError::MathOverflow)?;
    require!(actual_received > 0, VaultError::ZeroAmount);

    // 1:1 share:asset convention
    let shares = actual_received;

    let vault = &mut ctx.accounts.vault;
    let position = &mut ctx.accounts.position;

    position.shares = position
        .shares
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;
    vault.total_shares = vault
        .total_shares
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;
    vault.total_assets = vault
        .total_assets
        .checked_add(actual_received)
        .ok_or(VaultError::MathOverflow)?;

    emit!(Deposited {
        depositor: ctx.accounts.depositor.key(),
        receiver: ctx.accounts.receiver.key(),
        vault: vault.key(),
        assets: actual_received,
        shares_minted: shares,
        total_shares: vault.total_shares,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Deposited {} assets (requested {}), minted {} shares to {}",
        actual_received,
        amount,
        shares,
        ctx.accounts.receiver.key()
    );
    Ok(())
}
