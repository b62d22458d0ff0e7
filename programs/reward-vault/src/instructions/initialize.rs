//! Initialize a new reward vault for an (asset, reward) token pair.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{ASSET_VAULT_SEED, REWARD_TREASURY_SEED, VAULT_SEED};
use crate::errors::VaultError;
use crate::events::VaultInitialized;
use crate::state::RewardVault;

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Asset (principal) mint
    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Reward token mint
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// New vault PDA
    #[account(
        init,
        payer = admin,
        space = RewardVault::LEN,
        seeds = [VAULT_SEED, asset_mint.key().as_ref(), reward_mint.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, RewardVault>>,

    /// Vault's principal token account
    #[account(
        init,
        payer = admin,
        seeds = [ASSET_VAULT_SEED, vault.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = vault,
        token::token_program = asset_token_program,
    )]
    pub asset_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Vault's reward treasury token account. Anyone funds it with a plain
    /// token transfer; the vault pays harvests from it.
    #[account(
        init,
        payer = admin,
        seeds = [REWARD_TREASURY_SEED, vault.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = vault,
        token::token_program = reward_token_program,
    )]
    pub reward_treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program owning the asset mint
    pub asset_token_program: Interface<'info, TokenInterface>,

    /// Token program owning the reward mint
    pub reward_token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeVault>,
    reward_rate_per_slot: u64,
    auto_harvest: bool,
) -> Result<()> {
    require!(reward_rate_per_slot > 0, VaultError::ZeroAmount);

    let clock = Clock::get()?;

    let vault = &mut ctx.accounts.vault;
    vault.version = 1;
    vault.bump = ctx.bumps.vault;
    vault.asset_mint = ctx.accounts.asset_mint.key();
    vault.reward_mint = ctx.accounts.reward_mint.key();
    vault.asset_vault = ctx.accounts.asset_vault.key();
    vault.reward_treasury = ctx.accounts.reward_treasury.key();
    vault.admin = ctx.accounts.admin.key();
    vault.paused = false;
    vault.auto_harvest = auto_harvest;
    vault.total_shares = 0;
    vault.total_assets = 0;
    vault.acc_reward_per_share = 0;
    vault.last_accrual_slot = clock.slot;
    vault.reward_rate_per_slot = reward_rate_per_slot;
    vault._reserved = [0u8; 64];

    emit!(VaultInitialized {
        vault: vault.key(),
        asset_mint: vault.asset_mint,
        reward_mint: vault.reward_mint,
        admin: vault.admin,
        reward_rate_per_slot,
        auto_harvest,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Initialized vault: asset={}, reward={}, rate={}/slot, auto_harvest={}",
        vault.asset_mint,
        vault.reward_mint,
        reward_rate_per_slot,
        auto_harvest
    );
    Ok(())
}
