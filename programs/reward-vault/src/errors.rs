//! Error definitions for the reward vault.

use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid mint")]
    InvalidMint,

    #[msg("Vault is paused")]
    VaultPaused,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Insufficient shares")]
    InsufficientShares,

    #[msg("Reward treasury underfunded for this payout")]
    InsufficientRewardFunds,

    #[msg("Invalid pubkey (cannot be default)")]
    InvalidPubkey,
}
