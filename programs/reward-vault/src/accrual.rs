//! Reward accrual engine (MasterChef-style accounting).
//!
//! Every state-mutating instruction calls [`reconcile`] before touching
//! `shares` or `total_shares`; the checkpoint then always reflects the
//! accumulator as of the moment the share balance was last known, so reward
//! is never double-counted and never lost to a balance change.

use anchor_lang::prelude::*;

use crate::constants::REWARD_SCALE;
use crate::errors::VaultError;
use crate::state::{RewardVault, StakePosition};

/// Advance the global reward-per-share accumulator to `current_slot`.
///
/// Idempotent within a slot. While no shares are staked the interval's
/// rewards are not attributed to anyone: the slot is stamped and the
/// accumulator left unchanged.
pub fn advance_global(vault: &mut RewardVault, current_slot: u64) -> Result<()> {
    if current_slot <= vault.last_accrual_slot {
        return Ok(());
    }

    if vault.total_shares == 0 {
        vault.last_accrual_slot = current_slot;
        return Ok(());
    }

    vault.acc_reward_per_share = accumulator_at(vault, current_slot)?;
    vault.last_accrual_slot = current_slot;
    Ok(())
}

/// Bring `position` up to date with the global accumulator at `current_slot`.
///
/// Crystallizes any pending reward into `owed_reward` and stamps the
/// checkpoint. This is the single chokepoint for reward accounting.
pub fn reconcile(
    vault: &mut RewardVault,
    position: &mut StakePosition,
    current_slot: u64,
) -> Result<()> {
    advance_global(vault, current_slot)?;

    let pending = pending_reward(
        position.shares,
        vault.acc_reward_per_share,
        position.reward_checkpoint,
    )?;
    if pending > 0 {
        position.owed_reward = position
            .owed_reward
            .checked_add(pending)
            .ok_or(VaultError::MathOverflow)?;
    }
    position.reward_checkpoint = vault.acc_reward_per_share;
    Ok(())
}

/// Read-only equivalent of [`reconcile`]: owed reward plus what a
/// reconciliation at `current_slot` would add, without writing state.
pub fn preview_pending(
    vault: &RewardVault,
    position: &StakePosition,
    current_slot: u64,
) -> Result<u64> {
    let acc = accumulator_at(vault, current_slot)?;
    let pending = pending_reward(position.shares, acc, position.reward_checkpoint)?;
    position
        .owed_reward
        .checked_add(pending)
        .ok_or(VaultError::MathOverflow.into())
}

/// Accumulator value as of `current_slot`, without mutating the vault.
pub fn accumulator_at(vault: &RewardVault, current_slot: u64) -> Result<u128> {
    if current_slot <= vault.last_accrual_slot || vault.total_shares == 0 {
        return Ok(vault.acc_reward_per_share);
    }

    let elapsed = current_slot - vault.last_accrual_slot;

    // reward = rate * elapsed
    let reward = (vault.reward_rate_per_slot as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VaultError::MathOverflow)?;

    // acc += reward * SCALE / total_shares
    let per_share = reward
        .checked_mul(REWARD_SCALE)
        .ok_or(VaultError::MathOverflow)?
        .checked_div(vault.total_shares as u128)
        .ok_or(VaultError::MathOverflow)?;

    vault
        .acc_reward_per_share
        .checked_add(per_share)
        .ok_or(VaultError::MathOverflow.into())
}

/// Pending (unreconciled) reward for a share balance against an accumulator
/// delta: `shares * (acc - checkpoint) / SCALE`, checked end to end.
pub fn pending_reward(shares: u64, acc: u128, checkpoint: u128) -> Result<u64> {
    if shares == 0 {
        return Ok(0);
    }

    // The checkpoint never exceeds the accumulator it was stamped from.
    let delta = acc
        .checked_sub(checkpoint)
        .ok_or(VaultError::MathOverflow)?;

    let pending = (shares as u128)
        .checked_mul(delta)
        .ok_or(VaultError::MathOverflow)?
        .checked_div(REWARD_SCALE)
        .ok_or(VaultError::MathOverflow)?;

    u64::try_from(pending).map_err(|_| VaultError::MathOverflow.into())
}
