//! Constants for the reward vault.

// =============================================================================
// PDA SEEDS
// =============================================================================

/// Seed for RewardVault PDA: ["vault", asset_mint, reward_mint]
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for per-user stake positions: ["position", vault, owner]
pub const POSITION_SEED: &[u8] = b"position";

/// Seed for the vault's principal token account: ["asset_vault", vault]
pub const ASSET_VAULT_SEED: &[u8] = b"asset_vault";

/// Seed for the vault's reward treasury token account: ["reward_treasury", vault]
pub const REWARD_TREASURY_SEED: &[u8] = b"reward_treasury";

// =============================================================================
// PRECISION
// =============================================================================

/// Fixed-point scale for the reward-per-share accumulator (1e18).
/// Retains sub-unit precision when dividing per-slot rewards by share supply.
pub const REWARD_SCALE: u128 = 1_000_000_000_000_000_000;
