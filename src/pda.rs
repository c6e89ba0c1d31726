//! Deterministic addresses for the grid program's accounts.

use solana_sdk::pubkey::Pubkey;

use crate::error::{Result, WatchError};

/// The grid game program.
pub const GRID_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("oreV3EG1i9BEgiAJ8b177Z2S2rMarzak4NMv1kULvWv");

/// Seed of the singleton board account.
pub const BOARD_SEED: &[u8] = b"board";

/// Seed prefix of per-round accounts; combined with the round id as
/// 8 little-endian bytes.
pub const ROUND_SEED: &[u8] = b"round";

/// Address of the board account, constant for the program's lifetime.
pub fn board_address() -> Result<(Pubkey, u8)> {
    derive(&[BOARD_SEED])
}

/// Address of the account holding round `round_id`.
pub fn round_address(round_id: u64) -> Result<(Pubkey, u8)> {
    derive(&[ROUND_SEED, &round_id.to_le_bytes()])
}

fn derive(seeds: &[&[u8]]) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, &GRID_PROGRAM_ID).ok_or_else(|| {
        WatchError::SeedDerivation(format!(
            "no valid address for {} seed(s) under {GRID_PROGRAM_ID}",
            seeds.len()
        ))
    })
}
