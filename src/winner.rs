//! Winning-square resolution from a round's randomness field.

use crate::types::SQUARE_COUNT;

/// Randomness field of a round that has not been finalized.
const UNSET_ZERO: [u8; 32] = [0x00; 32];
/// Randomness field while the network's entropy write is still pending.
const UNSET_PENDING: [u8; 32] = [0xFF; 32];

/// Resolve the winning square (1..=25) from a round's randomness field.
///
/// Returns `None` for the two unset sentinels (all-zero, all-0xFF).
/// Otherwise the four little-endian u64 words of the field are XOR-folded
/// into one value and reduced mod 25. Deterministic and total over every
/// other 32-byte input.
pub fn resolve_winner(randomness: &[u8; 32]) -> Option<u8> {
    if *randomness == UNSET_ZERO || *randomness == UNSET_PENDING {
        return None;
    }
    let rng = word(randomness, 0) ^ word(randomness, 8) ^ word(randomness, 16) ^ word(randomness, 24);
    Some((rng % SQUARE_COUNT as u64) as u8 + 1)
}

fn word(randomness: &[u8; 32], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&randomness[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}
