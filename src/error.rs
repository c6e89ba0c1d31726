//! Error taxonomy for the watcher core.
//!
//! Leaf components never retry or recover; they return one of these and
//! let the caller decide whether to degrade or propagate.

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Failure while decoding a raw account buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer is shorter than the fixed account layout.
    #[error("account buffer too short: need {needed} bytes, got {got}")]
    TooShort { needed: usize, got: usize },

    /// Buffer length does not match the fixed-array layout.
    #[error("malformed account buffer: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum WatchError {
    /// The seed combination does not derive a valid address.
    #[error("seed derivation failed: {0}")]
    SeedDerivation(String),

    /// The account does not exist on the network. Expected for rounds
    /// that have not been created yet; callers should not alarm on it.
    #[error("account unavailable: {0}")]
    AccountUnavailable(Pubkey),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Board timing fields violate `end_unit >= start_unit`.
    #[error("invalid slot range: start_unit {start_unit} > end_unit {end_unit}")]
    InvalidSlotRange { start_unit: u64, end_unit: u64 },

    #[error("rpc error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
}

pub type Result<T> = std::result::Result<T, WatchError>;
