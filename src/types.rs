//! Core records for the grid game watcher.
//!
//! [`Board`] and [`Round`] mirror the program's on-chain accounts; the
//! remaining types are derived fresh on every poll and carry no identity
//! beyond the inputs that produced them.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Number of wager squares on the board.
pub const SQUARE_COUNT: usize = 25;

/// The live board account: a singleton the program overwrites at each
/// round transition. Read-only to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Id of the round currently accepting deposits.
    pub round_id: u64,
    /// Unit at which the current round opened.
    pub start_unit: u64,
    /// Unit at which the current round stops accepting deposits.
    pub end_unit: u64,
    pub epoch_id: u64,
}

/// One round account, immutable once finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: u64,
    /// Base units staked per square, index 0..24.
    pub deployed: [u64; SQUARE_COUNT],
    /// Consensus entropy, written once when the round is finalized.
    pub randomness: [u8; 32],
    /// Distinct depositors per square, index 0..24.
    pub count: [u64; SQUARE_COUNT],
    pub expires_at: u64,
    pub jackpot_pool: u64,
    pub rent_payer: Pubkey,
    pub top_depositor: Pubkey,
    pub top_depositor_reward: u64,
    pub total_deployed: u64,
    pub total_depositors: u64,
    pub total_vaulted: u64,
}

impl Round {
    /// Sum of the per-square stakes. The protocol keeps this equal to
    /// `total_deployed`; callers surface a mismatch, nothing corrects it.
    pub fn deployed_total(&self) -> u64 {
        self.deployed
            .iter()
            .fold(0u64, |acc, &amount| acc.saturating_add(amount))
    }

    /// Whether the protocol recorded a top depositor for this round.
    pub fn has_top_depositor(&self) -> bool {
        self.top_depositor != Pubkey::default()
    }
}

/// Countdown snapshot for one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTiming {
    pub current_unit: u64,
    pub units_remaining: u64,
    pub seconds_remaining: u64,
    /// True once the round window has closed and the next one has not
    /// started yet.
    pub is_intermission: bool,
}

/// Presentation data for a single square, 1-indexed for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareSummary {
    /// Display number, 1..=25.
    pub square_num: u8,
    pub deployed_amount: u64,
    pub depositor_count: u64,
    pub percentage_of_total: f64,
    pub is_winning: bool,
}

/// One self-consistent snapshot of a round, built by
/// [`crate::summary::summarize`]. The serialized field names are a
/// compatibility contract with downstream dashboards and bots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_id: u64,
    pub start_unit: u64,
    pub end_unit: u64,
    pub current_unit: u64,
    pub units_remaining: u64,
    pub seconds_remaining: u64,
    pub is_intermission: bool,
    pub squares: Vec<SquareSummary>,
    pub total_deployed: u64,
    pub total_depositors: u64,
    pub total_vaulted: u64,
    pub top_depositor: Option<String>,
    pub top_depositor_reward: Option<u64>,
    pub jackpot_pool: u64,
}
