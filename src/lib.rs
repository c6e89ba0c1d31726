//! Watcher core for the on-chain 25-square grid game.
//!
//! Every round, players stake base units on a 5x5 board of numbered
//! squares; when the round's unit window closes, the network's consensus
//! randomness selects exactly one winning square. This crate is the part
//! of that pipeline that has to be bit-exact:
//!
//! 1. **Decoding**: raw board/round account bytes into typed records
//!    ([`layout`]), at one canonical offset table.
//! 2. **Winner resolution**: the winning square from the 32-byte
//!    randomness field ([`winner`]).
//! 3. **Timing**: the network's unit counter into a round countdown
//!    ([`timing`]).
//! 4. **Aggregation**: one JSON-stable [`RoundSummary`] per poll
//!    ([`summary`]).
//!
//! All of the above are pure functions over immutable inputs, safe to
//! call from any number of tasks. [`client`] is the only module that
//! touches the network. Dashboards, databases, and betting bots consume
//! the summary; none of their concerns (persistence, retries, strategy)
//! live here.

pub mod client;
pub mod config;
pub mod error;
pub mod layout;
pub mod pda;
pub mod summary;
pub mod timing;
pub mod types;
pub mod winner;

pub use client::GridClient;
pub use config::WatchConfig;
pub use error::{DecodeError, Result, WatchError};
pub use layout::{decode_board, decode_round};
pub use pda::{board_address, round_address, GRID_PROGRAM_ID};
pub use summary::{assemble_summary, summarize};
pub use timing::{compute_timing, DEFAULT_UNIT_DURATION_SECS};
pub use types::{Board, Round, RoundSummary, RoundTiming, SquareSummary, SQUARE_COUNT};
pub use winner::resolve_winner;
