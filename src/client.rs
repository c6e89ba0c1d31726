//! Read-only account fetch layer.
//!
//! Thin seam between an RPC endpoint and the pure core: fetch bytes,
//! decode, compose. Retry policy, caching, and persistence belong to the
//! callers, not here.

use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, warn};

use crate::config::WatchConfig;
use crate::error::{Result, WatchError};
use crate::layout::{decode_board, decode_round};
use crate::pda::{board_address, round_address};
use crate::summary::assemble_summary;
use crate::types::{Board, Round, RoundSummary};

/// Read-only client for the grid program's accounts.
pub struct GridClient {
    rpc: Arc<RpcClient>,
    config: WatchConfig,
}

impl GridClient {
    pub fn new(config: WatchConfig) -> Self {
        let rpc = Arc::new(RpcClient::new_with_commitment(
            config.rpc_url.clone(),
            CommitmentConfig::confirmed(),
        ));
        Self { rpc, config }
    }

    /// Fetch and decode the live board account.
    pub async fn fetch_board(&self) -> Result<Board> {
        let (address, _) = board_address()?;
        let bytes = self.fetch_account(&address).await?;
        Ok(decode_board(&bytes)?)
    }

    /// Fetch and decode round `round_id`.
    ///
    /// A round that has not been created yet surfaces as
    /// [`WatchError::AccountUnavailable`], distinct from a decode failure.
    pub async fn fetch_round(&self, round_id: u64) -> Result<Round> {
        let (address, _) = round_address(round_id)?;
        let bytes = self.fetch_account(&address).await?;
        let round = decode_round(&bytes)?;

        if round.deployed_total() != round.total_deployed {
            warn!(
                round_id,
                per_square_sum = round.deployed_total(),
                recorded_total = round.total_deployed,
                "per-square stakes disagree with recorded total"
            );
        }

        Ok(round)
    }

    /// The network's current time-unit counter.
    pub async fn current_unit(&self) -> Result<u64> {
        Ok(self.rpc.get_slot().await?)
    }

    /// One-call snapshot: board, its current round, current unit, summary.
    pub async fn live_summary(&self) -> Result<RoundSummary> {
        let board = self.fetch_board().await?;
        let round = self.fetch_round(board.round_id).await?;
        let current_unit = self.current_unit().await?;

        debug!(
            round_id = board.round_id,
            current_unit, "assembling live round summary"
        );
        assemble_summary(&board, &round, current_unit, self.config.unit_duration_secs)
    }

    async fn fetch_account(&self, address: &Pubkey) -> Result<Vec<u8>> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await?;

        match response.value {
            Some(account) => Ok(account.data),
            None => Err(WatchError::AccountUnavailable(*address)),
        }
    }
}
