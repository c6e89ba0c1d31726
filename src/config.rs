//! Configuration for the fetch layer.
//!
//! The pure core takes every input as an argument; only the
//! network-facing [`crate::client`] reads this.

use anyhow::Result;
use std::env;

use crate::timing::DEFAULT_UNIT_DURATION_SECS;

/// Watcher configuration.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// RPC endpoint for account reads.
    pub rpc_url: String,

    /// Average seconds per network time unit, used for countdown display.
    pub unit_duration_secs: f64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            unit_duration_secs: DEFAULT_UNIT_DURATION_SECS,
        }
    }
}

impl WatchConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults. Reads `.env` if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| Self::default().rpc_url);

        let unit_duration_secs = env::var("UNIT_DURATION_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_UNIT_DURATION_SECS);

        if !unit_duration_secs.is_finite() || unit_duration_secs <= 0.0 {
            anyhow::bail!("UNIT_DURATION_SECS must be a positive number");
        }

        Ok(Self {
            rpc_url,
            unit_duration_secs,
        })
    }
}
