use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SUBGRAPH_URL: &str = "https://composable-cow-api.up.railway.app/";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct OrdersConfig {
    #[serde(default = "default_subgraph_url")]
    pub subgraph_url: String,
    /// JSON-RPC endpoint, only needed by operations that read the chain.
    #[serde(default)]
    pub rpc_url: Option<String>,
    /// Overrides the per-chain order book base URL.
    #[serde(default)]
    pub order_book_url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_subgraph_url() -> String {
    DEFAULT_SUBGRAPH_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl OrdersConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            subgraph_url: default_subgraph_url(),
            rpc_url: None,
            order_book_url: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}
