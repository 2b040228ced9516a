use std::time::Duration;

use alloy_primitives::{Address, B256};
use clap::{Args, Parser, Subcommand};
use orders::{OrdersConfig, DEFAULT_SUBGRAPH_URL, DEFAULT_TIMEOUT_MS};
use types::ChainId;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(long, env, global = true, default_value = DEFAULT_SUBGRAPH_URL)]
    pub subgraph_url: String,

    #[arg(long, env = "ETH_HTTP_RPC", global = true)]
    pub rpc_url: Option<String>,

    /// Overrides the CoW Protocol API base URL of the selected chain
    #[arg(long, env, global = true)]
    pub order_book_url: Option<String>,

    #[arg(long, env = "REQUEST_TIMEOUT_MS", global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the stop-loss orders of an account with their status
    List {
        #[command(flatten)]
        account: Account,

        /// Keep reloading every N seconds until interrupted
        #[arg(long)]
        watch_secs: Option<u64>,
    },
    /// Print the transaction bundle cancelling the given orders
    Cancel {
        #[command(flatten)]
        account: Account,

        #[arg(required = true)]
        hashes: Vec<B256>,
    },
    /// Print the price of a token in the chain's native currency
    Price {
        #[arg(long, env)]
        chain_id: ChainId,

        token: Address,
    },
}

#[derive(Args)]
pub struct Account {
    #[arg(long, env)]
    pub chain_id: ChainId,

    #[arg(long, env)]
    pub address: Address,
}

impl Cli {
    pub fn config(&self) -> OrdersConfig {
        OrdersConfig {
            subgraph_url: self.subgraph_url.clone(),
            rpc_url: self.rpc_url.clone(),
            order_book_url: self.order_book_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

pub fn watch_interval(secs: u64) -> Duration {
    Duration::from_secs(secs.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cancel_with_globals() {
        let cli = Cli::try_parse_from([
            "orders-cli",
            "cancel",
            "--chain-id",
            "gnosis",
            "--address",
            "0x000000000000000000000000000000000000dead",
            "--timeout-ms",
            "500",
            "0x00000000000000000000000000000000000000000000000000000000000000a1",
        ])
        .unwrap();

        assert_eq!(cli.config().timeout(), Duration::from_millis(500));
        match cli.command {
            Command::Cancel { account, hashes } => {
                assert_eq!(account.chain_id, ChainId::Gnosis);
                assert_eq!(hashes, vec![B256::with_last_byte(0xa1)]);
            }
            _ => panic!("expected cancel"),
        }
    }

    #[test]
    fn rejects_unsupported_chain() {
        assert!(Cli::try_parse_from([
            "orders-cli",
            "price",
            "--chain-id",
            "137",
            "0x000000000000000000000000000000000000dead",
        ])
        .is_err());
    }
}
