use alloy_primitives::{address, Address};

mod abi;
pub mod cancel;
mod config;
mod error;
mod multicall;
mod order_book;
mod ports;
mod reconciler;
mod status;
mod subgraph;
mod tracker;

#[cfg(test)]
mod testing;

pub use config::{OrdersConfig, DEFAULT_SUBGRAPH_URL, DEFAULT_TIMEOUT_MS};
pub use error::{FetchError, Service};
pub use multicall::MulticallReader;
pub use order_book::CowApiClient;
pub use ports::{OrderBook, OrderIndexer, SingleOrderReader};
pub use reconciler::{reconcile, Reconciler};
pub use status::derive_status;
pub use subgraph::{user_key, SubgraphClient};
pub use tracker::{LoadOutcome, OrdersState, OrdersTracker};

/// ComposableCoW, deployed at the same address on every supported chain.
pub const COMPOSABLE_COW_ADDRESS: Address = address!("fdafc9d1902f4e0b84f65f49f244b32b31013b74");
pub const MULTICALL3_ADDRESS: Address = address!("ca11bde05977b3631167028862be2a173976ca11");
