use alloy_primitives::{Address, B256};
use anyhow::Result;
use async_trait::async_trait;
use types::{ChainId, OffChainOrder, OrderRecord};

/// Source of the stop-loss order registrations made by an account.
#[async_trait]
pub trait OrderIndexer: Send + Sync {
    /// Most recent first. An account without orders yields an empty list.
    async fn user_stop_loss_orders(
        &self,
        chain: ChainId,
        address: Address,
    ) -> Result<Vec<OrderRecord>>;
}

#[async_trait]
pub trait OrderBook: Send + Sync {
    async fn account_orders(&self, chain: ChainId, address: Address)
        -> Result<Vec<OffChainOrder>>;

    async fn native_price(&self, chain: ChainId, token: Address) -> Result<f64>;
}

#[async_trait]
pub trait SingleOrderReader: Send + Sync {
    /// Whether each `hashes[i]` is still registered for `owner`. The result is
    /// positionally aligned with `hashes`.
    async fn single_orders(
        &self,
        chain: ChainId,
        owner: Address,
        hashes: &[B256],
    ) -> Result<Vec<bool>>;
}
