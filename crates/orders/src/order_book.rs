use alloy_primitives::Address;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;
use types::{ChainId, OffChainOrder};

use crate::ports::OrderBook;

/// Largest page the order book serves for account queries.
const ACCOUNT_ORDERS_LIMIT: u32 = 1000;

#[derive(Deserialize)]
struct NativePrice {
    price: f64,
}

/// REST client for the CoW Protocol order book API.
#[derive(Clone)]
pub struct CowApiClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl CowApiClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Sends every request to `base_url` instead of the per-chain default.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn url(&self, chain: ChainId, path: &str) -> String {
        let base = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| chain.order_book_url());

        format!("{}/api/v1/{path}", base.trim_end_matches('/'))
    }

    fn account_orders_request(
        &self,
        chain: ChainId,
        address: Address,
    ) -> reqwest::Result<reqwest::Request> {
        self.client
            .get(self.url(chain, &format!("account/{address}/orders")))
            .query(&[("limit", ACCOUNT_ORDERS_LIMIT)])
            .build()
    }
}

#[async_trait]
impl OrderBook for CowApiClient {
    async fn account_orders(
        &self,
        chain: ChainId,
        address: Address,
    ) -> Result<Vec<OffChainOrder>> {
        let request = self
            .account_orders_request(chain, address)
            .context("Failed to build account orders query")?;

        let orders = self
            .client
            .execute(request)
            .await
            .context("Failed to query account orders")?
            .error_for_status()
            .context("Order book rejected the account orders query")?
            .json::<Vec<OffChainOrder>>()
            .await
            .context("Failed to decode account orders")?;

        info!("Fetched {} order book orders for {address} on chain {chain}", orders.len());

        Ok(orders)
    }

    async fn native_price(&self, chain: ChainId, token: Address) -> Result<f64> {
        let price = self
            .client
            .get(self.url(chain, &format!("token/{token}/native_price")))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to query native price")?
            .error_for_status()
            .with_context(|| format!("No native price for {token}"))?
            .json::<NativePrice>()
            .await
            .context("Failed to decode native price")?;

        Ok(price.price)
    }
}
