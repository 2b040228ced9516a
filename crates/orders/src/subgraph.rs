use alloy_primitives::Address;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use types::{ChainId, OrderRecord};

use crate::ports::OrderIndexer;

const USER_STOP_LOSS_ORDERS: &str = r#"query UserStopLossOrders($user: String!) {
  orders(
    where: {stopLossParametersId_not: null, user_in: [$user]}
    orderBy: "blockTimestamp"
    orderDirection: "desc"
  ) {
    items {
      blockNumber
      blockTimestamp
      chainId
      decodedSuccess
      handler
      id
      user
      hash
      staticInput
      stopLossParameters {
        appData
        buyTokenPriceOracle
        id
        isPartiallyFillable
        isSellOrder
        maxTimeSinceLastOracleUpdate
        orderId
        sellTokenPriceOracle
        strike
        to
        tokenAmountIn
        tokenAmountOut
        tokenIn {
          address
          decimals
          name
          symbol
        }
        tokenOut {
          address
          decimals
          name
          symbol
        }
        validityBucketSeconds
      }
    }
  }
}"#;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct UserStopLossOrders {
    orders: Option<OrderPage>,
}

#[derive(Deserialize)]
struct OrderPage {
    items: Option<Vec<OrderRecord>>,
}

/// GraphQL client for the ComposableCoW indexing service.
#[derive(Clone)]
pub struct SubgraphClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SubgraphClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

/// The indexer keys users by `address-chainId`.
pub fn user_key(chain: ChainId, address: Address) -> String {
    format!("{address}-{chain}")
}

fn user_orders_request(chain: ChainId, address: Address) -> GraphQlRequest<'static> {
    GraphQlRequest {
        query: USER_STOP_LOSS_ORDERS,
        variables: json!({ "user": user_key(chain, address) }),
    }
}

fn into_orders(response: GraphQlResponse<UserStopLossOrders>) -> Result<Vec<OrderRecord>> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages = errors
            .into_iter()
            .map(|err| err.message)
            .collect::<Vec<_>>()
            .join("; ");
        bail!("indexer returned errors: {messages}");
    }

    Ok(response
        .data
        .and_then(|data| data.orders)
        .and_then(|page| page.items)
        .unwrap_or_default())
}

#[async_trait]
impl OrderIndexer for SubgraphClient {
    async fn user_stop_loss_orders(
        &self,
        chain: ChainId,
        address: Address,
    ) -> Result<Vec<OrderRecord>> {
        let request = user_orders_request(chain, address);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("Failed to send indexer query")?
            .error_for_status()
            .context("Indexer rejected the query")?
            .json::<GraphQlResponse<UserStopLossOrders>>()
            .await
            .context("Failed to decode indexer response")?;

        let orders = into_orders(response)?;

        info!("Fetched {} indexed orders for {address} on chain {chain}", orders.len());

        Ok(orders)
    }
}
