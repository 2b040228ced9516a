use std::{collections::HashMap, future::Future, sync::Arc, time::Duration};

use alloy_primitives::{Address, B256};
use anyhow::{anyhow, Context};
use tracing::info;
use types::{ChainId, OffChainOrder, OrderRecord, ReconciledOrder};

use crate::{
    config::OrdersConfig,
    error::{FetchError, Service},
    multicall::MulticallReader,
    order_book::CowApiClient,
    ports::{OrderBook, OrderIndexer, SingleOrderReader},
    status::derive_status,
    subgraph::SubgraphClient,
};

/// Merges indexer records, order book orders and on-chain registrations into
/// the status list shown for an account.
#[derive(Clone)]
pub struct Reconciler {
    indexer: Arc<dyn OrderIndexer>,
    order_book: Arc<dyn OrderBook>,
    reader: Arc<dyn SingleOrderReader>,
    timeout: Duration,
}

impl Reconciler {
    pub fn new(
        indexer: Arc<dyn OrderIndexer>,
        order_book: Arc<dyn OrderBook>,
        reader: Arc<dyn SingleOrderReader>,
    ) -> Self {
        Self {
            indexer,
            order_book,
            reader,
            timeout: OrdersConfig::default().timeout(),
        }
    }

    /// Wires the HTTP collaborators. `chain` selects which network the RPC
    /// endpoint, if any, is registered for.
    pub fn from_config(config: &OrdersConfig, chain: ChainId) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        let indexer = SubgraphClient::new(client.clone(), config.subgraph_url.clone());

        let mut order_book = CowApiClient::new(client);
        if let Some(url) = &config.order_book_url {
            order_book = order_book.with_base_url(url.clone());
        }

        let mut reader = MulticallReader::new();
        if let Some(url) = &config.rpc_url {
            reader = reader.with_rpc(chain, url)?;
        }

        Ok(Self::new(Arc::new(indexer), Arc::new(order_book), Arc::new(reader))
            .with_timeout(config.timeout()))
    }

    /// Limit applied to every individual collaborator call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn order_book(&self) -> &Arc<dyn OrderBook> {
        &self.order_book
    }

    pub async fn user_orders(
        &self,
        chain: ChainId,
        address: Address,
    ) -> Result<Vec<ReconciledOrder>, FetchError> {
        let (records, off_chain) = tokio::try_join!(
            with_timeout(
                Service::Indexer,
                self.timeout,
                self.indexer.user_stop_loss_orders(chain, address),
            ),
            with_timeout(
                Service::OrderBook,
                self.timeout,
                self.order_book.account_orders(chain, address),
            ),
        )?;

        if records.is_empty() {
            return Ok(Vec::new());
        }

        let hashes = records.iter().map(|order| order.hash).collect::<Vec<_>>();
        let flags = with_timeout(
            Service::Chain,
            self.timeout,
            self.reader.single_orders(chain, address, &hashes),
        )
        .await?;

        if flags.len() != hashes.len() {
            return Err(FetchError::ChainRead(anyhow!(
                "expected {} single order results, got {}",
                hashes.len(),
                flags.len()
            )));
        }

        let registered = hashes.into_iter().zip(flags).collect::<HashMap<_, _>>();
        let orders = reconcile(records, &off_chain, &registered);

        info!("Reconciled {} orders for {address} on chain {chain}", orders.len());

        Ok(orders)
    }
}

/// Attaches a status to every record, keeping the indexer order.
///
/// Records are matched to the order book by app data (first match wins) and
/// to their registration by hash. A hash missing from `registered` counts as
/// not registered.
pub fn reconcile(
    records: Vec<OrderRecord>,
    off_chain: &[OffChainOrder],
    registered: &HashMap<B256, bool>,
) -> Vec<ReconciledOrder> {
    records
        .into_iter()
        .map(|order| {
            let matched = order
                .app_data()
                .and_then(|app_data| off_chain.iter().find(|o| o.matches_app_data(app_data)));
            let is_registered = registered.get(&order.hash).copied().unwrap_or(false);
            let status = derive_status(matched, is_registered);

            ReconciledOrder::new(order, status)
        })
        .collect()
}

async fn with_timeout<T>(
    service: Service,
    after: Duration,
    request: impl Future<Output = anyhow::Result<T>>,
) -> Result<T, FetchError> {
    match tokio::time::timeout(after, request).await {
        Ok(result) => result.map_err(|err| FetchError::new(service, err)),
        Err(_) => Err(FetchError::Timeout { service, after }),
    }
}
