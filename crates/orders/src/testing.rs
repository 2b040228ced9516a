use std::{
    collections::{HashMap, HashSet},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::Duration,
};

use alloy_primitives::{Address, B256, U256};
use anyhow::{bail, Result};
use async_trait::async_trait;
use types::{ChainId, OffChainOrder, OrderRecord, StopLossParameters, Token};

use crate::ports::{OrderBook, OrderIndexer, SingleOrderReader};

pub fn owner() -> Address {
    Address::with_last_byte(0x5a)
}

pub fn other_owner() -> Address {
    Address::with_last_byte(0x5b)
}

fn token(byte: u8, symbol: &str) -> Token {
    Token {
        address: Address::with_last_byte(byte),
        decimals: 18,
        name: symbol.to_string(),
        symbol: symbol.to_string(),
    }
}

pub fn order_record(hash: u8, app_data: Option<&str>) -> OrderRecord {
    OrderRecord {
        block_number: 18_000_000,
        block_timestamp: 1_700_000_000,
        chain_id: 1,
        decoded_success: true,
        handler: Address::with_last_byte(0xee),
        id: format!("order-{hash:02x}"),
        user: owner(),
        hash: B256::with_last_byte(hash),
        static_input: "0x".to_string(),
        stop_loss_parameters: app_data.map(|app_data| StopLossParameters {
            app_data: app_data.to_string(),
            buy_token_price_oracle: Address::with_last_byte(0x01),
            id: format!("sl-{hash:02x}"),
            is_partially_fillable: false,
            is_sell_order: true,
            max_time_since_last_oracle_update: U256::from(3_600u64),
            order_id: format!("order-{hash:02x}"),
            sell_token_price_oracle: Address::with_last_byte(0x02),
            strike: U256::from(1_000u64),
            to: owner(),
            token_amount_in: U256::from(1_000_000u64),
            token_amount_out: U256::from(1_000u64),
            token_in: token(0x10, "USDC"),
            token_out: token(0x20, "WETH"),
            validity_bucket_seconds: U256::from(86_400u64),
        }),
    }
}

pub fn off_chain_order(app_data: &str, status: &str) -> OffChainOrder {
    OffChainOrder {
        uid: format!("uid-{app_data}"),
        app_data: app_data.to_string(),
        status: status.to_string(),
        owner: owner(),
        sell_token: Address::with_last_byte(0x10),
        buy_token: Address::with_last_byte(0x20),
        sell_amount: U256::from(1_000_000u64),
        buy_amount: U256::from(1_000u64),
        fee_amount: U256::ZERO,
        executed_sell_amount: U256::ZERO,
        executed_buy_amount: U256::ZERO,
        valid_to: 1_700_086_400,
        kind: "sell".to_string(),
        partially_fillable: false,
        creation_date: String::new(),
        signing_scheme: "eip1271".to_string(),
        signature: "0x".to_string(),
        class: "limit".to_string(),
        invalidated: false,
    }
}

#[derive(Default)]
pub struct MockIndexer {
    pub orders: HashMap<Address, Vec<OrderRecord>>,
    pub delays: HashMap<Address, Duration>,
    pub fail: AtomicBool,
}

impl MockIndexer {
    pub fn with_orders(address: Address, orders: Vec<OrderRecord>) -> Self {
        Self {
            orders: HashMap::from([(address, orders)]),
            ..Default::default()
        }
    }
}

#[async_trait]
impl OrderIndexer for MockIndexer {
    async fn user_stop_loss_orders(
        &self,
        _chain: ChainId,
        address: Address,
    ) -> Result<Vec<OrderRecord>> {
        if let Some(delay) = self.delays.get(&address) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            bail!("indexer unavailable");
        }

        Ok(self.orders.get(&address).cloned().unwrap_or_default())
    }
}

pub struct MockOrderBook {
    pub orders: Vec<OffChainOrder>,
    pub delay: Option<Duration>,
}

impl MockOrderBook {
    pub fn new(orders: Vec<OffChainOrder>) -> Self {
        Self {
            orders,
            delay: None,
        }
    }
}

#[async_trait]
impl OrderBook for MockOrderBook {
    async fn account_orders(
        &self,
        _chain: ChainId,
        _address: Address,
    ) -> Result<Vec<OffChainOrder>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(self.orders.clone())
    }

    async fn native_price(&self, _chain: ChainId, _token: Address) -> Result<f64> {
        Ok(1.0)
    }
}

#[derive(Default)]
pub struct MockReader {
    pub registered: HashSet<B256>,
    pub drop_last: bool,
    pub calls: AtomicUsize,
}

impl MockReader {
    pub fn registered(hashes: impl IntoIterator<Item = u8>) -> Self {
        Self {
            registered: hashes.into_iter().map(B256::with_last_byte).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl SingleOrderReader for MockReader {
    async fn single_orders(
        &self,
        _chain: ChainId,
        _owner: Address,
        hashes: &[B256],
    ) -> Result<Vec<bool>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut flags = hashes
            .iter()
            .map(|hash| self.registered.contains(hash))
            .collect::<Vec<_>>();
        if self.drop_last {
            flags.pop();
        }

        Ok(flags)
    }
}
