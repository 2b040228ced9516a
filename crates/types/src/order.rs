use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::Token;

/// A conditional order registration, as indexed from ComposableCoW events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(with = "crate::bigint")]
    pub block_number: u64,
    #[serde(with = "crate::bigint")]
    pub block_timestamp: u64,
    pub chain_id: u64,
    pub decoded_success: bool,
    pub handler: Address,
    pub id: String,
    pub user: Address,
    pub hash: B256,
    pub static_input: String,
    pub stop_loss_parameters: Option<StopLossParameters>,
}

impl OrderRecord {
    pub fn app_data(&self) -> Option<&str> {
        self.stop_loss_parameters
            .as_ref()
            .map(|params| params.app_data.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossParameters {
    pub app_data: String,
    pub buy_token_price_oracle: Address,
    pub id: String,
    pub is_partially_fillable: bool,
    pub is_sell_order: bool,
    #[serde(with = "crate::bigint")]
    pub max_time_since_last_oracle_update: U256,
    pub order_id: String,
    pub sell_token_price_oracle: Address,
    #[serde(with = "crate::bigint")]
    pub strike: U256,
    pub to: Address,
    #[serde(with = "crate::bigint")]
    pub token_amount_in: U256,
    #[serde(with = "crate::bigint")]
    pub token_amount_out: U256,
    pub token_in: Token,
    pub token_out: Token,
    #[serde(with = "crate::bigint")]
    pub validity_bucket_seconds: U256,
}
