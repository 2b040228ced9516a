use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// An order as reported by the CoW Protocol order book.
///
/// Only the fields the history view needs are decoded; the rest of the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffChainOrder {
    pub uid: String,
    pub app_data: String,
    pub status: String,
    pub owner: Address,
    pub sell_token: Address,
    pub buy_token: Address,
    #[serde(with = "crate::bigint")]
    pub sell_amount: U256,
    #[serde(with = "crate::bigint")]
    pub buy_amount: U256,
    #[serde(with = "crate::bigint", default)]
    pub fee_amount: U256,
    #[serde(with = "crate::bigint", default)]
    pub executed_sell_amount: U256,
    #[serde(with = "crate::bigint", default)]
    pub executed_buy_amount: U256,
    pub valid_to: u32,
    pub kind: String,
    #[serde(default)]
    pub partially_fillable: bool,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub signing_scheme: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub invalidated: bool,
}

impl OffChainOrder {
    /// Case-insensitive, which is wider than an exact string match: both sides
    /// are hex encodings of the same app data hash, so case carries no meaning.
    pub fn matches_app_data(&self, app_data: &str) -> bool {
        self.app_data.eq_ignore_ascii_case(app_data)
    }
}
