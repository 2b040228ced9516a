use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// A raw call to be bundled and submitted by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelTransaction {
    pub to: Address,
    #[serde(with = "crate::bigint")]
    pub value: U256,
    pub data: Bytes,
}
