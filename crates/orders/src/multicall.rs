use std::collections::HashMap;

use alloy::{
    network::TransactionBuilder,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, B256};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::info;
use types::ChainId;

use crate::{
    abi::{IComposableCow, IMulticall3},
    ports::SingleOrderReader,
    COMPOSABLE_COW_ADDRESS, MULTICALL3_ADDRESS,
};

/// Reads ComposableCoW registrations through a single Multicall3 `aggregate3`.
#[derive(Clone, Default)]
pub struct MulticallReader {
    providers: HashMap<ChainId, DynProvider>,
}

impl MulticallReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rpc(mut self, chain: ChainId, rpc_url: &str) -> Result<Self> {
        let url: Url = rpc_url
            .parse()
            .with_context(|| format!("Invalid RPC url '{rpc_url}'"))?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        self.providers.insert(chain, provider);

        Ok(self)
    }
}

fn single_order_calls(owner: Address, hashes: &[B256]) -> Vec<IMulticall3::Call3> {
    hashes
        .iter()
        .map(|hash| IMulticall3::Call3 {
            target: COMPOSABLE_COW_ADDRESS,
            allowFailure: true,
            callData: IComposableCow::singleOrdersCall {
                owner,
                hash: *hash,
            }
            .abi_encode()
            .into(),
        })
        .collect()
}

/// A failed or undecodable call counts as "not registered".
fn registration_flags(results: Vec<IMulticall3::Call3Result>) -> Vec<bool> {
    results
        .into_iter()
        .map(|result| {
            result.success
                && IComposableCow::singleOrdersCall::abi_decode_returns(&result.returnData)
                    .unwrap_or(false)
        })
        .collect()
}

#[async_trait]
impl SingleOrderReader for MulticallReader {
    async fn single_orders(
        &self,
        chain: ChainId,
        owner: Address,
        hashes: &[B256],
    ) -> Result<Vec<bool>> {
        if hashes.is_empty() {
            return Ok(Vec::new());
        }

        let Some(provider) = self.providers.get(&chain) else {
            bail!("No RPC endpoint configured for chain {chain}");
        };

        let calldata = IMulticall3::aggregate3Call {
            calls: single_order_calls(owner, hashes),
        }
        .abi_encode();
        let tx = TransactionRequest::default()
            .with_to(MULTICALL3_ADDRESS)
            .with_input(calldata);

        let output = provider
            .call(tx)
            .await
            .context("Multicall to ComposableCoW failed")?;
        let results = IMulticall3::aggregate3Call::abi_decode_returns(&output)
            .context("Failed to decode multicall results")?;

        let flags = registration_flags(results);

        info!(
            "Read {} single order flags for {owner} on chain {chain}",
            flags.len()
        );

        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use alloy::sol_types::SolValue;

    use super::*;

    #[test]
    fn builds_one_call_per_hash_in_order() {
        let owner = Address::with_last_byte(0x01);
        let hashes = [B256::with_last_byte(0xa1), B256::with_last_byte(0xb2)];

        let calls = single_order_calls(owner, &hashes);

        assert_eq!(calls.len(), 2);
        for (call, hash) in calls.iter().zip(hashes) {
            assert_eq!(call.target, COMPOSABLE_COW_ADDRESS);
            assert!(call.allowFailure);
            assert_eq!(
                call.callData[..4],
                IComposableCow::singleOrdersCall::SELECTOR[..]
            );
            assert_eq!(call.callData[4 + 32..], hash[..]);
        }
    }

    #[test]
    fn failed_or_false_results_are_unregistered() {
        let results = vec![
            IMulticall3::Call3Result {
                success: true,
                returnData: true.abi_encode().into(),
            },
            IMulticall3::Call3Result {
                success: true,
                returnData: false.abi_encode().into(),
            },
            IMulticall3::Call3Result {
                success: false,
                returnData: true.abi_encode().into(),
            },
            IMulticall3::Call3Result {
                success: true,
                returnData: Default::default(),
            },
        ];

        assert_eq!(
            registration_flags(results),
            vec![true, false, false, false]
        );
    }

    #[tokio::test]
    async fn no_hashes_skips_the_rpc() {
        let reader = MulticallReader::new();

        let flags = reader
            .single_orders(ChainId::Mainnet, Address::ZERO, &[])
            .await
            .unwrap();

        assert!(flags.is_empty());
    }

    #[tokio::test]
    async fn unknown_chain_is_an_error() {
        let reader = MulticallReader::new();

        let err = reader
            .single_orders(ChainId::Sepolia, Address::ZERO, &[B256::ZERO])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("11155111"));
    }
}
