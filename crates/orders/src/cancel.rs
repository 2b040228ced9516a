use alloy::sol_types::SolCall;
use alloy_primitives::{B256, U256};
use anyhow::{bail, Result};
use types::{CancelTransaction, ReconciledOrder};

use crate::{abi::IComposableCow, COMPOSABLE_COW_ADDRESS};

/// One ComposableCoW `remove` call per hash, in the given order.
pub fn cancel_transactions(hashes: &[B256]) -> Vec<CancelTransaction> {
    hashes
        .iter()
        .map(|hash| CancelTransaction {
            to: COMPOSABLE_COW_ADDRESS,
            value: U256::ZERO,
            data: IComposableCow::removeCall {
                singleOrderHash: *hash,
            }
            .abi_encode()
            .into(),
        })
        .collect()
}

/// Fails unless every hash names a listed order that can still be cancelled.
pub fn ensure_cancellable(orders: &[ReconciledOrder], hashes: &[B256]) -> Result<()> {
    for hash in hashes {
        let Some(order) = orders.iter().find(|order| order.hash == *hash) else {
            bail!("Order {hash} not found");
        };

        if !order.is_cancellable() {
            bail!("Order {hash} is {} and cannot be cancelled", order.status);
        }
    }

    Ok(())
}
