use alloy_primitives::Address;
use anyhow::{bail, Result};
use tokio::{select, sync::Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use types::{ChainId, ReconciledOrder};

use crate::reconciler::Reconciler;

/// What the history view renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersState {
    pub orders: Vec<ReconciledOrder>,
    pub loaded: bool,
    pub error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// A newer load started before this one finished.
    Discarded,
}

struct Inner {
    state: OrdersState,
    context: Option<(ChainId, Address)>,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

/// Keeps the latest reconciled orders for the selected account.
///
/// Only the most recent load may update the state: starting a load cancels
/// the one in flight, and a result that completes after its context was
/// replaced is dropped.
pub struct OrdersTracker {
    reconciler: Reconciler,
    inner: Mutex<Inner>,
}

impl OrdersTracker {
    pub fn new(reconciler: Reconciler) -> Self {
        Self {
            reconciler,
            inner: Mutex::new(Inner {
                state: OrdersState::default(),
                context: None,
                generation: 0,
                in_flight: None,
            }),
        }
    }

    pub async fn snapshot(&self) -> OrdersState {
        self.inner.lock().await.state.clone()
    }

    pub async fn load(&self, chain: ChainId, address: Address) -> LoadOutcome {
        let context = Some((chain, address));

        let (generation, token) = {
            let mut inner = self.inner.lock().await;

            if inner.context != context {
                inner.context = context;
                inner.state = OrdersState::default();
            }

            inner.generation += 1;
            if let Some(previous) = inner.in_flight.take() {
                previous.cancel();
            }

            let token = CancellationToken::new();
            inner.in_flight = Some(token.clone());

            (inner.generation, token)
        };

        let result = select! {
            _ = token.cancelled() => {
                debug!("Load #{generation} for {address} on chain {chain} superseded");
                return LoadOutcome::Discarded;
            }
            result = self.reconciler.user_orders(chain, address) => result,
        };

        let mut inner = self.inner.lock().await;

        if inner.generation != generation || inner.context != context {
            debug!("Discarding stale result of load #{generation} for {address} on chain {chain}");
            return LoadOutcome::Discarded;
        }

        inner.in_flight = None;
        inner.state.loaded = true;

        match result {
            Ok(orders) => {
                inner.state.orders = orders;
                inner.state.error = false;
                LoadOutcome::Applied
            }
            Err(err) => {
                error!("Failed to load orders for {address} on chain {chain}: {err}");
                inner.state.error = true;
                LoadOutcome::Failed
            }
        }
    }

    /// Re-runs the pipeline for the current account. `show_spinner` marks the
    /// state as not loaded until the run completes.
    pub async fn reload(&self, show_spinner: bool) -> Result<LoadOutcome> {
        let context = {
            let mut inner = self.inner.lock().await;
            if inner.context.is_some() && show_spinner {
                inner.state.loaded = false;
            }
            inner.context
        };

        let Some((chain, address)) = context else {
            bail!("No account selected");
        };

        Ok(self.load(chain, address).await)
    }
}
