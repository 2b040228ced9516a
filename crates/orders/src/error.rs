use std::{fmt, time::Duration};

use thiserror::Error;

/// The external collaborator a request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Indexer,
    OrderBook,
    Chain,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Service::Indexer => "indexer",
            Service::OrderBook => "order book",
            Service::Chain => "chain read",
        })
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("indexer request failed: {0:#}")]
    Indexer(anyhow::Error),

    #[error("order book request failed: {0:#}")]
    OrderBook(anyhow::Error),

    #[error("chain read failed: {0:#}")]
    ChainRead(anyhow::Error),

    #[error("{service} request timed out after {after:?}")]
    Timeout { service: Service, after: Duration },
}

impl FetchError {
    pub fn new(service: Service, err: anyhow::Error) -> Self {
        match service {
            Service::Indexer => FetchError::Indexer(err),
            Service::OrderBook => FetchError::OrderBook(err),
            Service::Chain => FetchError::ChainRead(err),
        }
    }

    pub fn service(&self) -> Service {
        match self {
            FetchError::Indexer(_) => Service::Indexer,
            FetchError::OrderBook(_) => Service::OrderBook,
            FetchError::ChainRead(_) => Service::Chain,
            FetchError::Timeout { service, .. } => *service,
        }
    }
}
