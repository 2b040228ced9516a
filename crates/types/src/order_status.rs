use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle status of a stop-loss order once all sources are merged.
///
/// The order book owns most of the vocabulary; values it introduces that are
/// not listed here are carried through untouched in [`OrderStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Registered on-chain, not yet seen by the order book.
    Created,
    /// Open in the order book.
    Posted,
    Cancelled,
    Fulfilled,
    Expired,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Posted => "posted",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Fulfilled => "fulfilled",
            OrderStatus::Expired => "expired",
            OrderStatus::Other(status) => status,
        }
    }

    pub fn is_cancellable(&self) -> bool {
        matches!(self, OrderStatus::Created | OrderStatus::Posted)
    }
}

impl From<&str> for OrderStatus {
    fn from(status: &str) -> Self {
        match status {
            "created" => OrderStatus::Created,
            "posted" => OrderStatus::Posted,
            "cancelled" => OrderStatus::Cancelled,
            "fulfilled" => OrderStatus::Fulfilled,
            "expired" => OrderStatus::Expired,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let status = String::deserialize(deserializer)?;
        Ok(OrderStatus::from(status.as_str()))
    }
}
