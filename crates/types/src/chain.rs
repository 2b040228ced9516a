use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unsupported chain '{0}'")]
pub struct UnsupportedChain(pub String);

/// Networks on which ComposableCoW stop-loss orders are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    Mainnet,
    Goerli,
    Gnosis,
    Sepolia,
}

impl ChainId {
    pub const ALL: [ChainId; 4] = [
        ChainId::Mainnet,
        ChainId::Goerli,
        ChainId::Gnosis,
        ChainId::Sepolia,
    ];

    pub fn id(self) -> u64 {
        match self {
            ChainId::Mainnet => 1,
            ChainId::Goerli => 5,
            ChainId::Gnosis => 100,
            ChainId::Sepolia => 11_155_111,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChainId::Mainnet => "mainnet",
            ChainId::Goerli => "goerli",
            ChainId::Gnosis => "gnosis",
            ChainId::Sepolia => "sepolia",
        }
    }

    /// Base URL of the CoW Protocol order book serving this network.
    pub fn order_book_url(self) -> &'static str {
        match self {
            ChainId::Mainnet => "https://api.cow.fi/mainnet",
            ChainId::Goerli => "https://api.cow.fi/goerli",
            ChainId::Gnosis => "https://api.cow.fi/xdai",
            ChainId::Sepolia => "https://api.cow.fi/sepolia",
        }
    }
}

impl TryFrom<u64> for ChainId {
    type Error = UnsupportedChain;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        ChainId::ALL
            .into_iter()
            .find(|chain| chain.id() == id)
            .ok_or_else(|| UnsupportedChain(id.to_string()))
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

impl FromStr for ChainId {
    type Err = UnsupportedChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u64>() {
            return ChainId::try_from(id);
        }

        ChainId::ALL
            .into_iter()
            .find(|chain| chain.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedChain(s.to_string()))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_and_names() {
        assert_eq!("1".parse::<ChainId>().unwrap(), ChainId::Mainnet);
        assert_eq!("100".parse::<ChainId>().unwrap(), ChainId::Gnosis);
        assert_eq!("Sepolia".parse::<ChainId>().unwrap(), ChainId::Sepolia);
        assert!("137".parse::<ChainId>().is_err());
        assert!("polygon".parse::<ChainId>().is_err());
    }

    #[test]
    fn serializes_as_numeric_id() {
        assert_eq!(serde_json::to_string(&ChainId::Sepolia).unwrap(), "11155111");
        assert_eq!(
            serde_json::from_str::<ChainId>("5").unwrap(),
            ChainId::Goerli
        );
        assert!(serde_json::from_str::<ChainId>("10").is_err());
    }
}
