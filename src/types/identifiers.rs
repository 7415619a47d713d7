use super::Metadata;
use serde::{Deserialize, Serialize};

/// Identifies a blockchain network, optionally narrowed to a shard or
/// sub-network.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NetworkIdentifier {
    pub blockchain: String,
    pub network: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_network_identifier: Option<SubNetworkIdentifier>,
}

impl NetworkIdentifier {
    pub fn new(blockchain: impl Into<String>, network: impl Into<String>) -> Self {
        NetworkIdentifier {
            blockchain: blockchain.into(),
            network: network.into(),
            sub_network_identifier: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SubNetworkIdentifier {
    pub network: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Uniquely identifies an account, optionally scoped to a sub-account such
/// as a staking or vesting balance.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AccountIdentifier {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_account: Option<SubAccountIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl AccountIdentifier {
    pub fn new(address: impl Into<String>) -> Self {
        AccountIdentifier {
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn with_sub_account(mut self, address: impl Into<String>) -> Self {
        self.sub_account = Some(SubAccountIdentifier {
            address: address.into(),
            metadata: None,
        });
        self
    }
}

impl std::fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.sub_account {
            Some(sub) => write!(f, "{}:{}", self.address, sub.address),
            None => write!(f, "{}", self.address),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SubAccountIdentifier {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Uniquely identifies a block by both index and hash.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct BlockIdentifier {
    pub index: i64,
    pub hash: String,
}

impl BlockIdentifier {
    pub fn new(index: i64, hash: impl Into<String>) -> Self {
        BlockIdentifier {
            index,
            hash: hash.into(),
        }
    }
}

/// Refers to a block by index, hash, or both. When neither is set it refers
/// to the current tip.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialBlockIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl PartialBlockIdentifier {
    pub fn tip() -> Self {
        Self::default()
    }

    pub fn at_index(index: i64) -> Self {
        PartialBlockIdentifier {
            index: Some(index),
            hash: None,
        }
    }

    pub fn is_tip(&self) -> bool {
        self.index.is_none() && self.hash.is_none()
    }

    /// Returns true if `block` is the block this identifier refers to. A tip
    /// identifier matches any block.
    pub fn matches(&self, block: &BlockIdentifier) -> bool {
        self.index.map_or(true, |index| index == block.index)
            && self.hash.as_ref().map_or(true, |hash| *hash == block.hash)
    }
}

impl From<&BlockIdentifier> for PartialBlockIdentifier {
    fn from(block: &BlockIdentifier) -> Self {
        PartialBlockIdentifier {
            index: Some(block.index),
            hash: Some(block.hash.clone()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct TransactionIdentifier {
    pub hash: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OperationIdentifier {
    pub index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_index: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct CoinIdentifier {
    pub identifier: String,
}

impl CoinIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        CoinIdentifier {
            identifier: identifier.into(),
        }
    }
}
