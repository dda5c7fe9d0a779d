use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Contract modules shipped with the registry, serialized under their exact
/// contract names.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractName {
    SmartAccount,
    SocialRecoveryModule,
    SessionKeyValidator,
    SessionKeyModule,
    SpendingLimitModule,
}

impl ContractName {
    pub const ALL: [ContractName; 5] = [
        ContractName::SmartAccount,
        ContractName::SocialRecoveryModule,
        ContractName::SessionKeyValidator,
        ContractName::SessionKeyModule,
        ContractName::SpendingLimitModule,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownChain {
    #[serde(alias = "mainnet")]
    Mainnet,
    #[serde(alias = "sepolia")]
    Sepolia,
}

impl KnownChain {
    pub fn id(&self) -> u64 {
        match self {
            KnownChain::Mainnet => 1,
            KnownChain::Sepolia => 11155111,
        }
    }

    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            1 => Some(KnownChain::Mainnet),
            11155111 => Some(KnownChain::Sepolia),
            _ => None,
        }
    }
}

/// Chain key as supplied by the caller, either a numeric chain id or a
/// network alias.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainKey {
    Id(u64),
    Alias(String),
}

impl ChainKey {
    /// Resolve to a registered chain. Aliases accept the same spellings as
    /// the serde representation of [`KnownChain`].
    pub fn resolve(&self) -> Option<KnownChain> {
        match self {
            ChainKey::Id(id) => KnownChain::from_id(*id),
            ChainKey::Alias(name) => match name.as_str() {
                "mainnet" | "Mainnet" => Some(KnownChain::Mainnet),
                "sepolia" | "Sepolia" => Some(KnownChain::Sepolia),
                _ => None,
            },
        }
    }
}

impl From<u64> for ChainKey {
    fn from(id: u64) -> Self {
        ChainKey::Id(id)
    }
}

impl From<&str> for ChainKey {
    fn from(alias: &str) -> Self {
        ChainKey::Alias(alias.to_string())
    }
}

impl From<String> for ChainKey {
    fn from(alias: String) -> Self {
        ChainKey::Alias(alias)
    }
}

impl From<KnownChain> for ChainKey {
    fn from(chain: KnownChain) -> Self {
        ChainKey::Id(chain.id())
    }
}

impl std::fmt::Display for ChainKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainKey::Id(id) => write!(f, "{id}"),
            ChainKey::Alias(name) => write!(f, "{name}"),
        }
    }
}
