use std::collections::HashMap;

use alloy::primitives::Address;
use eyre::Context;
use lazy_static::lazy_static;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::LookupError,
    types::{ChainKey, ContractName, KnownChain},
};

const ABI_FILES: [(ContractName, &str); 5] = [
    (ContractName::SmartAccount, include_str!("abi/SmartAccount.json")),
    (ContractName::SocialRecoveryModule, include_str!("abi/SocialRecoveryModule.json")),
    (ContractName::SessionKeyValidator, include_str!("abi/SessionKeyValidator.json")),
    (ContractName::SessionKeyModule, include_str!("abi/SessionKeyModule.json")),
    (ContractName::SpendingLimitModule, include_str!("abi/SpendingLimitModule.json")),
];

/// Chains without an entry here are known but have no recorded deployment
const DEPLOYMENT_FILES: [(KnownChain, &str); 1] =
    [(KnownChain::Sepolia, include_str!("deployments/sepolia.json"))];

/// Per-network deployment document: the network name, its chain id and the
/// address of every contract deployed there.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub name: String,
    pub chain_id: u64,
    pub contracts: HashMap<ContractName, Address>,
}

impl Deployment {
    pub fn from_json(raw: &str) -> eyre::Result<Self> {
        serde_json::from_str(raw).wrap_err("could not deserialize deployment from json")
    }
}

lazy_static! {
    /// ABI document by contract name. Kept opaque, as parsed JSON.
    pub static ref ABIS: HashMap<ContractName, Value> = load_abis();

    /// Deployed addresses by chain, then by contract name.
    pub static ref ADDRESSES: HashMap<KnownChain, HashMap<ContractName, Address>> =
        load_deployments();
}

fn load_abis() -> HashMap<ContractName, Value> {
    let mut map = HashMap::new();
    for (name, raw) in ABI_FILES {
        let abi: Value = serde_json::from_str(raw).expect("bundled abi is valid json");
        map.insert(name, abi);
    }

    debug!(abis = map.len(), "loaded contract abis");
    map
}

fn load_deployments() -> HashMap<KnownChain, HashMap<ContractName, Address>> {
    let mut map = HashMap::new();
    for (chain, raw) in DEPLOYMENT_FILES {
        let deployment = Deployment::from_json(raw).expect("bundled deployment is valid");
        assert_eq!(
            deployment.chain_id,
            chain.id(),
            "chain id mismatch in deployment: {}",
            deployment.name
        );
        map.insert(chain, deployment.contracts);
    }

    debug!(chains = map.len(), "loaded deployment tables");
    map
}

impl ContractName {
    /// Bundled ABI document for this contract
    pub fn abi(&self) -> &'static Value {
        &ABIS[self]
    }
}

/// Address of `name` on the given chain. The chain can be passed as a numeric
/// chain id or as a network alias, e.g. `11155111` and `"sepolia"` resolve to
/// the same table.
pub fn get_address(
    name: ContractName,
    chain: impl Into<ChainKey>,
) -> Result<Address, LookupError> {
    lookup(&ADDRESSES, name, chain.into())
}

fn lookup(
    table: &HashMap<KnownChain, HashMap<ContractName, Address>>,
    name: ContractName,
    key: ChainKey,
) -> Result<Address, LookupError> {
    key.resolve()
        .and_then(|chain| table.get(&chain))
        .and_then(|contracts| contracts.get(&name))
        .copied()
        .ok_or(LookupError { name, chain: key })
}
