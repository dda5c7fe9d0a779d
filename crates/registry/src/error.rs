use thiserror::Error;

use crate::types::{ChainKey, ContractName};

/// Lookup miss for a (contract, chain) pair: either the chain key is not
/// registered, or the contract has no recorded address on that chain. Carries
/// the key exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no address for {name} on chain {chain}")]
pub struct LookupError {
    pub name: ContractName,
    pub chain: ChainKey,
}
