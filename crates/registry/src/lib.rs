pub mod error;
pub mod registry;
pub mod types;

pub use error::LookupError;
pub use registry::{get_address, Deployment, ABIS, ADDRESSES};
pub use types::{ChainKey, ContractName, KnownChain};
