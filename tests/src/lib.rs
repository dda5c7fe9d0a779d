use alloy::primitives::{address, Address};
use sa_registry::ContractName;

/// Expected sepolia deployment, mirrored from the bundled data file
pub fn sepolia_deployment() -> Vec<(ContractName, Address)> {
    vec![
        (ContractName::SmartAccount, address!("29fe7d60ddf151e5b52e5fab4f1325da6b2bd958")),
        (ContractName::SocialRecoveryModule, address!("71c95911e9a5d330f4d621842ec243ee1343292e")),
        (ContractName::SessionKeyValidator, address!("948b3c65b89df0b4894abe91e6d02fe579834f8f")),
        (ContractName::SessionKeyModule, address!("712516e61c8b383df4a63cfe83d7701bce54b03e")),
        (ContractName::SpendingLimitModule, address!("bdea8e677f9f7c294f4c1f165470cf362e4497b9")),
    ]
}

pub const SEPOLIA_ID: u64 = 11155111;
