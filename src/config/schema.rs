//! Configuration schema definitions.
//!
//! The configuration file is a JSON object shared with sibling tooling. The
//! deployer only reads its `blackhole` section:
//!
//! ```json
//! {
//!   "blackhole": {
//!     "provider": "http://localhost:8545",
//!     "sender": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
//!     "erc20_address": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
//!     "critic_block": 0,
//!     "minimum_amount": 1
//!   }
//! }
//! ```
//!
//! `minimum_amount` is a `uint256`. JSON numbers only carry it exactly up to
//! `u64::MAX`, so larger values are written as strings, either decimal
//! (`"100000000000000000000"`) or hex (`"0x56bc75e2d63100000"`).

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Key of the deployer's section inside the configuration file.
pub const BLACKHOLE_SECTION: &str = "blackhole";

/// Parameters of a single BlackHole deployment.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlackHoleConfig {
    /// Account that sends the contract-creation transaction.
    pub sender: Address,

    /// ERC20 token contract the black hole teleports from.
    pub erc20_address: Address,

    /// Block height from which anyone may close the black hole.
    pub critic_block: u64,

    /// Minimum number of tokens a teleport accepts.
    #[serde(deserialize_with = "deserialize_amount")]
    pub minimum_amount: U256,

    /// JSON-RPC endpoint URL.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Gas limit of the contract-creation transaction.
    #[serde(default = "default_gas")]
    pub gas: u64,

    /// Upper bound for a single RPC round trip, receipt included.
    #[serde(default = "default_rpc_timeout_secs")]
    pub rpc_timeout_secs: u64,

    /// Compiled contract artifact. Replaced by the path the caller injects.
    #[serde(default)]
    pub contract_file: PathBuf,
}

/// Token amount as it may appear in JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Int(u64),
    Text(String),
    Float(f64),
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Int(value) => Ok(U256::from(value)),
        RawAmount::Text(text) => text.trim().parse().map_err(|e| {
            serde::de::Error::custom(format!("minimum_amount {:?} is not a uint256: {}", text, e))
        }),
        RawAmount::Float(value) => Err(serde::de::Error::custom(format!(
            "minimum_amount {} is not a non-negative integer up to 2^64-1; \
             larger amounts must be quoted as a decimal or 0x-hex string",
            value
        ))),
    }
}

fn default_provider() -> String {
    "http://localhost:8545".to_string()
}

fn default_gas() -> u64 {
    3_000_000
}

fn default_rpc_timeout_secs() -> u64 {
    120
}
