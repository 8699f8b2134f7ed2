//! Shared utilities for integration tests.

use alloy::primitives::Address;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use blackhole_deployer::blockchain::{BlockchainError, Deploy, DeployError, DeployedContract};
use blackhole_deployer::BlackHoleConfig;

/// Environment variable naming the compiled BlackHole artifact for node-backed tests.
#[allow(dead_code)]
pub const ARTIFACT_ENV_VAR: &str = "BLACKHOLE_ARTIFACT";

/// Write a configuration file whose `blackhole` section is `section`.
pub fn write_config(dir: &Path, section: serde_json::Value) -> PathBuf {
    let path = dir.join("config.json");
    let root = serde_json::json!({ "blackhole": section });
    std::fs::write(&path, serde_json::to_string_pretty(&root).unwrap()).unwrap();
    path
}

/// A minimal, valid `blackhole` section.
pub fn sample_section() -> serde_json::Value {
    serde_json::json!({
        "provider": "http://127.0.0.1:8545",
        "sender": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
        "erc20_address": "0x0000000000000000000000000000000000000000",
        "critic_block": 0,
        "minimum_amount": 0
    })
}

/// Path of the compiled contract used by node-backed tests.
#[allow(dead_code)]
pub fn artifact_path() -> PathBuf {
    std::env::var(ARTIFACT_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(blackhole_deployer::lifecycle::DEFAULT_ARTIFACT_PATH))
}

/// Deployer double that records what it was asked to deploy.
pub struct StubDeployer {
    outcome: Result<Address, String>,
    pub calls: Mutex<Vec<BlackHoleConfig>>,
}

impl StubDeployer {
    pub fn succeeding(address: Address) -> Self {
        Self {
            outcome: Ok(address),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Deploy for StubDeployer {
    async fn deploy(&self, config: &BlackHoleConfig) -> Result<DeployedContract, DeployError> {
        self.calls.lock().unwrap().push(config.clone());
        match &self.outcome {
            Ok(address) => Ok(DeployedContract {
                address: *address,
                transaction_hash: Default::default(),
                block_number: Some(1),
            }),
            Err(message) => Err(BlockchainError::Rpc(message.clone()).into()),
        }
    }
}
