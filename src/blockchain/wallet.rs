//! Optional local signer for deployment transactions.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized
//!
//! Without a key the node signs on behalf of the unlocked `sender` account,
//! which is how development chains (ganache, anvil) are normally driven.

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "BLACKHOLE_PRIVATE_KEY";

/// Local signing key used instead of the node's unlocked accounts.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    pub fn from_private_key(private_key_hex: &str) -> BlockchainResult<Self> {
        let key_hex = private_key_hex
            .trim()
            .strip_prefix("0x")
            .unwrap_or(private_key_hex.trim());

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::info!(address = %signer.address(), "Local signer loaded");

        Ok(Self { signer })
    }

    /// Load wallet from environment variable.
    ///
    /// Returns `None` when `BLACKHOLE_PRIVATE_KEY` is unset; a set but
    /// malformed key is an error.
    pub fn from_env() -> BlockchainResult<Option<Self>> {
        match std::env::var(PRIVATE_KEY_ENV_VAR) {
            Ok(key) => Self::from_private_key(&key).map(Some),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(BlockchainError::Wallet(format!(
                "Environment variable {} unreadable: {}",
                PRIVATE_KEY_ENV_VAR, e
            ))),
        }
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Fail unless this wallet signs for `sender`.
    pub fn ensure_sender(&self, sender: Address) -> BlockchainResult<()> {
        if self.address() != sender {
            return Err(BlockchainError::Wallet(format!(
                "Private key belongs to {}, configuration sends from {}",
                self.address(),
                sender
            )));
        }
        Ok(())
    }

    pub(crate) fn into_signer(self) -> PrivateKeySigner {
        self.signer
    }
}
