//! Chain-specific types and error definitions.

use alloy::primitives::{Address, TxHash};
use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Transaction was reverted on-chain or rejected during estimation.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// Invalid private key format or signer mismatch.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// A contract-creation receipt did not name the new contract.
    #[error("Receipt for {0} carries no contract address")]
    MissingContractAddress(TxHash),

    /// The artifact's constructor does not take the deployment arguments.
    #[error("Constructor takes {0} arguments, expected 3 (erc20, criticBlock, minimumAmount)")]
    ConstructorArity(usize),
}

impl BlockchainError {
    /// Classify a failure reported by the RPC layer.
    ///
    /// Nodes report reverts as error responses during estimation or calls, so
    /// the message is the only place the distinction survives.
    pub fn from_rpc(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        if message.to_lowercase().contains("revert") {
            Self::Reverted(message)
        } else {
            Self::Rpc(message)
        }
    }
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Handle to a freshly deployed contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    /// Address of the new contract.
    pub address: Address,
    /// Hash of the contract-creation transaction.
    pub transaction_hash: TxHash,
    /// Block that included the creation transaction.
    pub block_number: Option<u64>,
}
