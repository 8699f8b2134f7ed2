//! BlackHole contract deployment.
//!
//! # Data Flow
//! ```text
//! BlackHoleConfig.contract_file
//!     → artifact.rs (ABI + creation bytecode)
//!     → constructor args (erc20, criticBlock, minimumAmount) appended
//!     → client.rs (single contract-creation transaction, receipt)
//!     → DeployedContract
//! ```
//!
//! Deployment is one attempt. Whatever the node reports (network error,
//! out of gas, reverted constructor) is handed back to the caller.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolValue;
use async_trait::async_trait;
use thiserror::Error;

use crate::blockchain::artifact::{ArtifactError, ContractArtifact};
use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainError, DeployedContract};
use crate::blockchain::wallet::Wallet;
use crate::config::BlackHoleConfig;

/// Number of arguments the BlackHole constructor takes.
const CONSTRUCTOR_ARITY: usize = 3;

/// Errors raised by a deployment attempt.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}

/// Something that can put a BlackHole contract on chain.
#[async_trait]
pub trait Deploy: Send + Sync {
    async fn deploy(&self, config: &BlackHoleConfig) -> Result<DeployedContract, DeployError>;
}

/// Where the deployment transaction gets its signature.
#[derive(Debug, Clone, Default)]
enum Signer {
    /// The node signs for the unlocked `sender`.
    #[default]
    Node,
    Local(Wallet),
    /// `BLACKHOLE_PRIVATE_KEY` if set, read when a deployment starts.
    Env,
}

/// Deploys through the JSON-RPC endpoint named in the configuration.
#[derive(Debug, Clone, Default)]
pub struct RpcDeployer {
    signer: Signer,
}

impl RpcDeployer {
    /// Deployer that lets the node sign for `sender`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deployer that signs locally with `wallet`.
    pub fn with_wallet(wallet: Wallet) -> Self {
        Self {
            signer: Signer::Local(wallet),
        }
    }

    /// Deployer that uses `BLACKHOLE_PRIVATE_KEY` when it is set.
    ///
    /// The variable is read at deployment time, after the configuration and
    /// artifact have loaded, so their errors are reported first.
    pub fn from_env() -> Self {
        Self { signer: Signer::Env }
    }

    fn wallet(&self) -> Result<Option<Wallet>, BlockchainError> {
        match &self.signer {
            Signer::Node => Ok(None),
            Signer::Local(wallet) => Ok(Some(wallet.clone())),
            Signer::Env => Wallet::from_env(),
        }
    }
}

#[async_trait]
impl Deploy for RpcDeployer {
    async fn deploy(&self, config: &BlackHoleConfig) -> Result<DeployedContract, DeployError> {
        let artifact = ContractArtifact::load(&config.contract_file)?;
        let wallet = self.wallet()?;
        if let Some(wallet) = &wallet {
            wallet.ensure_sender(config.sender)?;
        }

        let client = BlockchainClient::connect(&config.provider, config.rpc_timeout_secs, wallet)?;
        Ok(deploy_with(&client, &artifact, config).await?)
    }
}

/// ABI-encode the constructor arguments `(address, uint256, uint256)`.
pub fn constructor_args(config: &BlackHoleConfig) -> Vec<u8> {
    (
        config.erc20_address,
        U256::from(config.critic_block),
        config.minimum_amount,
    )
        .abi_encode_params()
}

/// Build the contract-creation transaction for `artifact`.
pub fn creation_transaction(
    artifact: &ContractArtifact,
    config: &BlackHoleConfig,
) -> Result<TransactionRequest, BlockchainError> {
    if let Some(arity) = artifact.constructor_arity() {
        if arity != CONSTRUCTOR_ARITY {
            return Err(BlockchainError::ConstructorArity(arity));
        }
    }

    let code: Bytes = artifact.creation_code(&constructor_args(config));
    Ok(TransactionRequest::default()
        .with_from(config.sender)
        .with_deploy_code(code)
        .with_gas_limit(config.gas))
}

/// Deploy `artifact` through an existing client.
pub async fn deploy_with(
    client: &BlockchainClient,
    artifact: &ContractArtifact,
    config: &BlackHoleConfig,
) -> Result<DeployedContract, BlockchainError> {
    let tx = creation_transaction(artifact, config)?;

    tracing::info!(
        contract = %artifact.contract_name,
        sender = %config.sender,
        erc20_address = %config.erc20_address,
        critic_block = config.critic_block,
        minimum_amount = %config.minimum_amount,
        gas = config.gas,
        "Deploying contract"
    );

    let receipt = client.send_transaction(tx).await?;
    let address = receipt
        .contract_address
        .ok_or(BlockchainError::MissingContractAddress(receipt.transaction_hash))?;

    tracing::info!(
        address = %address,
        tx_hash = %receipt.transaction_hash,
        block_number = ?receipt.block_number,
        "Contract deployed"
    );

    Ok(DeployedContract {
        address,
        transaction_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
    })
}
