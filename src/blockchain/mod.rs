//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! BlackHoleConfig (provider URL, sender, constructor arguments)
//!     → wallet.rs (optional local signer from the environment)
//!     → client.rs (RPC connection with timeouts)
//!     → artifact.rs (compiled ABI + bytecode)
//!     → deployer.rs (contract creation, receipt → DeployedContract)
//!     → contract.rs (typed calls against the deployed instance)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod artifact;
pub mod client;
pub mod contract;
pub mod deployer;
pub mod types;
pub mod wallet;

pub use artifact::{ArtifactError, ContractArtifact};
pub use client::BlockchainClient;
pub use contract::BlackHole;
pub use deployer::{Deploy, DeployError, RpcDeployer};
pub use types::{BlockchainError, BlockchainResult, ChainId, DeployedContract};
pub use wallet::Wallet;
