//! Deployment orchestration.
//!
//! # Responsibilities
//! - Load the configuration from the injected path
//! - Point the deployment at the injected contract artifact
//! - Run the deployer once
//! - Persist the new contract address
//!
//! # Design Decisions
//! - Fail fast: any error ends the run, nothing is retried or rolled back
//! - The address file is written only after a successful deployment
//! - Paths are parameters; the defaults match the repository layout

use alloy::primitives::Address;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::blockchain::{Deploy, DeployError, DeployedContract};
use crate::config::{load_config, ConfigError, DEFAULT_CONFIG_PATH};

/// Compiled contract deployed when no artifact is given.
pub const DEFAULT_ARTIFACT_PATH: &str = "./blackhole/build/contracts/BlackHoleEosAccount.json";

/// File that receives the deployed address.
pub const DEFAULT_OUTPUT_PATH: &str = "./blackhole_address";

/// Files a deployment run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPaths {
    pub config: PathBuf,
    pub artifact: PathBuf,
    pub output: PathBuf,
}

impl Default for DeploymentPaths {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            artifact: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Errors that end a deployment run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("deployment failed: {0}")]
    Deploy(#[from] DeployError),

    #[error("failed to write contract address to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load the configuration, deploy, and record the new address.
pub async fn run_deployment<D>(
    paths: &DeploymentPaths,
    deployer: &D,
) -> Result<DeployedContract, RunError>
where
    D: Deploy + ?Sized,
{
    let mut config = load_config(&paths.config)?;
    config.contract_file = paths.artifact.clone();

    tracing::info!(
        config = %paths.config.display(),
        artifact = %paths.artifact.display(),
        provider = %config.provider,
        "Starting deployment"
    );

    let deployed = deployer.deploy(&config).await?;
    persist_address(&paths.output, deployed.address)?;

    tracing::info!(
        address = %deployed.address,
        output = %paths.output.display(),
        "Contract address saved"
    );
    Ok(deployed)
}

/// Write `address` to `path`, replacing any previous content.
pub fn persist_address(path: &Path, address: Address) -> Result<(), RunError> {
    std::fs::write(path, address.to_string()).map_err(|source| RunError::Persist {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an address written by [`persist_address`].
pub fn read_address(path: &Path) -> std::io::Result<Address> {
    let content = std::fs::read_to_string(path)?;
    content
        .trim()
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
