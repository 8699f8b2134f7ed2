//! BlackHole deployer.
//!
//! Deploys the BlackHole contract described by the `blackhole` section of a
//! JSON configuration file and records the new address.
//!
//! # Architecture Overview
//!
//! ```text
//!   config.json ──▶ config::loader ──▶ BlackHoleConfig
//!                                            │
//!   BlackHoleEosAccount.json ───────────────▶│ (artifact path injected)
//!                                            ▼
//!                               blockchain::deployer ──▶ JSON-RPC node
//!                                            │
//!                                            ▼
//!                      "(RESULT) blackhole address: 0x…" + ./blackhole_address
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use blackhole_deployer::config::DEFAULT_CONFIG_PATH;
use blackhole_deployer::lifecycle::{
    run_deployment, DeploymentPaths, DEFAULT_ARTIFACT_PATH, DEFAULT_OUTPUT_PATH,
};
use blackhole_deployer::observability::logging;
use blackhole_deployer::RpcDeployer;

#[derive(Parser)]
#[command(name = "blackhole-deployer")]
#[command(about = "Deploy the BlackHole contract", long_about = None)]
struct Args {
    /// JSON configuration file with a `blackhole` section
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Compiled contract artifact
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,

    /// File that receives the deployed address
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let paths = DeploymentPaths {
        config: args.config,
        artifact: args.artifact,
        output: args.output,
    };

    match run_deployment(&paths, &RpcDeployer::from_env()).await {
        Ok(deployed) => {
            println!("(RESULT) blackhole address: {}", deployed.address);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Deployment failed");
            ExitCode::FAILURE
        }
    }
}
