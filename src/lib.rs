//! BlackHole contract deployment tooling.

pub mod blockchain;
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use blockchain::{BlackHole, Deploy, DeployedContract, RpcDeployer};
pub use config::BlackHoleConfig;
pub use lifecycle::{run_deployment, DeploymentPaths};
