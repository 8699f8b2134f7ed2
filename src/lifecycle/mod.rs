//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Deployment (deployment.rs):
//!     Load config → Inject artifact path → Deploy → Persist address
//! ```
//!
//! # Design Decisions
//! - Ordered, sequential steps; the first failure ends the run
//! - A failed run leaves no address file behind

pub mod deployment;

pub use deployment::{
    persist_address, read_address, run_deployment, DeploymentPaths, RunError,
    DEFAULT_ARTIFACT_PATH, DEFAULT_OUTPUT_PATH,
};
