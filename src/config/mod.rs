//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON, default config.json)
//!     → loader.rs (existence check, parse, extract `blackhole` section)
//!     → validation.rs (semantic checks)
//!     → BlackHoleConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - A missing file is reported before any read or parse
//! - Sections other than `blackhole` are ignored
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError, DEFAULT_CONFIG_PATH};
pub use schema::BlackHoleConfig;
pub use validation::ValidationError;
