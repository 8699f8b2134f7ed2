//! Configuration loading from disk.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::{BlackHoleConfig, BLACKHOLE_SECTION};
use crate::config::validation::{validate_config, ValidationError};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("configuration has no '{0}' section")]
    MissingSection(&'static str),

    #[error("invalid 'blackhole' section: {0}")]
    Section(#[source] serde_json::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate the deployment section of a JSON configuration file.
///
/// The file's existence is checked before anything is read, so a missing path
/// never reaches the parser.
pub fn load_config(path: &Path) -> Result<BlackHoleConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Parse configuration text and extract its `blackhole` section.
pub fn parse_config(content: &str) -> Result<BlackHoleConfig, ConfigError> {
    let mut root: Value = serde_json::from_str(content).map_err(ConfigError::Parse)?;
    let section = root
        .get_mut(BLACKHOLE_SECTION)
        .map(Value::take)
        .ok_or(ConfigError::MissingSection(BLACKHOLE_SECTION))?;

    serde_json::from_value(section).map_err(ConfigError::Section)
}
