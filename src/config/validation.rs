//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (gas and timeouts > 0)
//! - Check the RPC endpoint is a usable URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BlackHoleConfig → Result<(), Vec<ValidationError>>
//! - Addresses are not checked here: a zero ERC20 address is a legal deployment

use thiserror::Error;

use crate::config::schema::BlackHoleConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("provider '{url}' is not a valid URL: {reason}")]
    InvalidProvider { url: String, reason: String },

    #[error("gas must be greater than zero")]
    ZeroGas,

    #[error("rpc_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Check the semantic constraints serde cannot express.
pub fn validate_config(config: &BlackHoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.provider.parse::<url::Url>() {
        errors.push(ValidationError::InvalidProvider {
            url: config.provider.clone(),
            reason: e.to_string(),
        });
    }

    if config.gas == 0 {
        errors.push(ValidationError::ZeroGas);
    }

    if config.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
