//! CLI error types

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `optpricer` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<pricer_models::instruments::ContractError> for CliError {
    fn from(err: pricer_models::instruments::ContractError) -> Self {
        CliError::Pricing(err.into())
    }
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
