//! Contract error types.
//!
//! This module provides structured error handling for option contract
//! construction and for parsing contract enums from text.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Contract validation errors.
///
/// Every variant is raised before any formula is evaluated, so a valid
/// [`OptionContract`](super::OptionContract) can never produce NaN or Inf
/// through a division by zero in `d1`/`d2`.
///
/// # Variants
/// - `InvalidSpot`: Spot price is non-positive
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidExpiry`: Time to expiry is non-positive
/// - `InvalidVolatility`: Volatility is non-positive
/// - `NonFiniteInput`: A field is NaN or infinite
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractError;
///
/// let err = ContractError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// A numeric field is NaN or infinite.
    #[error("Non-finite input for {field}: {value}")]
    NonFiniteInput {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl From<ContractError> for PricingError {
    fn from(err: ContractError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Error returned when a textual enum value is not recognised.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionSide;
///
/// let err = "straddle".parse::<OptionSide>().unwrap_err();
/// assert_eq!(err.to_string(), "Unknown option side: 'straddle'");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    /// Human-readable name of the enum being parsed
    pub kind: &'static str,
    /// The unrecognised input
    pub value: String,
}
