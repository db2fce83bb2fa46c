//! Closed-form valuation models.
//!
//! This module provides the [`ValuationModel`] trait and its variants:
//! - [`EquityDividendModel`]: Black-Scholes with a continuous dividend yield
//! - [`FuturesModel`]: Black-76, carry ignored
//! - [`FxModel`]: Garman-Kohlhagen, carry is the foreign rate
//! - [`ModelKind`]: static dispatch over the three
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{OptionContract, OptionSide};
//! use pricer_models::models::{EquityDividendModel, ValuationModel};
//!
//! let contract = OptionContract::new(OptionSide::Call, 100.0, 100.0, 0.5, 0.05, 0.0, 0.2).unwrap();
//! let price = EquityDividendModel.price(&contract).unwrap();
//! assert!((price - 6.8887).abs() < 1e-4);
//! ```

use std::fmt;

use pricer_core::types::PricingError;

use crate::instruments::OptionContract;

pub mod equity;
pub mod futures;
pub mod fx;
pub mod model_kind;

pub use equity::EquityDividendModel;
pub use futures::FuturesModel;
pub use fx::FxModel;
pub use model_kind::ModelKind;

/// A Black-Scholes-family pricing function.
///
/// Implementations are stateless unit structs. Pricing is a pure function
/// of the contract, so models are freely copied between threads and the
/// finite-difference engines can re-price bumped contracts without any
/// shared state.
pub trait ValuationModel: Copy + Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The yield `q` such that the forward drift in `d1` is `r - q`.
    ///
    /// Dividend yield for equities, foreign rate for FX, and the
    /// risk-free rate itself for futures.
    fn carry_rate(&self, contract: &OptionContract) -> f64;

    /// Present value of the option.
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` if the contract violates the model domain
    /// - `PricingError::NumericalInstability` if the formula is not finite
    fn price(&self, contract: &OptionContract) -> Result<f64, PricingError>;

    /// Call minus put value implied by put-call parity,
    /// `S·e^(-qT) - K·e^(-rT)`.
    fn forward_parity(&self, contract: &OptionContract) -> f64 {
        let t = contract.time_to_expiry();
        contract.spot() * (-self.carry_rate(contract) * t).exp()
            - contract.strike() * (-contract.rate() * t).exp()
    }
}

/// Rejects non-finite formula output.
pub(crate) fn finite_price(model: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::warn!(model, value, "closed-form price is not finite");
        Err(PricingError::NumericalInstability(format!(
            "{} price evaluated to {}",
            model, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_price_passes_through() {
        assert_eq!(finite_price("test", 1.5), Ok(1.5));
    }

    #[test]
    fn test_non_finite_price_is_instability() {
        assert!(matches!(
            finite_price("test", f64::NAN),
            Err(PricingError::NumericalInstability(_))
        ));
        assert!(finite_price("test", f64::INFINITY).is_err());
    }
}
