//! European option contract terms.
//!
//! [`OptionContract`] is the validated input of every valuation model.
//! [`ContractTerms`] is the same contract without a volatility, which is the
//! input of the implied volatility solver.

use super::error::ContractError;
use super::side::OptionSide;

/// Rejects NaN and infinities.
#[inline]
fn finite(field: &'static str, value: f64) -> Result<f64, ContractError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ContractError::NonFiniteInput { field, value })
    }
}

/// Rejects non-finite and non-positive values.
#[inline]
fn positive(
    field: &'static str,
    value: f64,
    invalid: impl FnOnce(f64) -> ContractError,
) -> Result<f64, ContractError> {
    let value = finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(value))
    }
}

fn validate_volatility(volatility: f64) -> Result<f64, ContractError> {
    positive("volatility", volatility, |volatility| {
        ContractError::InvalidVolatility { volatility }
    })
}

/// Contract terms without a volatility.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ContractTerms, OptionSide};
///
/// let terms = ContractTerms::new(OptionSide::Call, 100.0, 100.0, 0.5, 0.05, 0.0).unwrap();
/// let contract = terms.with_volatility(0.2).unwrap();
/// assert_eq!(contract.volatility(), 0.2);
/// assert!(terms.with_volatility(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContractTerms {
    side: OptionSide,
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    carry: f64,
}

impl ContractTerms {
    /// Creates validated contract terms.
    ///
    /// # Arguments
    /// * `side` - Call or put
    /// * `spot` - Spot (or futures) price, must be positive
    /// * `strike` - Strike price, must be positive
    /// * `time_to_expiry` - Time to expiry in years, must be positive
    /// * `rate` - Risk-free (domestic) rate as a decimal, may be negative
    /// * `carry` - Dividend yield or foreign rate as a decimal; ignored by
    ///   the futures model
    ///
    /// # Errors
    /// - `ContractError::NonFiniteInput` if any value is NaN or infinite
    /// - `ContractError::InvalidSpot`, `InvalidStrike`, `InvalidExpiry` for
    ///   non-positive values
    pub fn new(
        side: OptionSide,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        carry: f64,
    ) -> Result<Self, ContractError> {
        Ok(Self {
            side,
            spot: positive("spot", spot, |spot| ContractError::InvalidSpot { spot })?,
            strike: positive("strike", strike, |strike| ContractError::InvalidStrike {
                strike,
            })?,
            time_to_expiry: positive("time_to_expiry", time_to_expiry, |expiry| {
                ContractError::InvalidExpiry { expiry }
            })?,
            rate: finite("rate", rate)?,
            carry: finite("carry", carry)?,
        })
    }

    /// Completes the terms into a priceable contract.
    ///
    /// # Errors
    /// Returns `ContractError::InvalidVolatility` or `NonFiniteInput` if the
    /// volatility is not a positive finite number.
    pub fn with_volatility(&self, volatility: f64) -> Result<OptionContract, ContractError> {
        Ok(OptionContract {
            terms: *self,
            volatility: validate_volatility(volatility)?,
        })
    }

    /// Call or put.
    #[inline]
    pub fn side(&self) -> OptionSide {
        self.side
    }

    /// Spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years.
    #[inline]
    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Dividend yield, foreign rate, or unused for futures.
    #[inline]
    pub fn carry(&self) -> f64 {
        self.carry
    }
}

/// A validated European option contract.
///
/// Immutable once constructed. The `with_*` methods return re-validated
/// siblings, which is how finite-difference Greeks bump their inputs.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionSide};
///
/// let contract = OptionContract::new(OptionSide::Put, 100.0, 95.0, 0.25, 0.03, 0.01, 0.2).unwrap();
/// let bumped = contract.with_spot(100.5).unwrap();
/// assert_eq!(bumped.spot(), 100.5);
/// assert_eq!(contract.spot(), 100.0);
///
/// assert!(OptionContract::new(OptionSide::Call, 100.0, 100.0, 0.0, 0.05, 0.0, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionContract {
    #[cfg_attr(feature = "serde", serde(flatten))]
    terms: ContractTerms,
    volatility: f64,
}

impl OptionContract {
    /// Creates a validated contract.
    ///
    /// # Errors
    /// Any of the [`ContractTerms::new`] errors, plus
    /// `ContractError::InvalidVolatility` for a non-positive volatility.
    pub fn new(
        side: OptionSide,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        carry: f64,
        volatility: f64,
    ) -> Result<Self, ContractError> {
        ContractTerms::new(side, spot, strike, time_to_expiry, rate, carry)?
            .with_volatility(volatility)
    }

    /// The contract without its volatility.
    #[inline]
    pub fn terms(&self) -> ContractTerms {
        self.terms
    }

    /// Call or put.
    #[inline]
    pub fn side(&self) -> OptionSide {
        self.terms.side
    }

    /// Spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.terms.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.terms.strike
    }

    /// Time to expiry in years.
    #[inline]
    pub fn time_to_expiry(&self) -> f64 {
        self.terms.time_to_expiry
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.terms.rate
    }

    /// Dividend yield, foreign rate, or unused for futures.
    #[inline]
    pub fn carry(&self) -> f64 {
        self.terms.carry
    }

    /// Annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Sibling contract with a different spot.
    pub fn with_spot(&self, spot: f64) -> Result<Self, ContractError> {
        let mut terms = self.terms;
        terms.spot = positive("spot", spot, |spot| ContractError::InvalidSpot { spot })?;
        Ok(Self { terms, ..*self })
    }

    /// Sibling contract with a different time to expiry.
    pub fn with_time_to_expiry(&self, time_to_expiry: f64) -> Result<Self, ContractError> {
        let mut terms = self.terms;
        terms.time_to_expiry = positive("time_to_expiry", time_to_expiry, |expiry| {
            ContractError::InvalidExpiry { expiry }
        })?;
        Ok(Self { terms, ..*self })
    }

    /// Sibling contract with a different volatility.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, ContractError> {
        self.terms.with_volatility(volatility)
    }

    /// Sibling contract with a different risk-free rate.
    pub fn with_rate(&self, rate: f64) -> Result<Self, ContractError> {
        let mut terms = self.terms;
        terms.rate = finite("rate", rate)?;
        Ok(Self { terms, ..*self })
    }
}
