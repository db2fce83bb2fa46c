//! Standardised distance terms shared by the Black-Scholes family.

use super::distributions::norm_cdf;
use crate::instruments::ContractError;

/// `true` unless `x` is positive and finite.
#[inline]
fn out_of_domain(x: f64) -> bool {
    !x.is_finite() || x <= 0.0
}

/// Derived terms `d1`, `d2`, `N(d1)` and `N(d2)`.
///
/// Computed from scratch for every contract. Bumped contracts get their own
/// terms; nothing is cached between them.
///
/// d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T
///
/// where `b` is the drift of the underlying under the pricing measure
/// (`r - q` for a dividend-paying stock, `rd - rf` for FX, `0` for futures).
///
/// # Examples
/// ```
/// use pricer_models::analytical::D1D2;
///
/// let terms = D1D2::new(100.0, 100.0, 0.5, 0.05, 0.2).unwrap();
/// assert!((terms.d1 - 0.247487373).abs() < 1e-8);
/// assert!((terms.d1 - terms.d2 - 0.2 * 0.5_f64.sqrt()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    /// d₁
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
    /// N(d₁)
    pub n_d1: f64,
    /// N(d₂)
    pub n_d2: f64,
}

impl D1D2 {
    /// Computes the terms.
    ///
    /// # Arguments
    /// * `spot` - Spot or forward price (S)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiry in years (T)
    /// * `drift` - Cost-of-carry drift (b)
    /// * `volatility` - Volatility (σ)
    ///
    /// # Errors
    /// Checks the domain before touching the formula: a non-positive
    /// expiry, volatility, spot or strike is rejected rather than
    /// propagated as NaN or Inf.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        drift: f64,
        volatility: f64,
    ) -> Result<Self, ContractError> {
        if out_of_domain(expiry) {
            return Err(ContractError::InvalidExpiry { expiry });
        }
        if out_of_domain(volatility) {
            return Err(ContractError::InvalidVolatility { volatility });
        }
        if out_of_domain(spot) {
            return Err(ContractError::InvalidSpot { spot });
        }
        if out_of_domain(strike) {
            return Err(ContractError::InvalidStrike { strike });
        }

        let vol_sqrt_t = volatility * expiry.sqrt();
        let d1 = ((spot / strike).ln() + (drift + 0.5 * volatility * volatility) * expiry)
            / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        Ok(Self {
            d1,
            d2,
            n_d1: norm_cdf(d1),
            n_d2: norm_cdf(d2),
        })
    }
}
