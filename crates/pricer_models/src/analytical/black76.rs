//! Black-76 formula for options on futures.
//!
//! **Call Price**: C = e^(-rT)·(F·N(d₁) - K·N(d₂))
//! **Put Price**: P = e^(-rT)·(K·N(-d₂) - F·N(-d₁))
//!
//! with d₁ = (ln(F/K) + σ²T/2) / (σ√T) and d₂ = d₁ - σ√T. A futures
//! contract costs nothing to enter, so the forward drift is zero.

use super::d1d2::D1D2;
use super::distributions::norm_cdf;
use crate::instruments::{ContractError, OptionSide};

/// Prices a European option on a futures price.
///
/// # Errors
/// Propagates the domain errors of [`D1D2::new`].
///
/// # Examples
/// ```
/// use pricer_models::analytical::black76::price;
/// use pricer_models::instruments::OptionSide;
///
/// let call = price(OptionSide::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let put = price(OptionSide::Put, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
///
/// // At the money on a futures price, calls and puts are worth the same
/// assert!((call - put).abs() < 1e-10);
/// ```
#[inline]
pub fn price(
    side: OptionSide,
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
) -> Result<f64, ContractError> {
    let terms = D1D2::new(forward, strike, expiry, 0.0, volatility)?;
    let discount = (-rate * expiry).exp();

    let undiscounted = match side {
        OptionSide::Call => forward * terms.n_d1 - strike * terms.n_d2,
        OptionSide::Put => strike * norm_cdf(-terms.d2) - forward * norm_cdf(-terms.d1),
    };
    Ok(discount * undiscounted)
}
