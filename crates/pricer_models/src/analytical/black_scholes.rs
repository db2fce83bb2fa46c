//! Black-Scholes formula with a continuous yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! `q` is a dividend yield for equities and the foreign rate for FX
//! (Garman-Kohlhagen). With `q = 0` this is the original Black-Scholes
//! formula.

use super::d1d2::D1D2;
use super::distributions::norm_cdf;
use crate::instruments::{ContractError, OptionSide};

/// Prices a European option on an asset paying a continuous yield.
///
/// # Arguments
/// * `side` - Call or put
/// * `spot` - Spot price (S)
/// * `strike` - Strike price (K)
/// * `expiry` - Time to expiry in years (T)
/// * `rate` - Risk-free (domestic) rate (r)
/// * `yield_rate` - Continuous yield or foreign rate (q)
/// * `volatility` - Volatility (σ)
///
/// # Errors
/// Propagates the domain errors of [`D1D2::new`].
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price;
/// use pricer_models::instruments::OptionSide;
///
/// let call = price(OptionSide::Call, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
/// let put = price(OptionSide::Put, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[inline]
pub fn price(
    side: OptionSide,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    yield_rate: f64,
    volatility: f64,
) -> Result<f64, ContractError> {
    let terms = D1D2::new(spot, strike, expiry, rate - yield_rate, volatility)?;
    let asset = spot * (-yield_rate * expiry).exp();
    let cash = strike * (-rate * expiry).exp();

    Ok(match side {
        OptionSide::Call => asset * terms.n_d1 - cash * terms.n_d2,
        // N(-x), not 1 - N(x)
        OptionSide::Put => cash * norm_cdf(-terms.d2) - asset * norm_cdf(-terms.d1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Reference values
    // ==========================================================

    #[test]
    fn test_reference_half_year_atm() {
        let call = price(OptionSide::Call, 100.0, 100.0, 0.5, 0.05, 0.0, 0.2).unwrap();
        let put = price(OptionSide::Put, 100.0, 100.0, 0.5, 0.05, 0.0, 0.2).unwrap();
        assert_relative_eq!(call, 6.888728577680624, epsilon = 1e-10);
        assert_relative_eq!(put, 4.41971978051388, epsilon = 1e-10);
    }

    #[test]
    fn test_reference_one_year_atm() {
        // Hull's textbook value
        let call = price(OptionSide::Call, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
        assert_relative_eq!(call, 10.4506, epsilon = 1e-4);
    }

    #[test]
    fn test_reference_with_dividend_yield() {
        let call = price(OptionSide::Call, 100.0, 110.0, 1.0, 0.05, 0.02, 0.25).unwrap();
        let put = price(OptionSide::Put, 100.0, 110.0, 1.0, 0.05, 0.02, 0.25).unwrap();
        assert_relative_eq!(call, 7.1121023481313586, epsilon = 1e-10);
        assert_relative_eq!(put, 13.727471712534381, epsilon = 1e-10);
    }

    #[test]
    fn test_reference_garman_kohlhagen() {
        let call = price(OptionSide::Call, 1.25, 1.2, 0.5, 0.03, 0.01, 0.1).unwrap();
        let put = price(OptionSide::Put, 1.25, 1.2, 0.5, 0.03, 0.01, 0.1).unwrap();
        assert_relative_eq!(call, 0.07349371056388421, epsilon = 1e-12);
        assert_relative_eq!(put, 0.011862439096706479, epsilon = 1e-12);
    }

    // ==========================================================
    // Structural properties
    // ==========================================================

    #[test]
    fn test_put_call_parity() {
        let (s, k, t, r, q, v) = (120.0, 100.0, 2.0, 0.03, 0.015, 0.35);
        let call = price(OptionSide::Call, s, k, t, r, q, v).unwrap();
        let put = price(OptionSide::Put, s, k, t, r, q, v).unwrap();
        let forward_value = s * (-q * t).exp() - k * (-r * t).exp();
        assert_relative_eq!(call - put, forward_value, epsilon = 1e-10);
    }

    #[test]
    fn test_deep_in_the_money_call_approaches_forward_value() {
        let call = price(OptionSide::Call, 500.0, 100.0, 0.5, 0.05, 0.0, 0.2).unwrap();
        let lower_bound = 500.0 - 100.0 * (-0.025_f64).exp();
        assert_relative_eq!(call, lower_bound, epsilon = 1e-8);
    }

    #[test]
    fn test_deep_out_of_the_money_put_is_tiny_but_non_negative() {
        let put = price(OptionSide::Put, 500.0, 100.0, 0.5, 0.05, 0.0, 0.2).unwrap();
        assert!(put >= 0.0);
        assert!(put < 1e-12);
    }

    #[test]
    fn test_domain_errors_propagate() {
        assert_eq!(
            price(OptionSide::Call, 100.0, 100.0, 0.0, 0.05, 0.0, 0.2),
            Err(ContractError::InvalidExpiry { expiry: 0.0 })
        );
        assert_eq!(
            price(OptionSide::Put, 100.0, 100.0, 1.0, 0.05, 0.0, 0.0),
            Err(ContractError::InvalidVolatility { volatility: 0.0 })
        );
    }
}
