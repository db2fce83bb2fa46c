//! # Pricer Pricing (Layer 3: Engines)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing sits on top of the closed-form models in `pricer_models`
//! and provides:
//! - Finite-difference Greeks for any valuation model (`greeks`)
//! - Implied volatility by damped Newton-Raphson (`implied`)
//! - One-call facade functions with default configuration
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{ContractTerms, OptionSide};
//! use pricer_models::models::ModelKind;
//!
//! let terms = ContractTerms::new(OptionSide::Call, 100.0, 100.0, 0.5, 0.05, 0.0).unwrap();
//! let contract = terms.with_volatility(0.2).unwrap();
//!
//! let price = pricer_pricing::price(ModelKind::EquityDividend, &contract).unwrap();
//! let greeks = pricer_pricing::greeks(ModelKind::EquityDividend, &contract).unwrap();
//! let iv = pricer_pricing::implied_volatility(ModelKind::EquityDividend, &terms, price).unwrap();
//!
//! assert!((price - 6.8887).abs() < 1e-4);
//! assert!(greeks.delta > 0.5);
//! assert!((iv.volatility - 0.2).abs() < 1e-6);
//! ```
//!
//! ## Thread Safety
//!
//! Engines hold only `Copy` configuration and a stateless model, so they
//! are `Send + Sync` and can be shared across threads without locking.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for `Greeks`, `GreekKind`, `ImpliedVolResult`
//!   and the configuration types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod greeks;
pub mod implied;

use pricer_core::types::PricingError;
use pricer_models::instruments::{ContractTerms, OptionContract};
use pricer_models::models::{ModelKind, ValuationModel};

use greeks::{Greeks, GreeksEngine};
use implied::{ImpliedVolResult, ImpliedVolSolver};

/// Prices `contract` under the model selected by `kind`.
pub fn price(kind: ModelKind, contract: &OptionContract) -> Result<f64, PricingError> {
    kind.price(contract)
}

/// Computes Delta, Gamma, Theta, Vega and Rho with the default 1e-5 bump.
pub fn greeks(kind: ModelKind, contract: &OptionContract) -> Result<Greeks, PricingError> {
    GreeksEngine::with_defaults(kind).compute(contract)
}

/// Solves for the volatility that reprices `terms` at `target`, with the
/// default tolerance (1e-10) and iteration cap (100).
pub fn implied_volatility(
    kind: ModelKind,
    terms: &ContractTerms,
    target: f64,
) -> Result<ImpliedVolResult, PricingError> {
    ImpliedVolSolver::with_defaults(kind).solve(terms, target)
}
