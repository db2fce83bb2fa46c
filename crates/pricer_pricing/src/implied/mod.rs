//! Implied volatility.
//!
//! This module provides:
//! - [`ImpliedVolSolver`]: damped, guarded Newton-Raphson inversion of any
//!   [`ValuationModel`](pricer_models::models::ValuationModel)
//! - [`ImpliedVolConfig`]: solver settings and vega bump
//! - [`ImpliedVolResult`]: volatility with its terminal solver state

mod config;
mod result;
mod solver;

pub use config::ImpliedVolConfig;
pub use result::ImpliedVolResult;
pub use solver::{initial_guess, ImpliedVolSolver};
