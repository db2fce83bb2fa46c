//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing, sensitivity and implied volatility operations
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Only invalid inputs surface
/// here; solver difficulties are reported through
/// [`SolverState`](crate::math::solvers::SolverState) instead.
///
/// # Variants
/// - `InvalidInput`: Contract or market input violates a domain invariant
/// - `NumericalInstability`: A formula produced a non-finite value
/// - `Solver`: Root-finder rejected its inputs or configuration
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Solver input or configuration error
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Root-finding solver errors.
///
/// These cover inputs the solver cannot start from. Divergence and
/// non-convergence are not errors: the guarded Newton-Raphson solver
/// reports them as terminal states with a best-effort root.
///
/// # Variants
/// - `InvalidInitialGuess`: Starting point is not admissible
/// - `InvalidTarget`: Target value is not a usable finite number
/// - `InvalidConfig`: Tolerance, iteration cap or bump size is out of range
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::InvalidInitialGuess { x: -0.5 };
/// assert!(format!("{}", err).contains("-0.5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Initial guess rejected by the admissibility check.
    #[error("Initial guess x = {x} is not admissible")]
    InvalidInitialGuess {
        /// The rejected initial guess
        x: f64,
    },

    /// Target value is non-finite or outside the solvable range.
    #[error("Invalid target value: {target}")]
    InvalidTarget {
        /// The rejected target
        target: f64,
    },

    /// Invalid solver configuration.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}
