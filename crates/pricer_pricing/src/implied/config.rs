//! Configuration for the implied volatility solver.

use pricer_core::math::solvers::SolverConfig;
use pricer_core::types::SolverError;

use crate::greeks::GreeksConfig;

/// Solver settings plus the vega bump used for Newton updates.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `solver.tolerance` | 1e-10 | Stop when `|target − price| <= tolerance` |
/// | `solver.max_iterations` | 100 | Newton updates before giving up |
/// | `solver.max_step_ratio` | 0.5 | Longest volatility update relative to σ |
/// | `greeks.bump` | 1e-5 | Volatility step for the vega estimate |
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::implied::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::default()
///     .with_tolerance(1e-8)
///     .with_max_iterations(50);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.solver.max_iterations, 50);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolConfig {
    /// Tolerance, iteration cap and step damping.
    pub solver: SolverConfig<f64>,
    /// Finite-difference settings for vega.
    pub greeks: GreeksConfig,
}

impl ImpliedVolConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Relaxed tolerance (1e-6) and 50 iterations.
    pub fn fast() -> Self {
        Self {
            solver: SolverConfig::fast(),
            ..Self::default()
        }
    }

    /// Tight tolerance (1e-14) and 500 iterations.
    pub fn high_precision() -> Self {
        Self {
            solver: SolverConfig::high_precision(),
            ..Self::default()
        }
    }

    /// Sets the price tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.solver.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.solver.max_iterations = max_iterations;
        self
    }

    /// Sets the longest volatility update as a fraction of the current σ.
    pub fn with_max_step_ratio(mut self, max_step_ratio: f64) -> Self {
        self.solver.max_step_ratio = max_step_ratio;
        self
    }

    /// Sets the vega bump.
    pub fn with_bump(mut self, bump: f64) -> Self {
        self.greeks.bump = bump;
        self
    }

    /// Validates both parts.
    pub fn validate(&self) -> Result<(), SolverError> {
        self.solver.validate()?;
        self.greeks.validate()
    }
}
