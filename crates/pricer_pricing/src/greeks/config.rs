//! Configuration for finite-difference Greeks.

use pricer_core::types::SolverError;

/// Default perturbation step.
pub const DEFAULT_BUMP: f64 = 1e-5;

/// Configuration for finite-difference Greeks.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `bump` | 1e-5 | Absolute step applied to spot, time, volatility and rate |
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::GreeksConfig;
///
/// let config = GreeksConfig::default();
/// assert_eq!(config.bump, 1e-5);
///
/// let custom = GreeksConfig::new().with_bump(1e-4);
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksConfig {
    /// Forward-difference step (default: 1e-5).
    pub bump: f64,
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self { bump: DEFAULT_BUMP }
    }
}

impl GreeksConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the perturbation step.
    pub fn with_bump(mut self, bump: f64) -> Self {
        self.bump = bump;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfig` unless the bump is positive and
    /// finite.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.bump.is_finite() || self.bump <= 0.0 {
            return Err(SolverError::InvalidConfig(format!(
                "bump must be positive and finite, got {}",
                self.bump
            )));
        }
        Ok(())
    }
}
