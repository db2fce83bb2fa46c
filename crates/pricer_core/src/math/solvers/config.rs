//! Solver configuration types.

use num_traits::Float;

use crate::types::SolverError;

/// Configuration for root-finding algorithms.
///
/// Tolerance and iteration cap belong to the solver instance, so callers
/// needing different precision construct different configurations rather
/// than relying on a per-call-site constant.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
///     max_step_ratio: 0.25,
/// };
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops when `|f(x)| <= tolerance`.
    pub tolerance: T,

    /// Maximum number of Newton updates before giving up.
    ///
    /// Reaching this limit is not an error: the solver returns its last
    /// guess in [`SolverState::AbortedMaxIterations`](super::SolverState).
    pub max_iterations: usize,

    /// Largest update accepted per iteration, as a fraction of `|x|`.
    ///
    /// Newton steps longer than `max_step_ratio · |x|` are shortened to
    /// that length in the same direction. Values below 1 keep a positive
    /// guess positive.
    pub max_step_ratio: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration with sensible values.
    ///
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    /// - `max_step_ratio`: 0.5
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap_or_else(T::epsilon),
            max_iterations: 100,
            max_step_ratio: default_step_ratio(),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    /// Use [`SolverConfig::validate`] for a fallible check of values
    /// coming from configuration files.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            max_step_ratio: default_step_ratio(),
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerance (1e-14) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap_or_else(T::epsilon),
            max_iterations: 500,
            max_step_ratio: default_step_ratio(),
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerance (1e-6) and fewer iterations (50).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap_or_else(T::epsilon),
            max_iterations: 50,
            max_step_ratio: default_step_ratio(),
        }
    }

    /// Sets the tolerance.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the step damping ratio.
    pub fn with_max_step_ratio(mut self, max_step_ratio: T) -> Self {
        self.max_step_ratio = max_step_ratio;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidConfig` if the tolerance is not a
    /// positive finite number, the iteration cap is zero, or the step
    /// ratio is not a positive finite number.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.tolerance <= T::zero() || !self.tolerance.is_finite() {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        if self.max_step_ratio <= T::zero() || !self.max_step_ratio.is_finite() {
            return Err(SolverError::InvalidConfig(format!(
                "max_step_ratio must be positive and finite, got {}",
                self.max_step_ratio.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}

/// Half of the current guess.
fn default_step_ratio<T: Float>() -> T {
    T::from(0.5).unwrap_or_else(T::one)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.max_step_ratio, 0.5);
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12, 200);
        assert!((config.tolerance - 1e-12).abs() < 1e-17);
        assert_eq!(config.max_iterations, 200);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_config_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-10, 0);
    }

    #[test]
    fn test_high_precision_config() {
        let config: SolverConfig<f64> = SolverConfig::high_precision();
        assert!(config.tolerance < 1e-12);
        assert!(config.max_iterations >= 500);
    }

    #[test]
    fn test_fast_config() {
        let config: SolverConfig<f64> = SolverConfig::fast();
        assert!(config.tolerance > 1e-8);
        assert!(config.max_iterations <= 50);
    }

    #[test]
    fn test_builder_methods() {
        let config: SolverConfig<f64> = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(25)
            .with_max_step_ratio(0.1);
        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, 25);
        assert_eq!(config.max_step_ratio, 0.1);
    }

    #[test]
    fn test_validate_accepts_presets() {
        assert!(SolverConfig::<f64>::default().validate().is_ok());
        assert!(SolverConfig::<f64>::fast().validate().is_ok());
        assert!(SolverConfig::<f64>::high_precision().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_tol = SolverConfig::default().with_tolerance(0.0_f64);
        assert!(matches!(
            zero_tol.validate(),
            Err(SolverError::InvalidConfig(_))
        ));

        let nan_tol = SolverConfig::default().with_tolerance(f64::NAN);
        assert!(nan_tol.validate().is_err());

        let no_iterations = SolverConfig::<f64>::default().with_max_iterations(0);
        assert!(no_iterations.validate().is_err());

        let no_damping = SolverConfig::default().with_max_step_ratio(0.0_f64);
        assert!(no_damping.validate().is_err());

        let infinite_damping = SolverConfig::default().with_max_step_ratio(f64::INFINITY);
        assert!(infinite_damping.validate().is_err());
    }

    #[test]
    fn test_f32_default_is_representable() {
        // 1e-10 is a normal f32, so no epsilon fallback
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!((config.tolerance - 1e-10_f32).abs() < 1e-15);
        assert!(config.validate().is_ok());
    }
}
