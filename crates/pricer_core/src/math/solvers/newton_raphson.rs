//! Damped and guarded Newton-Raphson root-finding solver.

use num_traits::Float;
use tracing::{debug, trace, warn};

use super::{SolverConfig, SolverState};
use crate::types::SolverError;

/// Outcome of [`NewtonRaphsonSolver::find_root_guarded`].
///
/// Always carries a root estimate; `state` tells whether it is converged
/// or only the best guess reached before the iteration was abandoned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardedRoot<T: Float> {
    /// Converged root, or the last stable guess for aborted searches.
    pub root: T,
    /// Residual `f(root)` from the final evaluation.
    pub residual: T,
    /// Number of Newton updates applied.
    pub iterations: usize,
    /// Terminal state of the search.
    pub state: SolverState,
}

impl<T: Float> GuardedRoot<T> {
    /// Returns `true` if the residual reached the configured tolerance.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.state.is_converged()
    }
}

/// Damped Newton-Raphson root finder with a divergence guard.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)`, with the
/// update shortened to at most `max_step_ratio · |x_n|` (see
/// [`SolverConfig::max_step_ratio`]). A zero
/// slope asks for an unbounded step and is damped like any other, so a
/// flat starting region is crossed in bounded moves instead of a jump.
///
/// Unlike a plain Newton solver it never fails on convergence difficulty:
///
/// - if an update is undefined (NaN) or the damped guess is rejected by
///   the caller's admissibility predicate, the search stops in
///   [`SolverState::AbortedUnstable`] and returns the last admissible guess;
/// - if the iteration cap is reached, it stops in
///   [`SolverState::AbortedMaxIterations`] with the current guess.
///
/// Errors are reserved for an inadmissible starting point and for
/// failures raised by the caller's evaluation closure.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig, SolverState};
/// use pricer_core::types::SolverError;
///
/// // Solve x² - 2 = 0 (find √2) on the positive half-line
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let result = solver
///     .find_root_guarded(
///         |x: f64| Ok::<_, SolverError>((x * x - 2.0, 2.0 * x)),
///         1.0,
///         |x| x > 0.0,
///     )
///     .unwrap();
///
/// assert_eq!(result.state, SolverState::Converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` starting from `x0`, guarding against divergence.
    ///
    /// # Arguments
    ///
    /// * `step` - Evaluates `(f(x), f'(x))` at a guess; may fail with `E`
    /// * `x0` - Initial guess (must be finite and admissible)
    /// * `admissible` - Predicate a new guess must satisfy to be accepted
    ///
    /// # Returns
    ///
    /// * `Ok(GuardedRoot)` in any terminal state
    /// * `Err(SolverError::InvalidInitialGuess)` (converted into `E`) if
    ///   `x0` is non-finite or not admissible
    /// * `Err(e)` if `step` fails
    pub fn find_root_guarded<F, A, E>(
        &self,
        mut step: F,
        x0: T,
        admissible: A,
    ) -> Result<GuardedRoot<T>, E>
    where
        F: FnMut(T) -> Result<(T, T), E>,
        A: Fn(T) -> bool,
        E: From<SolverError>,
    {
        let mut state = SolverState::Initializing;
        trace!(%state, x0 = x0.to_f64().unwrap_or(f64::NAN), "guarded newton");

        if !x0.is_finite() || !admissible(x0) {
            return Err(SolverError::InvalidInitialGuess {
                x: x0.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }

        let tolerance = self.config.tolerance;
        let max_iterations = self.config.max_iterations;
        let max_step_ratio = self.config.max_step_ratio;
        let mut x = x0;
        let mut iterations = 0;
        state = SolverState::Iterating;

        let residual = loop {
            let (residual, derivative) = step(x)?;
            trace!(
                %state,
                iterations,
                x = x.to_f64().unwrap_or(f64::NAN),
                residual = residual.to_f64().unwrap_or(f64::NAN),
                "newton step"
            );

            if residual.abs() <= tolerance {
                state = SolverState::Converged;
                break residual;
            }

            if iterations >= max_iterations {
                state = SolverState::AbortedMaxIterations;
                break residual;
            }

            let newton_step = -residual / derivative;
            iterations += 1;

            if newton_step.is_nan() {
                state = SolverState::AbortedUnstable;
                break residual;
            }

            let limit = max_step_ratio * x.abs();
            let damped = newton_step.max(-limit).min(limit);
            if damped != newton_step {
                trace!(
                    iterations,
                    newton_step = newton_step.to_f64().unwrap_or(f64::NAN),
                    damped = damped.to_f64().unwrap_or(f64::NAN),
                    "step damped"
                );
            }

            let next = x + damped;
            if !next.is_finite() || !admissible(next) {
                state = SolverState::AbortedUnstable;
                break residual;
            }

            x = next;
        };

        let root = x.to_f64().unwrap_or(f64::NAN);
        let residual_f64 = residual.to_f64().unwrap_or(f64::NAN);
        match state {
            SolverState::Converged => {
                debug!(%state, iterations, root, residual = residual_f64, "root found");
            }
            _ => {
                warn!(
                    %state,
                    iterations,
                    root,
                    residual = residual_f64,
                    "newton search abandoned, returning last stable guess"
                );
            }
        }

        Ok(GuardedRoot {
            root: x,
            residual,
            iterations,
            state,
        })
    }
}
