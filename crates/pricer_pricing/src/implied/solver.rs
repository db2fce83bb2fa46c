//! Damped Newton-Raphson implied volatility solver.

use pricer_core::math::solvers::NewtonRaphsonSolver;
use pricer_core::types::{PricingError, SolverError};
use pricer_models::instruments::ContractTerms;
use pricer_models::models::ValuationModel;
use tracing::{debug, warn};

use super::config::ImpliedVolConfig;
use super::result::ImpliedVolResult;
use crate::greeks::GreeksEngine;

/// √(2π), rounded as in the Brenner-Subrahmanyam approximation.
const SQRT_2PI_APPROX: f64 = 2.5066;

/// Brenner-Subrahmanyam at-the-money estimate, `√(2π/T) · target / S`.
#[inline]
pub fn initial_guess(terms: &ContractTerms, target: f64) -> f64 {
    SQRT_2PI_APPROX / terms.time_to_expiry().sqrt() * target / terms.spot()
}

/// Inverts a [`ValuationModel`] for volatility.
///
/// Starting from [`initial_guess`], each step reprices the contract and
/// applies `σ' = σ − (price − target) / (vega · 100)`, with vega taken from
/// the [`GreeksEngine`] (per volatility point, hence the factor 100).
/// The update is damped to at most `max_step_ratio · σ` (half of σ by
/// default). Away from the money the starting guess often sits where
/// vega is nearly zero, and an undamped step would throw σ out by
/// orders of magnitude.
///
/// The search never fails for numerical reasons. A damped step that
/// would still make the volatility non-positive or non-finite stops the
/// search in `AbortedUnstable` with the last stable guess, and hitting
/// the iteration cap stops it in `AbortedMaxIterations`.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{ContractTerms, OptionSide};
/// use pricer_models::models::FuturesModel;
/// use pricer_pricing::implied::ImpliedVolSolver;
///
/// let solver = ImpliedVolSolver::with_defaults(FuturesModel);
/// let terms = ContractTerms::new(OptionSide::Put, 100.0, 95.0, 0.75, 0.04, 0.0).unwrap();
///
/// let result = solver.solve(&terms, 7.542266304328234).unwrap();
/// assert!(result.is_converged());
/// assert!((result.volatility - 0.3).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ImpliedVolSolver<M: ValuationModel> {
    engine: GreeksEngine<M>,
    config: ImpliedVolConfig,
}

impl<M: ValuationModel> ImpliedVolSolver<M> {
    /// Creates a solver with the given configuration.
    ///
    /// # Errors
    /// Returns `PricingError::Solver(InvalidConfig)` for a non-positive
    /// tolerance or bump, or a zero iteration cap.
    pub fn new(model: M, config: ImpliedVolConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self {
            engine: GreeksEngine::new(model, config.greeks)?,
            config,
        })
    }

    /// Creates a solver with default tolerance (1e-10), cap (100) and bump (1e-5).
    pub fn with_defaults(model: M) -> Self {
        Self {
            engine: GreeksEngine::with_defaults(model),
            config: ImpliedVolConfig::default(),
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// The model being inverted.
    pub fn model(&self) -> &M {
        self.engine.model()
    }

    /// Finds the volatility at which the model prices `terms` at `target`.
    ///
    /// # Errors
    /// - `SolverError::InvalidTarget` if `target` is not positive and finite
    /// - `SolverError::InvalidInitialGuess` if the starting estimate is not
    ///   a valid volatility
    /// - `PricingError::NumericalInstability` if the model itself produces
    ///   a non-finite price
    pub fn solve(
        &self,
        terms: &ContractTerms,
        target: f64,
    ) -> Result<ImpliedVolResult, PricingError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(SolverError::InvalidTarget { target }.into());
        }

        let model = self.engine.model();
        let guess = initial_guess(terms, target);
        debug!(
            model = model.name(),
            side = %terms.side(),
            target,
            guess,
            "implied volatility search"
        );

        let newton = NewtonRaphsonSolver::new(self.config.solver);
        let root = newton.find_root_guarded(
            |sigma| {
                let contract = terms.with_volatility(sigma)?;
                let price = model.price(&contract)?;
                let vega = self.engine.vega_from(&contract, price)?;
                Ok::<_, PricingError>((price - target, vega * 100.0))
            },
            guess,
            |sigma| sigma.is_finite() && sigma > 0.0,
        )?;

        if !root.is_converged() {
            warn!(
                model = model.name(),
                target,
                volatility = root.root,
                state = %root.state,
                "implied volatility did not converge"
            );
        }

        Ok(ImpliedVolResult {
            volatility: root.root,
            iterations: root.iterations,
            state: root.state,
        })
    }
}
