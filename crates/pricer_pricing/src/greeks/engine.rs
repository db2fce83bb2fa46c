//! Bump-and-revalue Greeks engine.

use pricer_core::types::PricingError;
use pricer_models::instruments::OptionContract;
use pricer_models::models::ValuationModel;
use tracing::{debug, trace, warn};

use super::config::GreeksConfig;
use super::result::Greeks;

/// Days per year used to express theta per calendar day.
const DAYS_PER_YEAR: f64 = 365.0;

/// Scale from a unit change in volatility or rate to one point (0.01).
const PER_POINT: f64 = 100.0;

/// Forward-difference sensitivity estimator.
///
/// Re-prices fresh sibling contracts with one input bumped by `ε` and
/// differences against the base price. Works with any [`ValuationModel`].
///
/// - `delta = (V(S+ε) − V(S)) / ε`
/// - `gamma = (delta(S+ε) − delta(S)) / ε`
/// - `theta = (V(S) − V(T+ε)) / ε / 365`
/// - `vega  = (V(σ+ε) − V(S)) / ε / 100`
/// - `rho   = (V(R+ε) − V(S)) / ε / 100`
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionContract, OptionSide};
/// use pricer_models::models::EquityDividendModel;
/// use pricer_pricing::greeks::GreeksEngine;
///
/// let engine = GreeksEngine::with_defaults(EquityDividendModel);
/// let contract = OptionContract::new(OptionSide::Call, 100.0, 100.0, 0.5, 0.05, 0.0, 0.2).unwrap();
///
/// let greeks = engine.compute(&contract).unwrap();
/// assert!((greeks.delta - 0.5977).abs() < 1e-3);
/// assert!(greeks.gamma > 0.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GreeksEngine<M: ValuationModel> {
    model: M,
    config: GreeksConfig,
}

impl<M: ValuationModel> GreeksEngine<M> {
    /// Creates an engine with the given configuration.
    ///
    /// # Errors
    /// Returns `PricingError::Solver(InvalidConfig)` if the bump is not
    /// positive and finite.
    pub fn new(model: M, config: GreeksConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { model, config })
    }

    /// Creates an engine with the default 1e-5 bump.
    pub fn with_defaults(model: M) -> Self {
        Self {
            model,
            config: GreeksConfig::default(),
        }
    }

    /// The model being differentiated.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &GreeksConfig {
        &self.config
    }

    /// Computes all five Greeks.
    ///
    /// Shares the base price and the spot-bumped prices between delta and
    /// gamma, for six pricings in total.
    ///
    /// # Errors
    /// Any pricing error from the bumped contracts, or
    /// `PricingError::NumericalInstability` if a difference quotient
    /// overflows.
    pub fn compute(&self, contract: &OptionContract) -> Result<Greeks, PricingError> {
        let eps = self.config.bump;
        let base = self.model.price(contract)?;
        let spot_up = contract.with_spot(contract.spot() + eps)?;
        let up = self.model.price(&spot_up)?;
        let up_up = self.price_at_spot(&spot_up, spot_up.spot() + eps)?;

        let delta = (up - base) / eps;
        let delta_up = (up_up - up) / eps;

        let greeks = Greeks {
            delta,
            gamma: (delta_up - delta) / eps,
            theta: self.theta_from(contract, base)?,
            vega: self.vega_from(contract, base)?,
            rho: self.rho_from(contract, base)?,
        };
        if !greeks.is_finite() {
            warn!(model = self.model.name(), ?greeks, "finite differences overflowed");
            return Err(PricingError::NumericalInstability(format!(
                "{} greeks are not finite: {:?}",
                self.model.name(),
                greeks
            )));
        }
        debug!(
            model = self.model.name(),
            delta = greeks.delta,
            gamma = greeks.gamma,
            theta = greeks.theta,
            vega = greeks.vega,
            rho = greeks.rho,
            "greeks computed"
        );
        Ok(greeks)
    }

    /// `(V(S+ε) − V(S)) / ε`
    pub fn delta(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        let base = self.model.price(contract)?;
        let up = self.price_at_spot(contract, contract.spot() + self.config.bump)?;
        Ok((up - base) / self.config.bump)
    }

    /// `(delta(S+ε) − delta(S)) / ε`
    pub fn gamma(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        let bumped = contract.with_spot(contract.spot() + self.config.bump)?;
        let delta = self.delta(contract)?;
        let delta_up = self.delta(&bumped)?;
        Ok((delta_up - delta) / self.config.bump)
    }

    /// `(V(S) − V(T+ε)) / ε / 365`
    pub fn theta(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        let base = self.model.price(contract)?;
        self.theta_from(contract, base)
    }

    /// `(V(σ+ε) − V(S)) / ε / 100`
    pub fn vega(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        let base = self.model.price(contract)?;
        self.vega_from(contract, base)
    }

    /// `(V(R+ε) − V(S)) / ε / 100`
    pub fn rho(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        let base = self.model.price(contract)?;
        self.rho_from(contract, base)
    }

    /// Vega against an already known base price.
    pub(crate) fn vega_from(
        &self,
        contract: &OptionContract,
        base: f64,
    ) -> Result<f64, PricingError> {
        let eps = self.config.bump;
        let bumped = contract.with_volatility(contract.volatility() + eps)?;
        let up = self.model.price(&bumped)?;
        trace!(base, up, "vega bump");
        Ok((up - base) / eps / PER_POINT)
    }

    fn theta_from(&self, contract: &OptionContract, base: f64) -> Result<f64, PricingError> {
        let eps = self.config.bump;
        let bumped = contract.with_time_to_expiry(contract.time_to_expiry() + eps)?;
        let longer = self.model.price(&bumped)?;
        Ok((base - longer) / eps / DAYS_PER_YEAR)
    }

    fn rho_from(&self, contract: &OptionContract, base: f64) -> Result<f64, PricingError> {
        let eps = self.config.bump;
        let bumped = contract.with_rate(contract.rate() + eps)?;
        let up = self.model.price(&bumped)?;
        Ok((up - base) / eps / PER_POINT)
    }

    fn price_at_spot(&self, contract: &OptionContract, spot: f64) -> Result<f64, PricingError> {
        self.model.price(&contract.with_spot(spot)?)
    }
}
