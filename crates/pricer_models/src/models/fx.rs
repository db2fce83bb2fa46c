//! FX options.

use pricer_core::types::PricingError;

use super::{finite_price, ValuationModel};
use crate::analytical::black_scholes;
use crate::instruments::OptionContract;

/// Garman-Kohlhagen model. `spot` is the exchange rate in domestic units
/// per foreign unit, `rate` the domestic rate and `carry` the foreign rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FxModel;

impl ValuationModel for FxModel {
    fn name(&self) -> &'static str {
        "fx"
    }

    #[inline]
    fn carry_rate(&self, contract: &OptionContract) -> f64 {
        contract.carry()
    }

    fn price(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        // Same algebra as a dividend yield, with q -> rf
        let value = black_scholes::price(
            contract.side(),
            contract.spot(),
            contract.strike(),
            contract.time_to_expiry(),
            contract.rate(),
            contract.carry(),
            contract.volatility(),
        )?;
        finite_price(self.name(), value)
    }
}
