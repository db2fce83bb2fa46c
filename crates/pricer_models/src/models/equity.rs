//! Equity options with a continuous dividend yield.

use pricer_core::types::PricingError;

use super::{finite_price, ValuationModel};
use crate::analytical::black_scholes;
use crate::instruments::OptionContract;

/// Black-Scholes-Merton model; the contract's `carry` is the dividend
/// yield `q`. With `q = 0` this is plain Black-Scholes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EquityDividendModel;

impl ValuationModel for EquityDividendModel {
    fn name(&self) -> &'static str {
        "equity"
    }

    #[inline]
    fn carry_rate(&self, contract: &OptionContract) -> f64 {
        contract.carry()
    }

    fn price(&self, contract: &OptionContract) -> Result<f64, PricingError> {
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
