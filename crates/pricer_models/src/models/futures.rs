//! Options on futures.

use pricer_core::types::PricingError;

use super::{finite_price, ValuationModel};
use crate::analytical::black76;
use crate::instruments::OptionContract;

/// Black-76 model. The contract's `spot` is the futures price; its `carry`
/// field is ignored because the cost of carry equals the risk-free rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FuturesModel;

impl ValuationModel for FuturesModel {
    fn name(&self) -> &'static str {
        "futures"
    }

    #[inline]
    fn carry_rate(&self, contract: &OptionContract) -> f64 {
        contract.rate()
    }

    fn price(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        let value = black76::price(
            contract.side(),
            contract.spot(),
            contract.strike(),
            contract.time_to_expiry(),
            contract.rate(),
            contract.volatility(),
        )?;
        finite_price(self.name(), value)
    }
}
