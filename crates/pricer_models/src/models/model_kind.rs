//! Static dispatch enum for valuation models.
//!
//! `ModelKind` picks a model at runtime (for example from a command-line
//! flag) while keeping every call a `match` over concrete unit structs,
//! with no trait objects involved.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{ModelKind, ValuationModel};
//!
//! let kind: ModelKind = "Futures".parse().unwrap();
//! assert_eq!(kind, ModelKind::Futures);
//! assert_eq!(kind.name(), "futures");
//! ```

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

use super::{EquityDividendModel, FuturesModel, FxModel, ValuationModel};
use crate::instruments::{OptionContract, ParseEnumError};

/// Underlying asset class, selecting the valuation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModelKind {
    /// Stock or index paying a continuous dividend yield.
    EquityDividend,
    /// Futures contract.
    Futures,
    /// Currency pair.
    Fx,
}

impl ModelKind {
    /// All variants, in display order.
    pub const ALL: [ModelKind; 3] = [ModelKind::EquityDividend, ModelKind::Futures, ModelKind::Fx];
}

impl ValuationModel for ModelKind {
    fn name(&self) -> &'static str {
        match self {
            ModelKind::EquityDividend => EquityDividendModel.name(),
            ModelKind::Futures => FuturesModel.name(),
            ModelKind::Fx => FxModel.name(),
        }
    }

    fn carry_rate(&self, contract: &OptionContract) -> f64 {
        match self {
            ModelKind::EquityDividend => EquityDividendModel.carry_rate(contract),
            ModelKind::Futures => FuturesModel.carry_rate(contract),
            ModelKind::Fx => FxModel.carry_rate(contract),
        }
    }

    fn price(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        match self {
            ModelKind::EquityDividend => EquityDividendModel.price(contract),
            ModelKind::Futures => FuturesModel.price(contract),
            ModelKind::Fx => FxModel.price(contract),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equity" | "stock" => Ok(ModelKind::EquityDividend),
            "futures" | "future" => Ok(ModelKind::Futures),
            "fx" | "currency" => Ok(ModelKind::Fx),
            _ => Err(ParseEnumError {
                kind: "underlying",
                value: s.to_string(),
            }),
        }
    }
}
