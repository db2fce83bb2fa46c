//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Inputs arrive in
//! quoting units (percent, calendar days) and are converted here, once,
//! before reaching the engines.

use std::str::FromStr;

use clap::Args;
use pricer_models::instruments::{ContractTerms, OptionSide, ParseEnumError};
use pricer_models::models::ModelKind;

use crate::Result;

pub mod iv;
pub mod price;

const DAYS_PER_YEAR: f64 = 365.0;
const PERCENT: f64 = 100.0;

/// Contract inputs shared by every command
#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    /// Underlying type (stock, futures, fx)
    #[arg(short, long, default_value = "stock")]
    pub underlying: ModelKind,

    /// Option side (call, put)
    #[arg(short, long, default_value = "call")]
    pub side: OptionSide,

    /// Spot price (futures price for futures, exchange rate for FX)
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Calendar days to expiry
    #[arg(short, long)]
    pub days: f64,

    /// Risk-free rate in percent
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Dividend yield (stock) or foreign rate (FX) in percent; ignored for futures
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub carry: f64,
}

impl MarketArgs {
    /// Converts quoting units into validated contract terms.
    pub fn terms(&self) -> Result<ContractTerms> {
        Ok(ContractTerms::new(
            self.side,
            self.spot,
            self.strike,
            self.days / DAYS_PER_YEAR,
            self.rate / PERCENT,
            self.carry / PERCENT,
        )?)
    }
}

/// Converts a volatility quoted in percent to a decimal.
pub fn volatility_from_percent(vol: f64) -> f64 {
    vol / PERCENT
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseEnumError {
                kind: "output format",
                value: s.to_string(),
            }),
        }
    }
}
