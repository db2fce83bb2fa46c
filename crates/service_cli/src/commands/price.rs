//! Price command implementation
//!
//! Prices one option and reports its Greeks.

use std::collections::BTreeMap;

use clap::Args;
use pricer_models::instruments::OptionSide;
use pricer_models::models::{ModelKind, ValuationModel};
use pricer_pricing::greeks::{GreekKind, GreeksEngine};
use serde::Serialize;
use tracing::info;

use super::{volatility_from_percent, MarketArgs, OutputFormat};
use crate::config::CliConfig;
use crate::format::{round4, table, usd};
use crate::Result;

/// Arguments for `optpricer price`
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Volatility in percent
    #[arg(short, long)]
    pub vol: f64,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Result of the price command
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub underlying: ModelKind,
    pub side: OptionSide,
    pub price: f64,
    pub price_usd: String,
    pub greeks: BTreeMap<GreekKind, f64>,
}

impl PriceReport {
    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Table => {
                let mut rows = vec![
                    ("Underlying".to_string(), self.underlying.to_string()),
                    ("Side".to_string(), self.side.to_string()),
                    ("Price".to_string(), self.price_usd.clone()),
                ];
                rows.extend(
                    self.greeks
                        .iter()
                        .map(|(kind, value)| (kind.to_string(), format!("{:.4}", value))),
                );
                Ok(table(&rows))
            }
        }
    }
}

/// Prices the option and computes its Greeks.
pub fn execute(args: &PriceArgs, config: &CliConfig) -> Result<PriceReport> {
    let kind = args.market.underlying;
    let contract = args
        .market
        .terms()?
        .with_volatility(volatility_from_percent(args.vol))?;
    info!(model = kind.name(), side = %contract.side(), "Pricing option");

    let engine = GreeksEngine::new(kind, config.greeks_config())?;
    let price = kind.price(&contract)?;
    let greeks = engine.compute(&contract)?;

    Ok(PriceReport {
        underlying: kind,
        side: contract.side(),
        price,
        price_usd: usd(price),
        greeks: greeks
            .to_map()
            .into_iter()
            .map(|(kind, value)| (kind, round4(value)))
            .collect(),
    })
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let report = execute(args, config)?;
    println!("{}", report.render(args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::market;

    fn args(underlying: ModelKind, side: OptionSide, format: OutputFormat) -> PriceArgs {
        PriceArgs {
            market: market(underlying, side),
            vol: 20.0,
            format,
        }
    }

    #[test]
    fn test_reference_call() {
        let report = execute(
            &args(ModelKind::EquityDividend, OptionSide::Call, OutputFormat::Table),
            &CliConfig::default(),
        )
        .unwrap();

        assert!((report.price - 6.8887).abs() < 1e-4);
        assert_eq!(report.price_usd, "$6.889");
        assert_eq!(report.greeks.len(), 5);
        assert_eq!(report.greeks[&GreekKind::Delta], 0.5977);
        assert_eq!(report.greeks[&GreekKind::Vega], 0.2736);
    }

    #[test]
    fn test_table_output() {
        let report = execute(
            &args(ModelKind::EquityDividend, OptionSide::Put, OutputFormat::Table),
            &CliConfig::default(),
        )
        .unwrap();
        let rendered = report.render(OutputFormat::Table).unwrap();

        assert!(rendered.contains("$4.420"));
        assert!(rendered.contains("-0.4023"));
        for kind in GreekKind::ALL {
            assert!(rendered.contains(kind.as_str()));
        }
    }

    #[test]
    fn test_json_output() {
        let report = execute(
            &args(ModelKind::Futures, OptionSide::Call, OutputFormat::Json),
            &CliConfig::default(),
        )
        .unwrap();
        let rendered = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["underlying"], "futures");
        assert_eq!(value["side"], "Call");
        assert!(value["greeks"]["Gamma"].is_number());
        assert_eq!(value["greeks"].as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_rejects_zero_volatility() {
        let mut bad = args(ModelKind::Fx, OptionSide::Call, OutputFormat::Table);
        bad.vol = 0.0;
        assert!(execute(&bad, &CliConfig::default()).is_err());
    }
}
