//! Implied volatility command implementation
//!
//! Backs out the volatility that reproduces a quoted option price.

use clap::Args;
use pricer_core::math::solvers::SolverState;
use pricer_models::instruments::OptionSide;
use pricer_models::models::{ModelKind, ValuationModel};
use pricer_pricing::implied::ImpliedVolSolver;
use serde::Serialize;
use tracing::{info, warn};

use super::{MarketArgs, OutputFormat};
use crate::config::CliConfig;
use crate::format::{percent, table, usd};
use crate::Result;

/// Arguments for `optpricer iv`
#[derive(Args, Debug, Clone)]
pub struct IvArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Observed option price
    #[arg(short, long)]
    pub price: f64,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Result of the iv command
#[derive(Debug, Clone, Serialize)]
pub struct IvReport {
    pub underlying: ModelKind,
    pub side: OptionSide,
    pub target_price: f64,
    pub implied_volatility: f64,
    pub implied_volatility_pct: String,
    pub state: SolverState,
    pub iterations: usize,
}

impl IvReport {
    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Table => Ok(table(&[
                ("Underlying".to_string(), self.underlying.to_string()),
                ("Side".to_string(), self.side.to_string()),
                ("Target Price".to_string(), usd(self.target_price)),
                ("Implied Vol".to_string(), self.implied_volatility_pct.clone()),
                ("State".to_string(), self.state.to_string()),
                ("Iterations".to_string(), self.iterations.to_string()),
            ])),
        }
    }
}

/// Solves for implied volatility.
///
/// A search that stops without converging still produces a report; the
/// state field tells the caller how far to trust the volatility.
pub fn execute(args: &IvArgs, config: &CliConfig) -> Result<IvReport> {
    let kind = args.market.underlying;
    let terms = args.market.terms()?;
    info!(
        model = kind.name(),
        side = %terms.side(),
        target = args.price,
        "Solving implied volatility"
    );

    let solver = ImpliedVolSolver::new(kind, config.implied_vol_config())?;
    let result = solver.solve(&terms, args.price)?;
    if !result.is_converged() {
        warn!(state = %result.state, "Reporting last stable volatility");
    }

    Ok(IvReport {
        underlying: kind,
        side: terms.side(),
        target_price: args.price,
        implied_volatility: result.volatility,
        implied_volatility_pct: percent(result.volatility),
        state: result.state,
        iterations: result.iterations,
    })
}

/// Run the iv command
pub fn run(args: &IvArgs, config: &CliConfig) -> Result<()> {
    let report = execute(args, config)?;
    println!("{}", report.render(args.format)?);
    Ok(())
}
