//! optpricer - Command Line Option Valuation
//!
//! Operational entry point for the closed-form option valuation engine.
//!
//! # Commands
//!
//! - `optpricer price` - Price an option and report its Greeks
//! - `optpricer iv` - Back out implied volatility from a quoted price
//!
//! # Units
//!
//! Rates, carry and volatility are entered in percent and time to expiry in
//! calendar days, as they are usually quoted. Conversion to decimals and
//! years happens once, in the `commands` module.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only parses input, loads
//! configuration and formats output; all numerics live in the pricer crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod format;

pub use error::{CliError, Result};

use commands::iv::IvArgs;
use commands::price::PriceArgs;
use config::{build_config, CliArgs, LogLevel};

/// Closed-form option pricing, Greeks and implied volatility
#[derive(Parser)]
#[command(name = "optpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Implied volatility convergence tolerance
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Implied volatility iteration cap
    #[arg(long, global = true)]
    max_iterations: Option<usize>,

    /// Finite-difference step for Greeks
    #[arg(long, global = true)]
    bump: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an option and report Delta, Gamma, Theta, Vega and Rho
    Price(PriceArgs),

    /// Solve for the volatility that reproduces an observed price
    Iv(IvArgs),
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level,
            tolerance: cli.tolerance,
            max_iterations: cli.max_iterations,
            bump: cli.bump,
        }
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level);
    debug!(
        log_level = %config.log_level,
        tolerance = config.tolerance,
        max_iterations = config.max_iterations,
        bump = config.bump,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config),
        Commands::Iv(args) => commands::iv::run(args, &config),
    }
}
