//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use pricer_core::math::solvers::SolverConfig;
use pricer_pricing::greeks::GreeksConfig;
use pricer_pricing::implied::ImpliedVolConfig;

const ENV_LOG_LEVEL: &str = "OPTPRICER_LOG_LEVEL";
const ENV_TOLERANCE: &str = "OPTPRICER_TOLERANCE";
const ENV_MAX_ITERATIONS: &str = "OPTPRICER_MAX_ITERATIONS";
const ENV_BUMP: &str = "OPTPRICER_BUMP";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid numerical settings: {0}")]
    InvalidSettings(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by `--log-level` and `OPTPRICER_LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Runtime settings for the `optpricer` binary
///
/// Log output goes to stderr; `warn` by default keeps stdout clean for
/// table and JSON output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Implied volatility convergence tolerance on price
    pub tolerance: f64,
    /// Implied volatility iteration cap
    pub max_iterations: usize,
    /// Finite-difference step for Greeks and vega
    pub bump: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        let solver = SolverConfig::<f64>::default();
        Self {
            log_level: LogLevel::default(),
            tolerance: solver.tolerance,
            max_iterations: solver.max_iterations,
            bump: GreeksConfig::default().bump,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from `OPTPRICER_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(value) = lookup(ENV_TOLERANCE) {
            self.tolerance = parse_value(ENV_TOLERANCE, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_ITERATIONS) {
            self.max_iterations = parse_value(ENV_MAX_ITERATIONS, &value)?;
        }
        if let Some(value) = lookup(ENV_BUMP) {
            self.bump = parse_value(ENV_BUMP, &value)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(tolerance) = cli.tolerance {
            self.tolerance = tolerance;
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.max_iterations = max_iterations;
        }
        if let Some(bump) = cli.bump {
            self.bump = bump;
        }
    }

    /// Greeks settings derived from this configuration
    pub fn greeks_config(&self) -> GreeksConfig {
        GreeksConfig::new().with_bump(self.bump)
    }

    /// Implied volatility settings derived from this configuration
    pub fn implied_vol_config(&self) -> ImpliedVolConfig {
        ImpliedVolConfig::new()
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
            .with_bump(self.bump)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.implied_vol_config()
            .validate()
            .map_err(|e| ConfigError::InvalidSettings(e.to_string()))
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Overrides collected from command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Tolerance override
    pub tolerance: Option<f64>,
    /// Iteration cap override
    pub max_iterations: Option<usize>,
    /// Bump override
    pub bump: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
