//! Finite-difference Greeks.
//!
//! This module provides:
//! - [`GreeksEngine`]: bump-and-revalue estimator generic over any
//!   [`ValuationModel`](pricer_models::models::ValuationModel)
//! - [`GreeksConfig`]: perturbation step
//! - [`Greeks`] and [`GreekKind`]: the five sensitivities

mod config;
mod engine;
mod result;

pub use config::{GreeksConfig, DEFAULT_BUMP};
pub use engine::GreeksEngine;
pub use result::{GreekKind, Greeks};

#[cfg(test)]
mod tests;
