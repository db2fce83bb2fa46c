//! Closed-form pricing primitives for European options.
//!
//! This module provides:
//! - Standard normal CDF and PDF
//! - The `d1`/`d2` terms shared by every model
//! - Black-Scholes with a continuous yield (equities and Garman-Kohlhagen FX)
//! - Black-76 for options on futures

pub mod black76;
pub mod black_scholes;
pub mod d1d2;
pub mod distributions;

// Re-export main types at module level
pub use d1d2::D1D2;
pub use distributions::{norm_cdf, norm_pdf};
