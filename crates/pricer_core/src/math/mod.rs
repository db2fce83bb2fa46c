//! Numerical building blocks.
//!
//! - `solvers`: guarded root finding with configurable tolerance

pub mod solvers;
