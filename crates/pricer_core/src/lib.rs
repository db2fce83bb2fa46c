//! # pricer_core: Numerical Foundation for the Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Damped, guarded Newton-Raphson root finding (`math::solvers`)
//! - Solver configuration and lifecycle states (`SolverConfig`, `SolverState`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - tracing: Structured diagnostics for solver progress
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig, SolverState};
//! use pricer_core::types::SolverError;
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::fast());
//! let result = solver
//!     .find_root_guarded(|x: f64| Ok::<_, SolverError>((x * x - 4.0, 2.0 * x)), 1.0, |x| x > 0.0)
//!     .unwrap();
//!
//! assert_eq!(result.state, SolverState::Converged);
//! assert!((result.root - 2.0).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig`, `SolverState` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
