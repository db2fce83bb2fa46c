//! Root-finding solvers for numerical computation.
//!
//! This module provides the damped, guarded Newton-Raphson solver used for
//! implied volatility inversion.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: damped Newton steps using derivatives; its
//!   divergence guard and iteration cap turn failure modes into
//!   best-effort terminal states ([`SolverState`])
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//! - `max_step_ratio`: Longest update as a fraction of the guess (default: 0.5)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//! use pricer_core::types::SolverError;
//!
//! // Solve x³ - x - 2 = 0
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let f = |x: f64| x * x * x - x - 2.0;
//!
//! let result = solver
//!     .find_root_guarded(
//!         |x| Ok::<_, SolverError>((f(x), 3.0 * x * x - 1.0)),
//!         1.5,
//!         |x| x.is_finite(),
//!     )
//!     .unwrap();
//! assert!(result.is_converged());
//! assert!(f(result.root).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;
mod state;

// Re-export public types at module level
pub use config::SolverConfig;
pub use newton_raphson::{GuardedRoot, NewtonRaphsonSolver};
pub use state::SolverState;
