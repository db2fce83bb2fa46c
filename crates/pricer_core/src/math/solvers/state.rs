//! Lifecycle states of the guarded Newton-Raphson iteration.

use std::fmt;

/// State of a guarded root search.
///
/// ```text
/// Initializing ──► Iterating ──┬──► Converged
///                              ├──► AbortedUnstable
///                              └──► AbortedMaxIterations
/// ```
///
/// Every terminal state carries a root estimate. Only `Converged`
/// guarantees the residual is within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverState {
    /// Initial guess computed, not yet evaluated.
    Initializing,
    /// Newton updates in progress.
    Iterating,
    /// Residual within tolerance.
    Converged,
    /// A Newton update left the admissible region; last stable guess kept.
    AbortedUnstable,
    /// Iteration cap reached; last guess kept.
    AbortedMaxIterations,
}

impl SolverState {
    /// Returns `true` for states that end the iteration.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SolverState::Converged
                | SolverState::AbortedUnstable
                | SolverState::AbortedMaxIterations
        )
    }

    /// Returns `true` only for [`SolverState::Converged`].
    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, SolverState::Converged)
    }
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverState::Initializing => "initializing",
            SolverState::Iterating => "iterating",
            SolverState::Converged => "converged",
            SolverState::AbortedUnstable => "aborted (unstable)",
            SolverState::AbortedMaxIterations => "aborted (max iterations)",
        };
        f.write_str(name)
    }
}
