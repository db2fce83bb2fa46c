//! Implied volatility result type.

use pricer_core::math::solvers::SolverState;

/// Outcome of an implied volatility search.
///
/// Every terminal state carries a usable volatility. Only
/// [`SolverState::Converged`] guarantees the model reprices the target
/// within tolerance; the aborted states return the last stable guess.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolResult {
    /// Annualised volatility as a decimal (0.2 = 20%).
    pub volatility: f64,
    /// Newton updates applied.
    pub iterations: usize,
    /// Terminal solver state.
    pub state: SolverState,
}

impl ImpliedVolResult {
    /// Returns `true` if the search converged.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.state.is_converged()
    }
}
