//! Greeks result types.

use std::collections::BTreeMap;
use std::fmt;

/// Identifies one of the five reported sensitivities.
///
/// Ordering follows declaration order, so maps keyed by `GreekKind`
/// iterate as Delta, Gamma, Theta, Vega, Rho.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreekKind {
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// Value change per calendar day
    Theta,
    /// ∂V/∂σ per volatility point
    Vega,
    /// ∂V/∂r per rate point
    Rho,
}

impl GreekKind {
    /// All kinds in reporting order.
    pub const ALL: [GreekKind; 5] = [
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Theta,
        GreekKind::Vega,
        GreekKind::Rho,
    ];

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GreekKind::Delta => "Delta",
            GreekKind::Gamma => "Gamma",
            GreekKind::Theta => "Theta",
            GreekKind::Vega => "Vega",
            GreekKind::Rho => "Rho",
        }
    }
}

impl fmt::Display for GreekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finite-difference sensitivities of one option.
///
/// Values are raw, unrounded. Units:
///
/// - `delta`: per unit of spot
/// - `gamma`: per unit of spot, squared
/// - `theta`: per calendar day (negative when the option decays)
/// - `vega`: per volatility point (0.01)
/// - `rho`: per rate point (0.01)
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::{GreekKind, Greeks};
///
/// let greeks = Greeks { delta: 0.6, gamma: 0.03, theta: -0.02, vega: 0.27, rho: 0.26 };
/// let map = greeks.to_map();
/// let keys: Vec<_> = map.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, ["Delta", "Gamma", "Theta", "Vega", "Rho"]);
/// assert_eq!(map[&GreekKind::Vega], 0.27);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S.
    pub delta: f64,
    /// Gamma: ∂²V/∂S².
    pub gamma: f64,
    /// Theta: value change per calendar day.
    pub theta: f64,
    /// Vega: per volatility point.
    pub vega: f64,
    /// Rho: per rate point.
    pub rho: f64,
}

impl Greeks {
    /// Returns the value for `kind`.
    #[inline]
    pub fn get(&self, kind: GreekKind) -> f64 {
        match kind {
            GreekKind::Delta => self.delta,
            GreekKind::Gamma => self.gamma,
            GreekKind::Theta => self.theta,
            GreekKind::Vega => self.vega,
            GreekKind::Rho => self.rho,
        }
    }

    /// Ordered map with exactly the keys Delta, Gamma, Theta, Vega, Rho.
    pub fn to_map(&self) -> BTreeMap<GreekKind, f64> {
        GreekKind::ALL
            .iter()
            .map(|&kind| (kind, self.get(kind)))
            .collect()
    }

    /// Returns `true` if every value is finite.
    pub fn is_finite(&self) -> bool {
        GreekKind::ALL.iter().all(|&kind| self.get(kind).is_finite())
    }
}
