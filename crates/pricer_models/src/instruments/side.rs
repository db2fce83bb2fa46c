//! Option side (call or put).

use std::fmt;
use std::str::FromStr;

use super::error::ParseEnumError;

/// Whether the option grants the right to buy or to sell.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionSide;
///
/// let side: OptionSide = "Call".parse().unwrap();
/// assert!(side.is_call());
/// assert_eq!(side.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionSide::Put.intrinsic(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionSide {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionSide {
    /// Returns `true` for [`OptionSide::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionSide::Call)
    }

    /// +1 for calls, -1 for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionSide::Call => 1.0,
            OptionSide::Put => -1.0,
        }
    }

    /// Payoff at expiry: `max(S - K, 0)` for calls, `max(K - S, 0)` for puts.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        (self.sign() * (spot - strike)).max(0.0)
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionSide::Call => f.write_str("Call"),
            OptionSide::Put => f.write_str("Put"),
        }
    }
}

impl FromStr for OptionSide {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionSide::Call),
            "put" | "p" => Ok(OptionSide::Put),
            _ => Err(ParseEnumError {
                kind: "option side",
                value: s.to_string(),
            }),
        }
    }
}
