//! Option style and intrinsic payoff.
//!
//! This module provides the call/put selector shared by the pricer, the
//! sensitivity engine and the curve generator.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

/// Style of a European option.
///
/// # Variants
/// - `Call`: right to buy, payoff max(S - K, 0)
/// - `Put`: right to sell, payoff max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionStyle;
///
/// let style: OptionStyle = "put".parse().unwrap();
/// assert_eq!(style, OptionStyle::Put);
/// assert_eq!(style.intrinsic(90.0, 100.0), 10.0);
///
/// // Unrecognised selectors are rejected
/// assert!("straddle".parse::<OptionStyle>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionStyle {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionStyle {
    /// Both styles, call first.
    pub const ALL: [OptionStyle; 2] = [OptionStyle::Call, OptionStyle::Put];

    /// Value of immediate exercise at `spot`.
    ///
    /// Depends only on spot, strike and style; volatility and time play no part.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::OptionStyle;
    ///
    /// assert_eq!(OptionStyle::Call.intrinsic(110.0, 100.0), 10.0);
    /// assert_eq!(OptionStyle::Call.intrinsic(90.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionStyle::Call => (spot - strike).max(0.0),
            OptionStyle::Put => (strike - spot).max(0.0),
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionStyle::Call => "call",
            OptionStyle::Put => "put",
        }
    }
}

impl FromStr for OptionStyle {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionStyle::Call),
            "put" | "p" => Ok(OptionStyle::Put),
            _ => Err(PricingError::invalid_argument(format!(
                "unknown option style: {}. Supported: call, put",
                s
            ))),
        }
    }
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionStyle::Call => write!(f, "Call"),
            OptionStyle::Put => write!(f, "Put"),
        }
    }
}
