//! Greek selectors and results.
//!
//! Provides [`GreekKind`], the closed set of sensitivities the engine can
//! compute, and [`Greeks`], all five evaluated at a single point.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

/// Specifies which sensitivity to compute.
///
/// # First-Order Greeks
///
/// - `Delta`: ∂V/∂S - Sensitivity to spot price
/// - `Theta`: ∂V/∂t - Sensitivity to the passage of time (time decay)
/// - `Vega`: ∂V/∂σ - Sensitivity to volatility
/// - `Rho`: ∂V/∂r - Sensitivity to interest rate
///
/// # Second-Order Greeks
///
/// - `Gamma`: ∂²V/∂S² - Convexity with respect to spot
///
/// # Examples
/// ```
/// use pricer_models::analytical::GreekKind;
///
/// let kind: GreekKind = "Vega".parse().unwrap();
/// assert_eq!(kind, GreekKind::Vega);
/// assert!("unknown".parse::<GreekKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GreekKind {
    /// Delta: ∂V/∂S (sensitivity to spot price)
    Delta,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot)
    Gamma,
    /// Theta: ∂V/∂t (time decay, per year)
    Theta,
    /// Vega: ∂V/∂σ (per unit of volatility)
    Vega,
    /// Rho: ∂V/∂r (per unit of rate)
    Rho,
}

impl GreekKind {
    /// Every Greek in display order.
    pub const ALL: [GreekKind; 5] = [
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Theta,
        GreekKind::Vega,
        GreekKind::Rho,
    ];

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            GreekKind::Delta => "delta",
            GreekKind::Gamma => "gamma",
            GreekKind::Theta => "theta",
            GreekKind::Vega => "vega",
            GreekKind::Rho => "rho",
        }
    }
}

impl FromStr for GreekKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delta" => Ok(GreekKind::Delta),
            "gamma" => Ok(GreekKind::Gamma),
            "theta" => Ok(GreekKind::Theta),
            "vega" => Ok(GreekKind::Vega),
            "rho" => Ok(GreekKind::Rho),
            _ => Err(PricingError::invalid_argument(format!(
                "unknown greek: {}. Supported: delta, gamma, theta, vega, rho",
                s
            ))),
        }
    }
}

impl fmt::Display for GreekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GreekKind::Delta => "Delta",
            GreekKind::Gamma => "Gamma",
            GreekKind::Theta => "Theta",
            GreekKind::Vega => "Vega",
            GreekKind::Rho => "Rho",
        };
        write!(f, "{}", name)
    }
}

/// All five Black-Scholes sensitivities at one parameter set.
///
/// Units follow the closed-form derivatives directly: theta per year,
/// vega per unit of volatility, rho per unit of rate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S²
    pub gamma: f64,
    /// Theta: ∂V/∂t
    pub theta: f64,
    /// Vega: ∂V/∂σ
    pub vega: f64,
    /// Rho: ∂V/∂r
    pub rho: f64,
}

impl Greeks {
    /// Selects one sensitivity.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::{GreekKind, Greeks};
    ///
    /// let g = Greeks { delta: 0.5, gamma: 0.02, theta: -6.0, vega: 37.0, rho: 50.0 };
    /// assert_eq!(g.get(GreekKind::Vega), 37.0);
    /// ```
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

    /// Pairs each Greek with its value, in [`GreekKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (GreekKind, f64)> + '_ {
        GreekKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}
