//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Parameter domain failures of the Black-Scholes model

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised when a parameter set lies outside the domain of the closed-form
/// formulas. Each variant converts into [`PricingError::InvalidDomain`]
/// carrying the parameter name and rejected value.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike price
/// - `InvalidExpiry`: Non-positive or non-finite time to maturity
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidRate`: Non-finite risk-free rate
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity.
    #[error("Invalid time to maturity: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid risk-free rate.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },
}

impl AnalyticalError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            AnalyticalError::InvalidSpot { .. } => "spot",
            AnalyticalError::InvalidStrike { .. } => "strike",
            AnalyticalError::InvalidExpiry { .. } => "expiry",
            AnalyticalError::InvalidVolatility { .. } => "volatility",
            AnalyticalError::InvalidRate { .. } => "rate",
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match *self {
            AnalyticalError::InvalidSpot { spot } => spot,
            AnalyticalError::InvalidStrike { strike } => strike,
            AnalyticalError::InvalidExpiry { expiry } => expiry,
            AnalyticalError::InvalidVolatility { volatility } => volatility,
            AnalyticalError::InvalidRate { rate } => rate,
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::invalid_domain(err.parameter(), err.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: 0.0 };
        assert_eq!(format!("{}", err), "Invalid time to maturity: T = 0");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    // ==========================================================
    // From<AnalyticalError> for PricingError tests
    // ==========================================================

    #[test]
    fn test_every_variant_maps_to_invalid_domain() {
        let cases = [
            (AnalyticalError::InvalidSpot { spot: -1.0 }, "spot", -1.0),
            (AnalyticalError::InvalidStrike { strike: 0.0 }, "strike", 0.0),
            (AnalyticalError::InvalidExpiry { expiry: -0.5 }, "expiry", -0.5),
            (
                AnalyticalError::InvalidVolatility { volatility: 0.0 },
                "volatility",
                0.0,
            ),
            (
                AnalyticalError::InvalidRate {
                    rate: f64::INFINITY,
                },
                "rate",
                f64::INFINITY,
            ),
        ];

        for (err, name, v) in cases {
            let pricing_err: PricingError = err.into();
            match pricing_err {
                PricingError::InvalidDomain { parameter, value } => {
                    assert_eq!(parameter, name);
                    assert_eq!(value, v);
                }
                other => panic!("Expected InvalidDomain, got {:?}", other),
            }
        }
    }
}
