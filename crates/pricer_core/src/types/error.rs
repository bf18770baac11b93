//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing, sensitivity and curve operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every operation in the workspace reports failure through this type.
/// Errors are raised before any formula is evaluated, so a degenerate
/// input never surfaces as a NaN or infinite price.
///
/// # Variants
/// - `InvalidDomain`: A model parameter lies outside the domain of the
///   Black-Scholes formulas (non-positive spot, strike, expiry or
///   volatility, or a non-finite value)
/// - `InvalidArgument`: An unrecognised option style or Greek selector,
///   or an unusable sweep size
/// - `InvalidRange`: Sweep bounds that do not form an increasing interval
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_domain("volatility", 0.0);
/// assert_eq!(format!("{}", err), "Invalid domain: volatility = 0");
///
/// let err = PricingError::invalid_range(120.0, 80.0);
/// assert!(format!("{}", err).contains("must be less than"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Model parameter outside the domain of the closed-form formulas.
    #[error("Invalid domain: {parameter} = {value}")]
    InvalidDomain {
        /// Name of the offending parameter
        parameter: String,
        /// The rejected value
        value: f64,
    },

    /// Unrecognised selector or unusable argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Interval bounds that are not strictly increasing.
    #[error("Invalid range: minimum {min} must be less than maximum {max}")]
    InvalidRange {
        /// Lower bound supplied by the caller
        min: f64,
        /// Upper bound supplied by the caller
        max: f64,
    },
}

impl PricingError {
    /// Create an invalid domain error for a named parameter.
    ///
    /// # Arguments
    /// * `parameter` - Name of the parameter (e.g. `"volatility"`)
    /// * `value` - The rejected value
    pub fn invalid_domain(parameter: impl Into<String>, value: f64) -> Self {
        Self::InvalidDomain {
            parameter: parameter.into(),
            value,
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an invalid range error.
    pub fn invalid_range(min: f64, max: f64) -> Self {
        Self::InvalidRange { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_domain_display() {
        let err = PricingError::invalid_domain("spot", -100.0);
        assert_eq!(format!("{}", err), "Invalid domain: spot = -100");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = PricingError::invalid_argument("unknown greek: unknown");
        assert_eq!(
            format!("{}", err),
            "Invalid argument: unknown greek: unknown"
        );
    }

    #[test]
    fn test_invalid_range_display() {
        let err = PricingError::invalid_range(120.0, 80.0);
        assert_eq!(
            format!("{}", err),
            "Invalid range: minimum 120 must be less than maximum 80"
        );
    }

    #[test]
    fn test_invalid_domain_fields() {
        match PricingError::invalid_domain("expiry", 0.0) {
            PricingError::InvalidDomain { parameter, value } => {
                assert_eq!(parameter, "expiry");
                assert_eq!(value, 0.0);
            }
            _ => panic!("Expected InvalidDomain variant"),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::invalid_argument("Test");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::invalid_range(1.0, 0.5);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let err = PricingError::invalid_domain("strike", -5.0);
        let json = serde_json::to_string(&err).unwrap();
        let back: PricingError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
