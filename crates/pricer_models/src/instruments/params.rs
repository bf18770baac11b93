//! Black-Scholes model inputs.
//!
//! This module provides the parameter set consumed by the pricer and the
//! sensitivity engine, with validation ensuring the closed-form formulas
//! are defined.

use crate::analytical::error::AnalyticalError;

/// Inputs to the Black-Scholes formulas for a single evaluation.
///
/// Fields are public so that parameter sets can be assembled from
/// configuration or deserialised directly. Every pricing entry point calls
/// [`OptionParameters::validate`] before evaluating a formula, so an
/// unvalidated value can never reach `ln(S/K)` or `σ√T`.
///
/// # Domain
/// - `spot`, `strike`, `expiry`, `volatility` must be finite and positive
/// - `rate` must be finite (negative rates are allowed)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionParameters;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert_eq!(params.strike, 100.0);
///
/// // Zero volatility is outside the model domain
/// assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
}

impl OptionParameters {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    /// * `spot` - Spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to maturity in years (must be positive)
    /// * `rate` - Risk-free rate (must be finite)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// The first failing check, in the order spot, strike, expiry, volatility, rate.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        let params = Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks that the parameter set lies inside the model domain.
    ///
    /// NaN fails every positivity check, so it is rejected alongside zero
    /// and negative values.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot is not finite and positive
    /// - `AnalyticalError::InvalidStrike` if strike is not finite and positive
    /// - `AnalyticalError::InvalidExpiry` if expiry is not finite and positive
    /// - `AnalyticalError::InvalidVolatility` if volatility is not finite and positive
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        if !is_positive(self.spot) {
            return Err(AnalyticalError::InvalidSpot { spot: self.spot });
        }

        if !is_positive(self.strike) {
            return Err(AnalyticalError::InvalidStrike {
                strike: self.strike,
            });
        }

        if !is_positive(self.expiry) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: self.expiry,
            });
        }

        if !is_positive(self.volatility) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: self.volatility,
            });
        }

        if !self.rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate: self.rate });
        }

        Ok(())
    }

    /// Returns a validated copy with the spot replaced.
    ///
    /// Used to move a parameter template along a spot sweep while holding
    /// strike, expiry, rate and volatility fixed.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::OptionParameters;
    ///
    /// let template = OptionParameters::default();
    /// let moved = template.with_spot(95.0).unwrap();
    /// assert_eq!(moved.spot, 95.0);
    /// assert_eq!(moved.strike, template.strike);
    /// assert!(template.with_spot(0.0).is_err());
    /// ```
    pub fn with_spot(&self, spot: f64) -> Result<Self, AnalyticalError> {
        let moved = Self { spot, ..*self };
        moved.validate()?;
        Ok(moved)
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }
}

impl Default for OptionParameters {
    /// At-the-money one-year option: S = K = 100, r = 5%, σ = 20%.
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

#[inline]
fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid_params() {
        let params = OptionParameters::new(100.0, 95.0, 0.5, 0.03, 0.25).unwrap();
        assert_eq!(params.spot, 100.0);
        assert_eq!(params.strike, 95.0);
        assert_eq!(params.expiry, 0.5);
        assert_eq!(params.rate, 0.03);
        assert_eq!(params.volatility, 0.25);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(OptionParameters::default().validate().is_ok());
    }

    #[test]
    fn test_negative_and_zero_rate_allowed() {
        assert!(OptionParameters::new(100.0, 100.0, 1.0, -0.02, 0.2).is_ok());
        assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.0, 0.2).is_ok());
    }

    #[test]
    fn test_invalid_spot() {
        for spot in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            match OptionParameters::new(spot, 100.0, 1.0, 0.05, 0.2) {
                Err(AnalyticalError::InvalidSpot { .. }) => {}
                other => panic!("Expected InvalidSpot for {}, got {:?}", spot, other),
            }
        }
    }

    #[test]
    fn test_invalid_strike() {
        match OptionParameters::new(100.0, -1.0, 1.0, 0.05, 0.2) {
            Err(AnalyticalError::InvalidStrike { strike }) => assert_eq!(strike, -1.0),
            other => panic!("Expected InvalidStrike, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_expiry() {
        match OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2) {
            Err(AnalyticalError::InvalidExpiry { expiry }) => assert_eq!(expiry, 0.0),
            other => panic!("Expected InvalidExpiry, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_volatility() {
        match OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0) {
            Err(AnalyticalError::InvalidVolatility { volatility }) => assert_eq!(volatility, 0.0),
            other => panic!("Expected InvalidVolatility, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_rate() {
        match OptionParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.2) {
            Err(AnalyticalError::InvalidRate { .. }) => {}
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_catches_struct_literal() {
        let params = OptionParameters {
            volatility: -0.1,
            ..OptionParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_with_spot_keeps_other_fields() {
        let template = OptionParameters::new(100.0, 105.0, 2.0, 0.01, 0.3).unwrap();
        let moved = template.with_spot(87.5).unwrap();
        assert_eq!(moved.spot, 87.5);
        assert_eq!(moved.strike, 105.0);
        assert_eq!(moved.expiry, 2.0);
        assert_eq!(moved.rate, 0.01);
        assert_eq!(moved.volatility, 0.3);
    }

    #[test]
    fn test_with_spot_rejects_non_positive() {
        let template = OptionParameters::default();
        assert!(matches!(
            template.with_spot(-5.0),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_discount_factor() {
        let params = OptionParameters::default();
        assert_relative_eq!(params.discount_factor(), (-0.05_f64).exp(), epsilon = 1e-15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialise_from_json() {
        let json = r#"{"spot":100.0,"strike":90.0,"expiry":0.5,"rate":0.02,"volatility":0.3}"#;
        let params: OptionParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.strike, 90.0);
        assert!(params.validate().is_ok());
    }
}
