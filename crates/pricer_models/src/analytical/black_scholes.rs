//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::types::PricingError;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::greeks::{GreekKind, Greeks};
use crate::instruments::{OptionParameters, OptionStyle};

/// Black-Scholes model for a single European option parameter set.
///
/// Construction validates the parameters and evaluates the intermediates
/// (√T, σ√T, d₁, d₂, e^(-rT)) once; the price and every Greek read from
/// the same values, so the Greek curves are consistent with the price curve.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::{OptionParameters, OptionStyle};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let bs = BlackScholes::new(params).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = bs.price_call() - bs.price_put() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    params: OptionParameters,
    sqrt_t: f64,
    d1: f64,
    d2: f64,
    discount: f64,
}

impl BlackScholes {
    /// Creates a Black-Scholes model from validated parameters.
    ///
    /// # Errors
    /// - Any [`AnalyticalError`] raised by [`OptionParameters::validate`]
    /// - `AnalyticalError::InvalidRate` if e^(-rT) or d₁/d₂ overflow for
    ///   finite inputs (for example r = -1, T = 1000)
    /// - `AnalyticalError::InvalidVolatility` if σ²T overflows
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionParameters;
    ///
    /// let zero_vol = OptionParameters { volatility: 0.0, ..OptionParameters::default() };
    /// assert!(BlackScholes::new(zero_vol).is_err());
    /// ```
    pub fn new(params: OptionParameters) -> Result<Self, AnalyticalError> {
        params.validate()?;

        let sqrt_t = params.expiry.sqrt();
        let vol_sqrt_t = params.volatility * sqrt_t;

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (params.spot / params.strike).ln();
        let drift = (params.rate + 0.5 * params.volatility * params.volatility) * params.expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        let discount = params.discount_factor();

        // Finite inputs can still overflow the intermediates
        if !d1.is_finite() || !d2.is_finite() {
            if !(params.volatility * vol_sqrt_t).is_finite() {
                return Err(AnalyticalError::InvalidVolatility {
                    volatility: params.volatility,
                });
            }
            return Err(AnalyticalError::InvalidRate { rate: params.rate });
        }
        if !(params.strike * params.expiry * discount).is_finite() {
            return Err(AnalyticalError::InvalidRate { rate: params.rate });
        }

        Ok(Self {
            params,
            sqrt_t,
            d1,
            d2,
            discount,
        })
    }

    /// Returns the parameters this model was built from.
    #[inline]
    pub fn params(&self) -> &OptionParameters {
        &self.params
    }

    /// The d₁ term: (ln(S/K) + (r + σ²/2)T) / (σ√T).
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// The d₂ term: d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// The discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        self.discount
    }

    /// Computes the option price for the given style.
    #[inline]
    pub fn price(&self, style: OptionStyle) -> f64 {
        match style {
            OptionStyle::Call => self.price_call(),
            OptionStyle::Put => self.price_put(),
        }
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self) -> f64 {
        let p = &self.params;
        p.spot * norm_cdf(self.d1) - p.strike * self.discount * norm_cdf(self.d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self) -> f64 {
        let p = &self.params;
        p.strike * self.discount * norm_cdf(-self.d2) - p.spot * norm_cdf(-self.d1)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, style: OptionStyle) -> f64 {
        let n_d1 = norm_cdf(self.d1);
        match style {
            OptionStyle::Call => n_d1,
            OptionStyle::Put => n_d1 - 1.0,
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> f64 {
        let p = &self.params;
        norm_pdf(self.d1) / (p.spot * p.volatility * self.sqrt_t)
    }

    /// Computes Theta (∂V/∂t), per year.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    #[inline]
    pub fn theta(&self, style: OptionStyle) -> f64 {
        let p = &self.params;

        // Common term: -(S·σ·φ(d₁))/(2√T)
        let decay = -(p.volatility * p.spot * norm_pdf(self.d1)) / (2.0 * self.sqrt_t);
        let carry = p.rate * p.strike * self.discount;

        match style {
            OptionStyle::Call => decay - carry * norm_cdf(self.d2),
            OptionStyle::Put => decay + carry * norm_cdf(-self.d2),
        }
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> f64 {
        self.params.spot * self.sqrt_t * norm_pdf(self.d1)
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, style: OptionStyle) -> f64 {
        let p = &self.params;
        let scale = p.strike * p.expiry * self.discount;
        match style {
            OptionStyle::Call => scale * norm_cdf(self.d2),
            OptionStyle::Put => -scale * norm_cdf(-self.d2),
        }
    }

    /// Computes the sensitivity selected by `kind`.
    pub fn sensitivity(&self, style: OptionStyle, kind: GreekKind) -> f64 {
        match kind {
            GreekKind::Delta => self.delta(style),
            GreekKind::Gamma => self.gamma(),
            GreekKind::Theta => self.theta(style),
            GreekKind::Vega => self.vega(),
            GreekKind::Rho => self.rho(style),
        }
    }

    /// Computes all five Greeks.
    pub fn greeks(&self, style: OptionStyle) -> Greeks {
        Greeks {
            delta: self.delta(style),
            gamma: self.gamma(),
            theta: self.theta(style),
            vega: self.vega(),
            rho: self.rho(style),
        }
    }
}

/// Prices a European option.
///
/// # Errors
/// `PricingError::InvalidDomain` if the parameters lie outside the model domain.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{OptionParameters, OptionStyle};
///
/// let params = OptionParameters::default();
/// let put = price(&params, OptionStyle::Put).unwrap();
/// assert!((put - 5.5735).abs() < 1e-3);
/// ```
pub fn price(params: &OptionParameters, style: OptionStyle) -> Result<f64, PricingError> {
    Ok(BlackScholes::new(*params)?.price(style))
}

/// Computes one Black-Scholes sensitivity.
///
/// # Errors
/// `PricingError::InvalidDomain` if the parameters lie outside the model domain.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{sensitivity, GreekKind};
/// use pricer_models::instruments::{OptionParameters, OptionStyle};
///
/// let params = OptionParameters::default();
/// let vega = sensitivity(&params, OptionStyle::Call, GreekKind::Vega).unwrap();
/// assert!((vega - 37.524).abs() < 1e-3);
/// ```
pub fn sensitivity(
    params: &OptionParameters,
    style: OptionStyle,
    kind: GreekKind,
) -> Result<f64, PricingError> {
    Ok(BlackScholes::new(*params)?.sensitivity(style, kind))
}

/// Computes all five Black-Scholes sensitivities.
///
/// # Errors
/// `PricingError::InvalidDomain` if the parameters lie outside the model domain.
pub fn greeks(params: &OptionParameters, style: OptionStyle) -> Result<Greeks, PricingError> {
    Ok(BlackScholes::new(*params)?.greeks(style))
}
