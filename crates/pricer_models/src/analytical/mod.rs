//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes solution:
//! - Option price for calls and puts (the pricer)
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho) (the sensitivity engine)
//!
//! ## Design Principles
//!
//! - **Validated construction**: [`BlackScholes::new`] rejects parameters outside the
//!   model domain, so every method on a constructed model is total
//! - **Shared intermediates**: d1, d2, √T and the discount factor are computed once
//!   per model and reused by the price and all Greeks
//! - **Numerical Stability**: the normal CDF goes through `erfc`, keeping
//!   Φ(x) + Φ(-x) = 1 to machine precision
//!
//! ## Entry Points
//!
//! The free functions [`price`], [`sensitivity`] and [`greeks()`] validate and
//! evaluate in one call, reporting failures as
//! [`PricingError`](pricer_core::types::PricingError).

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{greeks, price, sensitivity, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{GreekKind, Greeks};
