//! # Pricer Models (L2: Business Logic)
//!
//! Option parameters and the closed-form Black-Scholes model.
//!
//! This crate provides:
//! - Validated model inputs (`OptionParameters`) and option styles (`OptionStyle`)
//! - Intrinsic payoff evaluation
//! - The analytic Black-Scholes price for European calls and puts
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho) selected by `GreekKind`
//!
//! ## Design Principles
//!
//! - **Closed enums** for option style and Greek selection, matched exhaustively
//! - **Validate before evaluating**: degenerate inputs become `PricingError::InvalidDomain`
//!   instead of NaN or infinite results
//! - **One d1/d2 code path** shared by price and every Greek
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::{price, sensitivity, GreekKind};
//! use pricer_models::instruments::{OptionParameters, OptionStyle};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let call = price(&params, OptionStyle::Call).unwrap();
//! let delta = sensitivity(&params, OptionStyle::Call, GreekKind::Delta).unwrap();
//!
//! assert!((call - 10.4506).abs() < 1e-3);
//! assert!((delta - 0.6368).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
