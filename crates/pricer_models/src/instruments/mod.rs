//! European option inputs.
//!
//! This module provides:
//! - [`OptionParameters`]: spot, strike, expiry, rate and volatility with domain validation
//! - [`OptionStyle`]: call or put, with intrinsic payoff evaluation
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionParameters, OptionStyle};
//!
//! let params = OptionParameters::new(110.0, 100.0, 0.5, 0.03, 0.25).unwrap();
//! assert_eq!(OptionStyle::Call.intrinsic(params.spot, params.strike), 10.0);
//! assert_eq!(OptionStyle::Put.intrinsic(params.spot, params.strike), 0.0);
//! ```

mod params;
mod payoff;

pub use params::OptionParameters;
pub use payoff::OptionStyle;
