//! # Pricer Risk (L4: Application)
//!
//! Curve generation and parallelisation.
//!
//! This crate provides:
//! - The curve generator: price, one Greek and the intrinsic payoff evaluated
//!   pointwise over a spot sweep, as index-aligned sequences
//! - Rayon-based parallel evaluation gated by [`ParallelConfig`]
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  curve/      - CurveGenerator,          │
//! │               CurveResult, CurvePoint   │
//! │  parallel/   - Rayon utilities          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes pricer and Greeks        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::SpotSweep;
//! use pricer_models::analytical::GreekKind;
//! use pricer_models::instruments::{OptionParameters, OptionStyle};
//! use pricer_risk::curve::generate_curve;
//!
//! let template = OptionParameters::default();
//! let sweep = SpotSweep::linspace(80.0, 120.0, 100).unwrap();
//!
//! let curve = generate_curve(&template, OptionStyle::Call, GreekKind::Delta, &sweep).unwrap();
//!
//! assert_eq!(curve.len(), 100);
//! assert_eq!(curve.payoff[0], 0.0);
//! assert!((curve.payoff[99] - 20.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curve;
pub mod parallel;

// Re-export commonly used types
pub use curve::{generate_curve, CurveGenerator, CurvePoint, CurveResult};
pub use parallel::{ParallelConfig, DEFAULT_BATCH_SIZE, DEFAULT_PARALLEL_THRESHOLD};
