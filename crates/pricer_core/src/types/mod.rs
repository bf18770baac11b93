//! Core error and sweep types.
//!
//! This module provides:
//! - `error`: Structured error type for every pricing, sensitivity and sweep operation
//! - `sweep`: Ordered spot price grids used to sample price and Greek curves
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PricingError`] from `error`
//! - [`SpotSweep`], [`DEFAULT_SPOT_MIN`], [`DEFAULT_SPOT_MAX`], [`DEFAULT_SWEEP_POINTS`], [`MAX_SWEEP_POINTS`] from `sweep`

pub mod error;
pub mod sweep;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use sweep::{
    SpotSweep, DEFAULT_SPOT_MAX, DEFAULT_SPOT_MIN, DEFAULT_SWEEP_POINTS,
    MAX_SWEEP_POINTS,
};
