//! # pricer_core: Foundation Types for Black-Scholes Greeks Profiles
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error taxonomy shared by every layer: `PricingError` (`types::error`)
//! - Spot price sweeps used to sample curves: `SpotSweep` (`types::sweep`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{PricingError, SpotSweep};
//!
//! let sweep = SpotSweep::linspace(80.0, 120.0, 100).unwrap();
//! assert_eq!(sweep.len(), 100);
//! assert_eq!(sweep.first(), 80.0);
//! assert_eq!(sweep.last(), 120.0);
//!
//! // Inverted bounds are rejected
//! let err = SpotSweep::linspace(120.0, 80.0, 100).unwrap_err();
//! assert!(matches!(err, PricingError::InvalidRange { .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `SpotSweep` and `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
