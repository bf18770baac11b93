//! Spot-sweep curve generation.
//!
//! Evaluates the pricer, one sensitivity and the intrinsic payoff at every
//! point of a [`SpotSweep`](pricer_core::types::SpotSweep), holding the other
//! option parameters fixed.
//!
//! - [`generate_curve`]: sequential evaluation
//! - [`CurveGenerator`]: evaluation with Rayon above a size threshold
//! - [`CurveResult`]: the three index-aligned output sequences

mod generator;
mod result;

pub use generator::{generate_curve, CurveGenerator};
pub use result::{CurvePoint, CurveResult};
