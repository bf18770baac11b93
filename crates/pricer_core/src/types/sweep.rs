//! Spot price sweeps.
//!
//! A [`SpotSweep`] is the ordered grid of spot prices over which price and
//! Greek curves are sampled. Points are finite and strictly increasing.

use super::error::PricingError;

/// Lower bound of the default sweep.
pub const DEFAULT_SPOT_MIN: f64 = 80.0;

/// Upper bound of the default sweep.
pub const DEFAULT_SPOT_MAX: f64 = 120.0;

/// Number of points in the default sweep.
pub const DEFAULT_SWEEP_POINTS: usize = 100;

/// Largest point count [`SpotSweep::linspace`] accepts.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Ordered, finite, strictly increasing sequence of spot prices.
///
/// Construct with [`SpotSweep::linspace`] for evenly spaced points or
/// [`SpotSweep::from_points`] for a caller-supplied grid. The sweep does not
/// check the sign of its points; spot positivity is a model-domain concern
/// enforced when each point is priced.
///
/// # Examples
/// ```
/// use pricer_core::types::SpotSweep;
///
/// let sweep = SpotSweep::linspace(90.0, 110.0, 5).unwrap();
/// assert_eq!(sweep.points(), &[90.0, 95.0, 100.0, 105.0, 110.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct SpotSweep {
    points: Vec<f64>,
}

impl SpotSweep {
    /// Creates `count` evenly spaced points from `min` to `max` inclusive.
    ///
    /// Point `i` is `min + i * (max - min) / (count - 1)`; the final point is
    /// pinned to `max` so that rounding never moves the upper bound.
    ///
    /// # Errors
    /// - `PricingError::InvalidRange` if `min >= max` or either bound is not finite
    /// - `PricingError::InvalidArgument` if `count < 2` or `count > MAX_SWEEP_POINTS`
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{PricingError, SpotSweep};
    ///
    /// let sweep = SpotSweep::linspace(80.0, 120.0, 100).unwrap();
    /// assert_eq!(sweep.len(), 100);
    ///
    /// assert!(matches!(
    ///     SpotSweep::linspace(80.0, 120.0, 1),
    ///     Err(PricingError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn linspace(min: f64, max: f64, count: usize) -> Result<Self, PricingError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(PricingError::invalid_range(min, max));
        }

        if count < 2 {
            return Err(PricingError::invalid_argument(format!(
                "spot sweep needs at least 2 points, got {}",
                count
            )));
        }

        if count > MAX_SWEEP_POINTS {
            return Err(PricingError::invalid_argument(format!(
                "spot sweep allows at most {} points, got {}",
                MAX_SWEEP_POINTS, count
            )));
        }

        let step = (max - min) / (count - 1) as f64;
        let mut points: Vec<f64> = (0..count).map(|i| min + i as f64 * step).collect();
        points[count - 1] = max;

        // A huge count over a narrow interval can collapse neighbours
        if points.windows(2).any(|w| w[0] >= w[1]) {
            return Err(PricingError::invalid_argument(format!(
                "{} points do not fit strictly increasing in [{}, {}]",
                count, min, max
            )));
        }

        Ok(Self { points })
    }

    /// Creates a sweep from explicit points.
    ///
    /// # Errors
    /// - `PricingError::InvalidArgument` if fewer than 2 points are given
    /// - `PricingError::InvalidRange` if any point is not finite or the
    ///   points are not strictly increasing (the first offending pair is reported)
    pub fn from_points(points: Vec<f64>) -> Result<Self, PricingError> {
        if points.len() < 2 {
            return Err(PricingError::invalid_argument(format!(
                "spot sweep needs at least 2 points, got {}",
                points.len()
            )));
        }

        if let Some(&bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(PricingError::invalid_range(bad, bad));
        }

        if let Some(w) = points.windows(2).find(|w| w[0] >= w[1]) {
            return Err(PricingError::invalid_range(w[0], w[1]));
        }

        Ok(Self { points })
    }

    /// Returns the sweep points in ascending order.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed sweep; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the lowest spot.
    #[inline]
    pub fn first(&self) -> f64 {
        self.points[0]
    }

    /// Returns the highest spot.
    #[inline]
    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Iterates over the points in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

impl Default for SpotSweep {
    fn default() -> Self {
        let step = (DEFAULT_SPOT_MAX - DEFAULT_SPOT_MIN) / (DEFAULT_SWEEP_POINTS - 1) as f64;
        let mut points: Vec<f64> = (0..DEFAULT_SWEEP_POINTS)
            .map(|i| DEFAULT_SPOT_MIN + i as f64 * step)
            .collect();
        points[DEFAULT_SWEEP_POINTS - 1] = DEFAULT_SPOT_MAX;
        Self { points }
    }
}

impl TryFrom<Vec<f64>> for SpotSweep {
    type Error = PricingError;

    fn try_from(points: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl From<SpotSweep> for Vec<f64> {
    fn from(sweep: SpotSweep) -> Self {
        sweep.points
    }
}

impl<'a> IntoIterator for &'a SpotSweep {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
