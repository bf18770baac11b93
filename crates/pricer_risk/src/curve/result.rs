//! Curve output types.

use pricer_models::analytical::GreekKind;
use pricer_models::instruments::OptionStyle;

/// Price, sensitivity and intrinsic payoff sampled over a spot sweep.
///
/// All four sequences have the same length and are aligned by index:
/// `price[i]`, `greek[i]` and `payoff[i]` were evaluated at `spots[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveResult {
    /// Spot prices the curve was evaluated at, strictly increasing
    pub spots: Vec<f64>,
    /// Black-Scholes price at each spot
    pub price: Vec<f64>,
    /// Selected sensitivity at each spot
    pub greek: Vec<f64>,
    /// Intrinsic payoff at each spot
    pub payoff: Vec<f64>,
    /// Option style the curve was generated for
    pub style: OptionStyle,
    /// Sensitivity held in `greek`
    pub kind: GreekKind,
    /// Strike of the template parameters
    pub strike: f64,
}

/// One sample of a [`CurveResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Spot price
    pub spot: f64,
    /// Option price
    pub price: f64,
    /// Selected sensitivity
    pub greek: f64,
    /// Intrinsic payoff
    pub payoff: f64,
}

impl CurveResult {
    /// Number of sampled points.
    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Returns true if the curve holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Iterates over the samples in sweep order.
    pub fn points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.spots
            .iter()
            .zip(&self.price)
            .zip(&self.greek)
            .zip(&self.payoff)
            .map(|(((&spot, &price), &greek), &payoff)| CurvePoint {
                spot,
                price,
                greek,
                payoff,
            })
    }

    /// Time value (price minus intrinsic payoff) at each spot.
    pub fn time_value(&self) -> Vec<f64> {
        self.price
            .iter()
            .zip(&self.payoff)
            .map(|(price, payoff)| price - payoff)
            .collect()
    }
}
