//! Curve evaluation, sequential and parallel.

use pricer_core::types::{PricingError, SpotSweep};
use pricer_models::analytical::{BlackScholes, GreekKind};
use pricer_models::instruments::{OptionParameters, OptionStyle};

use super::result::CurveResult;
use crate::parallel::{try_map_in_batches, ParallelConfig};

/// Values computed at one spot.
#[derive(Clone, Copy)]
struct Sample {
    price: f64,
    greek: f64,
    payoff: f64,
}

/// Evaluates a single point of the curve.
fn evaluate(
    template: &OptionParameters,
    style: OptionStyle,
    kind: GreekKind,
    spot: f64,
) -> Result<Sample, PricingError> {
    let params = OptionParameters { spot, ..*template };
    let model = BlackScholes::new(params)?;

    Ok(Sample {
        price: model.price(style),
        greek: model.sensitivity(style, kind),
        payoff: style.intrinsic(spot, template.strike),
    })
}

fn assemble(
    template: &OptionParameters,
    style: OptionStyle,
    kind: GreekKind,
    sweep: &SpotSweep,
    samples: Vec<Sample>,
) -> CurveResult {
    let mut price = Vec::with_capacity(samples.len());
    let mut greek = Vec::with_capacity(samples.len());
    let mut payoff = Vec::with_capacity(samples.len());

    for s in samples {
        price.push(s.price);
        greek.push(s.greek);
        payoff.push(s.payoff);
    }

    CurveResult {
        spots: sweep.points().to_vec(),
        price,
        greek,
        payoff,
        style,
        kind,
        strike: template.strike,
    }
}

/// Evaluates price, one Greek and the intrinsic payoff at every sweep point.
///
/// For each spot `s` the template is copied with `spot = s`; the other
/// fields are held fixed, and the template's own `spot` is ignored. The
/// template is validated at the first sweep point, so a bad volatility or
/// expiry fails before any point is evaluated.
///
/// # Errors
/// `PricingError::InvalidDomain` if the template, or any per-point parameter
/// set, lies outside the model domain.
///
/// # Examples
/// ```
/// use pricer_core::types::SpotSweep;
/// use pricer_models::analytical::GreekKind;
/// use pricer_models::instruments::{OptionParameters, OptionStyle};
/// use pricer_risk::curve::generate_curve;
///
/// let template = OptionParameters { volatility: 0.0, ..OptionParameters::default() };
/// let sweep = SpotSweep::default();
/// assert!(generate_curve(&template, OptionStyle::Put, GreekKind::Gamma, &sweep).is_err());
/// ```
pub fn generate_curve(
    template: &OptionParameters,
    style: OptionStyle,
    kind: GreekKind,
    sweep: &SpotSweep,
) -> Result<CurveResult, PricingError> {
    template.with_spot(sweep.first())?;

    let samples = sweep
        .iter()
        .map(|spot| evaluate(template, style, kind, spot))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(assemble(template, style, kind, sweep, samples))
}

/// Curve generator with optional Rayon parallelism.
///
/// Sweeps at least [`ParallelConfig::parallel_threshold`] long are split
/// into batches of [`ParallelConfig::batch_size`] points and evaluated on
/// the Rayon pool. Results are identical to [`generate_curve`] and keep
/// sweep order.
///
/// # Examples
/// ```
/// use pricer_core::types::SpotSweep;
/// use pricer_models::analytical::GreekKind;
/// use pricer_models::instruments::{OptionParameters, OptionStyle};
/// use pricer_risk::curve::CurveGenerator;
/// use pricer_risk::parallel::ParallelConfig;
///
/// let generator = CurveGenerator::new(ParallelConfig::new(32, 128));
/// let sweep = SpotSweep::linspace(50.0, 150.0, 1_000).unwrap();
///
/// let curve = generator
///     .generate(&OptionParameters::default(), OptionStyle::Call, GreekKind::Gamma, &sweep)
///     .unwrap();
/// assert_eq!(curve.len(), 1_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveGenerator {
    config: ParallelConfig,
}

impl CurveGenerator {
    /// Creates a generator with the given parallel configuration.
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// Returns the parallel configuration.
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Generates one curve.
    ///
    /// # Errors
    /// Same as [`generate_curve`].
    pub fn generate(
        &self,
        template: &OptionParameters,
        style: OptionStyle,
        kind: GreekKind,
        sweep: &SpotSweep,
    ) -> Result<CurveResult, PricingError> {
        if !self.config.should_parallelize(sweep.len()) {
            return generate_curve(template, style, kind, sweep);
        }

        template.with_spot(sweep.first())?;

        let samples = try_map_in_batches(sweep.points(), self.config.batch_size, |&spot| {
            evaluate(template, style, kind, spot)
        })?;

        Ok(assemble(template, style, kind, sweep, samples))
    }

    /// Generates one curve per Greek, in [`GreekKind::ALL`] order.
    ///
    /// # Errors
    /// Same as [`generate_curve`].
    pub fn generate_all(
        &self,
        template: &OptionParameters,
        style: OptionStyle,
        sweep: &SpotSweep,
    ) -> Result<Vec<CurveResult>, PricingError> {
        GreekKind::ALL
            .into_iter()
            .map(|kind| self.generate(template, style, kind, sweep))
            .collect()
    }
}
