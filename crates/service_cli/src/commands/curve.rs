//! Curve command implementation
//!
//! Evaluates price, one Greek and the intrinsic payoff across a spot sweep.

use std::io::Write;
use std::path::Path;

use pricer_risk::curve::{CurveGenerator, CurveResult};
use tracing::info;

use crate::config::CliConfig;
use crate::output::{open_output, write_curve, OutputFormat};
use crate::Result;

/// Generates the configured curve.
pub fn build(config: &CliConfig) -> Result<CurveResult> {
    let sweep = config.sweep.sweep()?;
    let generator = CurveGenerator::new(config.parallel.clone());
    let parallel = generator.config().should_parallelize(sweep.len());

    info!(
        min = sweep.first(),
        max = sweep.last(),
        points = sweep.len(),
        parallel,
        "Generating curve"
    );

    let curve = generator.generate(
        &config.option.params(),
        config.option.style,
        config.option.greek,
        &sweep,
    )?;
    Ok(curve)
}

/// Run the curve command
pub fn run(config: &CliConfig, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    info!(
        style = %config.option.style,
        greek = %config.option.greek,
        strike = config.option.strike,
        "Starting curve generation"
    );

    let curve = build(config)?;

    let mut out = open_output(output)?;
    write_curve(&curve, format, &mut out)?;
    out.flush()?;

    match output {
        Some(path) => info!(path = %path.display(), points = curve.len(), "Curve written"),
        None => info!(points = curve.len(), "Curve complete"),
    }
    Ok(())
}
