//! Price command implementation
//!
//! Prices one European option and evaluates all five Greeks.

use std::io::Write;
use std::path::Path;

use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholes;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{open_output, write_quote, OutputFormat, Quote};
use crate::Result;

/// Computes the quote for the configured option.
pub fn quote(config: &CliConfig) -> Result<Quote> {
    let option = &config.option;
    let params = option.params();
    let model = BlackScholes::new(params).map_err(PricingError::from)?;

    debug!(d1 = model.d1(), d2 = model.d2(), "Model intermediates");

    Ok(Quote {
        style: option.style,
        params,
        price: model.price(option.style),
        intrinsic: option.style.intrinsic(params.spot, params.strike),
        greeks: model.greeks(option.style),
    })
}

/// Run the price command
pub fn run(config: &CliConfig, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let option = &config.option;
    info!(
        style = %option.style,
        spot = option.spot,
        strike = option.strike,
        expiry = option.expiry,
        rate = option.rate,
        volatility = option.volatility,
        "Starting pricing"
    );

    let quote = quote(config)?;

    let mut out = open_output(output)?;
    write_quote(&quote, format, &mut out)?;
    out.flush()?;

    info!(price = quote.price, format = %format, "Pricing complete");
    Ok(())
}
