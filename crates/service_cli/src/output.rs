//! Rendering of quotes and curves as table, CSV or JSON.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use pricer_models::analytical::Greeks;
use pricer_models::instruments::{OptionParameters, OptionStyle};
use pricer_risk::curve::CurveResult;
use serde::Serialize;

use crate::{CliError, Result};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

/// Price and Greeks at a single parameter set
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub style: OptionStyle,
    pub params: OptionParameters,
    pub price: f64,
    pub intrinsic: f64,
    pub greeks: Greeks,
}

/// Opens the destination for command output: the given file, or stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Writes a single-point quote.
pub fn write_quote<W: Write>(quote: &Quote, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "┌────────────┬────────────────┐")?;
            writeln!(out, "│ {:<10} │ {:>14} │", "Style", quote.style.to_string())?;
            writeln!(out, "├────────────┼────────────────┤")?;
            writeln!(out, "│ {:<10} │ {:>14.6} │", "Price", quote.price)?;
            writeln!(out, "│ {:<10} │ {:>14.6} │", "Intrinsic", quote.intrinsic)?;
            for (kind, value) in quote.greeks.iter() {
                writeln!(out, "│ {:<10} │ {:>14.6} │", kind.to_string(), value)?;
            }
            writeln!(out, "└────────────┴────────────────┘")?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            let mut header = vec!["style".to_string(), "price".to_string()];
            let mut row = vec![quote.style.as_str().to_string(), quote.price.to_string()];
            for (kind, value) in quote.greeks.iter() {
                header.push(kind.as_str().to_string());
                row.push(value.to_string());
            }
            writer.write_record(&header)?;
            writer.write_record(&row)?;
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, quote)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes a curve as `spot,price,<greek>,payoff` rows.
pub fn write_curve<W: Write>(curve: &CurveResult, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let greek = curve.kind.to_string();
            writeln!(out, "┌────────────┬────────────┬────────────┬────────────┐")?;
            writeln!(
                out,
                "│ {:<10} │ {:<10} │ {:<10} │ {:<10} │",
                "Spot", "Price", greek, "Payoff"
            )?;
            writeln!(out, "├────────────┼────────────┼────────────┼────────────┤")?;
            for p in curve.points() {
                writeln!(
                    out,
                    "│ {:>10.4} │ {:>10.4} │ {:>10.4} │ {:>10.4} │",
                    p.spot, p.price, p.greek, p.payoff
                )?;
            }
            writeln!(out, "└────────────┴────────────┴────────────┴────────────┘")?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["spot", "price", curve.kind.as_str(), "payoff"])?;
            for p in curve.points() {
                writer.write_record([
                    p.spot.to_string(),
                    p.price.to_string(),
                    p.greek.to_string(),
                    p.payoff.to_string(),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, curve)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
