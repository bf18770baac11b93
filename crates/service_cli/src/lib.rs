//! Command line front end for Black-Scholes prices, Greeks and spot curves.
//!
//! The `greeks` binary wraps the pricer, the sensitivity engine and the
//! curve generator:
//!
//! - `greeks price` - Price and all five Greeks at one parameter set
//! - `greeks curve` - Price, one Greek and the payoff across a spot sweep
//! - `greeks check` - Validate and report the effective configuration
//!
//! Configuration is layered as defaults, then `greeks.toml`, then `GREEKS_*`
//! environment variables, then command-line flags.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate owns all I/O: configuration
//! loading, logging and output rendering. The pricer crates stay pure.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
