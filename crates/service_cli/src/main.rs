//! Greeks CLI - Black-Scholes prices, sensitivities and spot curves
//!
//! # Commands
//!
//! - `greeks price` - Price one option and report all five Greeks
//! - `greeks curve` - Sample price, one Greek and the payoff over a spot range
//! - `greeks check` - Validate the configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pricer_models::analytical::GreekKind;
use pricer_models::instruments::OptionStyle;
use service_cli::config::{build_config, CliOverrides, LogLevel};
use service_cli::output::OutputFormat;
use service_cli::{commands, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Black-Scholes Greeks CLI
#[derive(Parser)]
#[command(name = "greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "greeks.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

/// Option parameters shared by `price` and `curve`
#[derive(Args)]
struct OptionArgs {
    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Time to maturity in years
    #[arg(long)]
    expiry: Option<f64>,

    /// Risk-free rate (continuously compounded)
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Volatility
    #[arg(long)]
    volatility: Option<f64>,

    /// Option style (call, put)
    #[arg(long)]
    style: Option<OptionStyle>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one option and report all five Greeks
    Price {
        /// Spot price
        #[arg(long)]
        spot: Option<f64>,

        #[command(flatten)]
        option: OptionArgs,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sample price, one Greek and the payoff over a spot range
    Curve {
        #[command(flatten)]
        option: OptionArgs,

        /// Lowest spot of the sweep
        #[arg(long)]
        min: Option<f64>,

        /// Highest spot of the sweep
        #[arg(long)]
        max: Option<f64>,

        /// Number of sweep points
        #[arg(long)]
        points: Option<usize>,

        /// Greek to plot (delta, gamma, theta, vega, rho)
        #[arg(short, long)]
        greek: Option<GreekKind>,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate and report the configuration
    Check,
}

impl OptionArgs {
    fn apply(&self, overrides: &mut CliOverrides) {
        overrides.strike = self.strike;
        overrides.expiry = self.expiry;
        overrides.rate = self.rate;
        overrides.volatility = self.volatility;
        overrides.style = self.style;
    }
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            log_level: self
                .log_level
                .or(self.verbose.then_some(LogLevel::Debug)),
            ..Default::default()
        };

        match &self.command {
            Commands::Price { spot, option, .. } => {
                overrides.spot = *spot;
                option.apply(&mut overrides);
            }
            Commands::Curve {
                option,
                min,
                max,
                points,
                greek,
                ..
            } => {
                option.apply(&mut overrides);
                overrides.spot_min = *min;
                overrides.spot_max = *max;
                overrides.points = *points;
                overrides.greek = *greek;
            }
            Commands::Check => {}
        }

        overrides
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config, &cli.overrides())?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    info!("Greeks CLI v{}", service_cli::VERSION);
    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = ?config, "Configuration loaded");

    match cli.command {
        Commands::Price { format, output, .. } => {
            commands::price::run(&config, format, output.as_deref())
        }
        Commands::Curve { format, output, .. } => {
            commands::curve::run(&config, format, output.as_deref())
        }
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
