//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use pricer_core::types::{PricingError, SpotSweep};
use pricer_models::analytical::GreekKind;
use pricer_models::instruments::{OptionParameters, OptionStyle};
use pricer_risk::parallel::ParallelConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Option parameters and selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSection {
    pub spot: f64,
    pub strike: f64,
    /// Time to maturity in years
    pub expiry: f64,
    pub rate: f64,
    pub volatility: f64,
    #[serde(deserialize_with = "deserialize_from_str")]
    pub style: OptionStyle,
    #[serde(deserialize_with = "deserialize_from_str")]
    pub greek: GreekKind,
}

impl Default for OptionSection {
    fn default() -> Self {
        let params = OptionParameters::default();
        Self {
            spot: params.spot,
            strike: params.strike,
            expiry: params.expiry,
            rate: params.rate,
            volatility: params.volatility,
            style: OptionStyle::Call,
            greek: GreekKind::Delta,
        }
    }
}

impl OptionSection {
    /// Model parameters, without validation.
    pub fn params(&self) -> OptionParameters {
        OptionParameters {
            spot: self.spot,
            strike: self.strike,
            expiry: self.expiry,
            rate: self.rate,
            volatility: self.volatility,
        }
    }
}

/// Spot range for curve generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSection {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl Default for SweepSection {
    fn default() -> Self {
        let sweep = SpotSweep::default();
        Self {
            min: sweep.first(),
            max: sweep.last(),
            points: sweep.len(),
        }
    }
}

impl SweepSection {
    /// Builds the evenly spaced sweep.
    pub fn sweep(&self) -> Result<SpotSweep, PricingError> {
        SpotSweep::linspace(self.min, self.max, self.points)
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Option parameters
    pub option: OptionSection,
    /// Curve spot range
    pub sweep: SweepSection,
    /// Parallel curve evaluation
    pub parallel: ParallelConfig,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_env<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
{
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `GREEKS_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment-like lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("GREEKS_SPOT") {
            self.option.spot = parse_env("GREEKS_SPOT", &v)?;
        }
        if let Some(v) = lookup("GREEKS_STRIKE") {
            self.option.strike = parse_env("GREEKS_STRIKE", &v)?;
        }
        if let Some(v) = lookup("GREEKS_EXPIRY") {
            self.option.expiry = parse_env("GREEKS_EXPIRY", &v)?;
        }
        if let Some(v) = lookup("GREEKS_RATE") {
            self.option.rate = parse_env("GREEKS_RATE", &v)?;
        }
        if let Some(v) = lookup("GREEKS_VOLATILITY") {
            self.option.volatility = parse_env("GREEKS_VOLATILITY", &v)?;
        }
        if let Some(v) = lookup("GREEKS_STYLE") {
            self.option.style = v.parse()?;
        }
        if let Some(v) = lookup("GREEKS_GREEK") {
            self.option.greek = v.parse()?;
        }
        if let Some(v) = lookup("GREEKS_SPOT_MIN") {
            self.sweep.min = parse_env("GREEKS_SPOT_MIN", &v)?;
        }
        if let Some(v) = lookup("GREEKS_SPOT_MAX") {
            self.sweep.max = parse_env("GREEKS_SPOT_MAX", &v)?;
        }
        if let Some(v) = lookup("GREEKS_POINTS") {
            self.sweep.points = parse_env("GREEKS_POINTS", &v)?;
        }
        if let Some(v) = lookup("GREEKS_LOG_LEVEL") {
            self.log_level = v.parse()?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        let option = &mut self.option;
        if let Some(v) = cli.spot {
            option.spot = v;
        }
        if let Some(v) = cli.strike {
            option.strike = v;
        }
        if let Some(v) = cli.expiry {
            option.expiry = v;
        }
        if let Some(v) = cli.rate {
            option.rate = v;
        }
        if let Some(v) = cli.volatility {
            option.volatility = v;
        }
        if let Some(v) = cli.style {
            option.style = v;
        }
        if let Some(v) = cli.greek {
            option.greek = v;
        }
        if let Some(v) = cli.spot_min {
            self.sweep.min = v;
        }
        if let Some(v) = cli.spot_max {
            self.sweep.max = v;
        }
        if let Some(v) = cli.points {
            self.sweep.points = v;
        }
        if let Some(v) = cli.log_level {
            self.log_level = v;
        }
    }

    /// Validate the configuration
    ///
    /// Checks the sweep bounds and size, then the option parameters against
    /// the model domain at the first sweep spot. The configured spot only
    /// feeds `price`, which rejects it there.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sweep = self.sweep.sweep()?;
        self.option
            .params()
            .with_spot(sweep.first())
            .map_err(PricingError::from)?;
        Ok(())
    }
}

/// Command-line overrides, all optional
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub expiry: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub style: Option<OptionStyle>,
    pub greek: Option<GreekKind>,
    pub spot_min: Option<f64>,
    pub spot_max: Option<f64>,
    pub points: Option<usize>,
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (skipped when the file does not exist)
/// 4. Default values
pub fn build_config(config_file: &Path, cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    build_config_with(config_file, cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(
    config_file: &Path,
    cli: &CliOverrides,
    lookup: F,
) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if config_file.exists() {
        CliConfig::from_file(config_file)?
    } else {
        CliConfig::default()
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.option.spot, 100.0);
        assert_eq!(config.option.strike, 100.0);
        assert_eq!(config.option.expiry, 1.0);
        assert_eq!(config.option.rate, 0.05);
        assert_eq!(config.option.volatility, 0.2);
        assert_eq!(config.option.style, OptionStyle::Call);
        assert_eq!(config.option.greek, GreekKind::Delta);
        assert_eq!(config.sweep.min, 80.0);
        assert_eq!(config.sweep.max, 120.0);
        assert_eq!(config.sweep.points, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"

            [option]
            spot = 95.0
            strike = 105.0
            expiry = 0.5
            rate = 0.01
            volatility = 0.35
            style = "Put"
            greek = "gamma"

            [sweep]
            min = 50.0
            max = 150.0
            points = 201

            [parallel]
            parallel_threshold = 1000
        "#;

        let config = CliConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.option.spot, 95.0);
        assert_eq!(config.option.volatility, 0.35);
        assert_eq!(config.option.style, OptionStyle::Put);
        assert_eq!(config.option.greek, GreekKind::Gamma);
        assert_eq!(config.sweep.points, 201);
        assert_eq!(config.parallel.parallel_threshold, 1000);
        assert_eq!(
            config.parallel.batch_size,
            ParallelConfig::default().batch_size
        );
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            [option]
            strike = 110.0
        "#;

        let config = CliConfig::from_toml(toml_str).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.option.strike, 110.0);
        assert_eq!(config.option.spot, 100.0);
        assert_eq!(config.sweep, SweepSection::default());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_toml_rejects_unknown_greek() {
        let toml_str = r#"
            [option]
            greek = "vanna"
        "#;
        assert!(matches!(
            CliConfig::from_toml(toml_str),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env_with(env(&[
                ("GREEKS_STRIKE", "120"),
                ("GREEKS_VOLATILITY", " 0.4 "),
                ("GREEKS_STYLE", "put"),
                ("GREEKS_GREEK", "Vega"),
                ("GREEKS_POINTS", "50"),
                ("GREEKS_LOG_LEVEL", "warn"),
            ]))
            .unwrap();

        assert_eq!(config.option.strike, 120.0);
        assert_eq!(config.option.volatility, 0.4);
        assert_eq!(config.option.style, OptionStyle::Put);
        assert_eq!(config.option.greek, GreekKind::Vega);
        assert_eq!(config.sweep.points, 50);
        assert_eq!(config.log_level, LogLevel::Warn);
        // Untouched
        assert_eq!(config.option.spot, 100.0);
    }

    #[test]
    fn test_env_invalid_number() {
        let mut config = CliConfig::default();
        match config.apply_env_with(env(&[("GREEKS_RATE", "five percent")])) {
            Err(ConfigError::InvalidValue { key, value }) => {
                assert_eq!(key, "GREEKS_RATE");
                assert_eq!(value, "five percent");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_env_invalid_greek_is_invalid_argument() {
        let mut config = CliConfig::default();
        assert!(matches!(
            config.apply_env_with(env(&[("GREEKS_GREEK", "unknown")])),
            Err(ConfigError::Pricing(PricingError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_cli_overrides_merge() {
        let mut config = CliConfig::default();
        let cli = CliOverrides {
            spot: Some(90.0),
            greek: Some(GreekKind::Rho),
            spot_max: Some(200.0),
            log_level: Some(LogLevel::Debug),
            ..Default::default()
        };

        config.merge_with_cli(&cli);

        assert_eq!(config.option.spot, 90.0);
        assert_eq!(config.option.greek, GreekKind::Rho);
        assert_eq!(config.sweep.max, 200.0);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.option.strike, 100.0);
    }

    #[test]
    fn test_validate_rejects_zero_volatility() {
        let mut config = CliConfig::default();
        config.option.volatility = 0.0;
        match config.validate() {
            Err(ConfigError::Pricing(PricingError::InvalidDomain { parameter, .. })) => {
                assert_eq!(parameter, "volatility")
            }
            other => panic!("Expected InvalidDomain, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_leaves_spot_to_price() {
        let mut config = CliConfig::default();
        config.option.spot = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_sweep() {
        let mut config = CliConfig::default();
        config.sweep.points = usize::MAX;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Pricing(PricingError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_sweep() {
        let mut config = CliConfig::default();
        config.sweep.min = 120.0;
        config.sweep.max = 80.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Pricing(PricingError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_build_config_precedence() {
        let missing = Path::new("definitely-not-here/greeks.toml");
        let cli = CliOverrides {
            strike: Some(90.0),
            ..Default::default()
        };

        let config = build_config_with(
            missing,
            &cli,
            env(&[("GREEKS_STRIKE", "110"), ("GREEKS_EXPIRY", "2.0")]),
        )
        .unwrap();

        // CLI beats environment, environment beats defaults
        assert_eq!(config.option.strike, 90.0);
        assert_eq!(config.option.expiry, 2.0);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err: ConfigError = PricingError::invalid_range(120.0, 80.0).into();
        assert!(err.to_string().starts_with("Invalid range"));
    }
}
