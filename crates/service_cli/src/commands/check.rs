//! Check command implementation
//!
//! Loads and validates the configuration, then reports it.

use std::path::Path;

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Renders the effective configuration as text.
pub fn summary(config: &CliConfig, config_file: &Path) -> String {
    let source = if config_file.exists() {
        config_file.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_file.display())
    };
    let option = &config.option;
    let sweep = &config.sweep;

    format!(
        "Configuration: {}\n\
         Log level:     {}\n\
         Option:        {} S={} K={} T={} r={} vol={}\n\
         Greek:         {}\n\
         Sweep:         {} -> {} ({} points)\n\
         Parallel:      batch {} / threshold {}\n\
         Status:        OK\n",
        source,
        config.log_level,
        option.style,
        option.spot,
        option.strike,
        option.expiry,
        option.rate,
        option.volatility,
        option.greek,
        sweep.min,
        sweep.max,
        sweep.points,
        config.parallel.batch_size,
        config.parallel.parallel_threshold,
    )
}

/// Run the check command
pub fn run(config: &CliConfig, config_file: &Path) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;
    print!("{}", summary(config, config_file));
    info!("Configuration valid");
    Ok(())
}
