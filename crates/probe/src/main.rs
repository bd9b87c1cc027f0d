//! `lap-probe` - time a fixed number of sleeping laps and print statistics
//!
//! Configuration comes from `LATENCYKIT_CONFIG` (TOML file) and the
//! `LATENCYKIT_*` environment variables; see `latencykit_core::config`.

mod logging;
mod probe;

use anyhow::{Context, Result};
use latencykit_core::config::CONFIG_PATH_ENV;
use latencykit_core::{ProbeConfig, BUILD_INFO};

fn main() -> Result<()> {
    let config = ProbeConfig::load().context("Loading probe configuration")?;
    logging::init_tracing(&config.output)?;
    logging::log_loaded_config(&config, std::env::var(CONFIG_PATH_ENV).ok().as_deref());

    tracing::info!(
        version = BUILD_INFO.version,
        git = BUILD_INFO.git_hash,
        profile = BUILD_INFO.profile,
        "Starting lap probe"
    );

    let timer = probe::run_laps(&config.timer, probe::sleep_for(config.lap_interval()))?;
    let report = probe::render(timer.stats().as_ref(), config.output.format)?;
    println!("{report}");

    tracing::info!(recorded = timer.len(), "Lap probe finished");
    Ok(())
}
