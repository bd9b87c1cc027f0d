//! Tracing subscriber setup

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use latencykit_core::config::{OutputConfig, ProbeConfig};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so the
/// report on stdout stays machine readable.
pub fn init_tracing(config: &OutputConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .flatten_event(true),
            )
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    }
    Ok(())
}

/// Record where the configuration came from and what it resolved to
///
/// Called once the subscriber is installed; `ProbeConfig::load` runs before
/// that and stays silent.
pub fn log_loaded_config(config: &ProbeConfig, source: Option<&str>) {
    tracing::info!(
        source = source.unwrap_or("defaults"),
        laps = config.timer.laps,
        lap_interval_ms = config.timer.lap_interval_ms,
        format = %config.output.format,
        "Probe configuration loaded"
    );
}
