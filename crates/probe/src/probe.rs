//! Timed lap loop

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use latencykit_core::config::{OutputFormat, TimerConfig};
use latencykit_core::{LapStats, LapTimer};

/// Record `config.laps` laps, each wrapping one call to `work`
///
/// # Errors
///
/// Returns error if the timer runs out of reserved lap storage.
pub fn run_laps<F>(config: &TimerConfig, mut work: F) -> Result<LapTimer>
where
    F: FnMut(),
{
    let mut timer = LapTimer::with_capacity(config.laps);
    for lap in 0..config.laps {
        work();
        let elapsed = timer
            .lap_fixed()
            .with_context(|| format!("Recording lap {lap}"))?;
        tracing::trace!(lap, elapsed_ns = %elapsed.as_nanos(), "Lap recorded");
    }
    Ok(timer)
}

/// Sleep-based workload used by the binary
pub fn sleep_for(interval: Duration) -> impl FnMut() {
    move || thread::sleep(interval)
}

/// Render statistics in the requested format
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render(stats: Option<&LapStats>, format: OutputFormat) -> Result<String> {
    match (stats, format) {
        (None, OutputFormat::Text) => Ok("No measurements recorded".to_string()),
        (None, OutputFormat::Json) => Ok("null".to_string()),
        (Some(stats), OutputFormat::Text) => Ok(stats.to_string()),
        (Some(stats), OutputFormat::Json) => {
            serde_json::to_string_pretty(stats).context("Serializing lap statistics")
        }
    }
}
