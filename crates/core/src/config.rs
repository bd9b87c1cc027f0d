//! `LatencyKit` Probe Configuration
//!
//! Configuration for the lap probe with garde validation. Values are layered
//! in increasing priority: built-in defaults, an optional TOML file named by
//! `LATENCYKIT_CONFIG`, then individual `LATENCYKIT_*` environment variables.
//!
//! The containers themselves take no runtime configuration; their capacities
//! are const generic parameters.

use crate::error::{CoreError, CoreResult};
use garde::Validate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable naming an optional TOML configuration file
pub const CONFIG_PATH_ENV: &str = "LATENCYKIT_CONFIG";
/// Environment override for [`TimerConfig::laps`]
pub const LAPS_ENV: &str = "LATENCYKIT_LAPS";
/// Environment override for [`TimerConfig::lap_interval_ms`]
pub const LAP_INTERVAL_ENV: &str = "LATENCYKIT_LAP_INTERVAL_MS";
/// Environment override for [`OutputConfig::format`]
pub const OUTPUT_ENV: &str = "LATENCYKIT_OUTPUT";
/// Environment override for [`OutputConfig::log_json`]
pub const LOG_JSON_ENV: &str = "LATENCYKIT_LOG_JSON";

/// Probe configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProbeConfig {
    /// Lap timer configuration
    #[garde(dive)]
    pub timer: TimerConfig,

    /// Report and log output configuration
    #[garde(dive)]
    pub output: OutputConfig,
}

/// Lap timer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TimerConfig {
    /// Number of laps to record
    #[garde(range(min = 1, max = 1_000_000))]
    pub laps: usize,

    /// Sleep performed inside each lap (milliseconds)
    #[garde(range(min = 0, max = 60_000))]
    pub lap_interval_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    #[garde(skip)]
    pub format: OutputFormat,

    /// Emit logs as JSON lines
    #[garde(skip)]
    pub log_json: bool,

    /// Log filter used when `RUST_LOG` is unset
    #[garde(length(min = 1))]
    pub log_filter: String,
}

/// Report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable statistics block
    #[default]
    Text,
    /// Single JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CoreError::validation(
                "output.format",
                format!("Unknown output format: {other}"),
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            laps: 100,
            lap_interval_ms: 10,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_json: false,
            log_filter: "info".to_string(),
        }
    }
}

impl ProbeConfig {
    /// Load configuration from defaults, the optional file and the environment
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, an environment
    /// override is malformed, or the result fails validation.
    pub fn load() -> CoreResult<Self> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CoreError::config(format!("Cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse TOML text; missing keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid TOML for this structure.
    pub fn from_toml_str(contents: &str) -> CoreResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `LATENCYKIT_*` overrides read through `lookup`
    ///
    /// # Errors
    ///
    /// Returns error if an override cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(laps) = lookup(LAPS_ENV) {
            self.timer.laps = parse_override(LAPS_ENV, &laps)?;
        }
        if let Some(interval) = lookup(LAP_INTERVAL_ENV) {
            self.timer.lap_interval_ms = parse_override(LAP_INTERVAL_ENV, &interval)?;
        }
        if let Some(format) = lookup(OUTPUT_ENV) {
            self.output.format = format.parse()?;
        }
        if let Some(log_json) = lookup(LOG_JSON_ENV) {
            self.output.log_json = parse_flag(LOG_JSON_ENV, &log_json)?;
        }
        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if configuration validation fails.
    pub fn validate(&self) -> CoreResult<()> {
        garde::Validate::validate(self, &())
            .map_err(|e| CoreError::validation("config", format!("Validation failed: {e}")))
    }

    /// Get the per-lap sleep duration
    #[must_use]
    #[inline]
    pub const fn lap_interval(&self) -> Duration {
        Duration::from_millis(self.timer.lap_interval_ms)
    }
}

fn parse_override<T: FromStr>(name: &str, value: &str) -> CoreResult<T>
where
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| CoreError::validation(name, format!("Cannot parse '{value}': {e}")))
}

fn parse_flag(name: &str, value: &str) -> CoreResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CoreError::validation(
            name,
            format!("Expected a boolean, got '{other}'"),
        )),
    }
}
