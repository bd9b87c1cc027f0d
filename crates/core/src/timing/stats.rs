//! Descriptive statistics over recorded laps

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Unit used when exporting laps as floating point numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    /// Nanoseconds
    #[default]
    Nanoseconds,
    /// Microseconds
    Microseconds,
    /// Milliseconds
    Milliseconds,
    /// Seconds
    Seconds,
}

impl TimeUnit {
    /// Whole units contained in `duration`, truncated toward zero
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn count(self, duration: Duration) -> f64 {
        match self {
            Self::Nanoseconds => duration.as_nanos() as f64,
            Self::Microseconds => duration.as_micros() as f64,
            Self::Milliseconds => duration.as_millis() as f64,
            Self::Seconds => duration.as_secs() as f64,
        }
    }

    /// Short unit suffix
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
        }
    }
}

/// Summary of a set of laps, all values in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LapStats {
    /// Number of laps summarized
    pub count: usize,
    /// Shortest lap
    pub min_ns: u64,
    /// Longest lap
    pub max_ns: u64,
    /// Integer mean
    pub mean_ns: u64,
    /// Median; the mean of the two middle laps for an even count
    pub median_ns: u64,
    /// Population standard deviation around the integer mean
    pub std_dev_ns: f64,
}

impl LapStats {
    /// Summarize `laps`, or `None` if there are none
    #[must_use]
    pub fn from_laps(laps: &[Duration]) -> Option<Self> {
        let mut sorted: Vec<u64> = laps.iter().map(|lap| saturating_nanos(*lap)).collect();
        sorted.sort_unstable();

        let count = sorted.len();
        let min_ns = *sorted.first()?;
        let max_ns = *sorted.last()?;

        let sum: u128 = sorted.iter().map(|&ns| u128::from(ns)).sum();
        let divisor = u128::try_from(count).unwrap_or(u128::MAX);
        let mean_ns = u64::try_from(sum / divisor).unwrap_or(u64::MAX);

        let middle = count / 2;
        let median_ns = if count % 2 == 0 {
            let low = u128::from(*sorted.get(middle - 1)?);
            let high = u128::from(*sorted.get(middle)?);
            u64::try_from((low + high) / 2).unwrap_or(u64::MAX)
        } else {
            *sorted.get(middle)?
        };

        #[allow(clippy::cast_precision_loss)]
        let variance = sorted
            .iter()
            .map(|&ns| {
                let diff = ns as f64 - mean_ns as f64;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;

        Some(Self {
            count,
            min_ns,
            max_ns,
            mean_ns,
            median_ns,
            std_dev_ns: variance.sqrt(),
        })
    }

    /// Shortest lap
    #[must_use]
    pub const fn min(&self) -> Duration {
        Duration::from_nanos(self.min_ns)
    }

    /// Longest lap
    #[must_use]
    pub const fn max(&self) -> Duration {
        Duration::from_nanos(self.max_ns)
    }

    /// Mean lap
    #[must_use]
    pub const fn mean(&self) -> Duration {
        Duration::from_nanos(self.mean_ns)
    }

    /// Median lap
    #[must_use]
    pub const fn median(&self) -> Duration {
        Duration::from_nanos(self.median_ns)
    }
}

impl fmt::Display for LapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics (in nanoseconds):")?;
        writeln!(f, "Min  : {} ns", self.min_ns)?;
        writeln!(f, "Max  : {} ns", self.max_ns)?;
        writeln!(f, "Avg  : {} ns", self.mean_ns)?;
        writeln!(f, "Med  : {} ns", self.median_ns)?;
        write!(f, "StdDev: {:.3} ns", self.std_dev_ns)
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
