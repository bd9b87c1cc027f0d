//! Wall-clock lap timer
//!
//! Each lap is the time elapsed since the previous lap (or since the last
//! reset). Laps are kept in a vector reserved at construction, so a timer
//! created with [`LapTimer::with_capacity`] records through
//! [`LapTimer::lap_fixed`] without allocating.

use std::time::{Duration, Instant};

use super::stats::{LapStats, TimeUnit};
use crate::error::{CoreResult, TimerError};

/// Records successive elapsed intervals
#[derive(Debug, Clone)]
pub struct LapTimer {
    start: Instant,
    laps: Vec<Duration>,
    capacity: usize,
}

impl LapTimer {
    /// Create a timer with no reserved lap storage
    ///
    /// [`Self::lap`] grows the storage as needed; [`Self::lap_fixed`] fails
    /// immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a timer with storage for `capacity` laps
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            start: Instant::now(),
            laps: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Restart the clock and forget every recorded lap
    pub fn reset(&mut self) {
        tracing::debug!(recorded = self.laps.len(), "Resetting lap timer");
        self.laps.clear();
        self.start = Instant::now();
    }

    /// Record the time since the previous lap, growing storage if needed
    pub fn lap(&mut self) -> Duration {
        let elapsed = self.restart();
        self.laps.push(elapsed);
        elapsed
    }

    /// Record the time since the previous lap into reserved storage
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::CapacityExceeded`] once `capacity` laps have been
    /// recorded. The clock is not restarted in that case.
    pub fn lap_fixed(&mut self) -> CoreResult<Duration> {
        if self.laps.len() >= self.capacity {
            tracing::warn!(capacity = self.capacity, "Lap timer capacity exceeded");
            return Err(TimerError::CapacityExceeded {
                capacity: self.capacity,
            }
            .into());
        }
        Ok(self.lap())
    }

    /// Time elapsed since the previous lap, without recording it
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Recorded laps, oldest first
    #[must_use]
    pub fn laps(&self) -> &[Duration] {
        &self.laps
    }

    /// Number of recorded laps
    #[must_use]
    pub fn len(&self) -> usize {
        self.laps.len()
    }

    /// Check if no lap has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    /// Number of laps [`Self::lap_fixed`] accepts
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Take ownership of the recorded laps
    #[must_use]
    pub fn into_laps(self) -> Vec<Duration> {
        self.laps
    }

    /// Recorded laps as whole units of `unit`
    #[must_use]
    pub fn laps_as(&self, unit: TimeUnit) -> Vec<f64> {
        self.laps.iter().map(|lap| unit.count(*lap)).collect()
    }

    /// Recorded laps in whole microseconds
    #[must_use]
    pub fn laps_as_micros(&self) -> Vec<f64> {
        self.laps_as(TimeUnit::Microseconds)
    }

    /// Summary statistics, or `None` before the first lap
    #[must_use]
    pub fn stats(&self) -> Option<LapStats> {
        LapStats::from_laps(&self.laps)
    }

    fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start);
        self.start = now;
        elapsed
    }
}

impl Default for LapTimer {
    fn default() -> Self {
        Self::new()
    }
}
