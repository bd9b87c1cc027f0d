//! Lap timing
//!
//! A sequential instrumentation tool with no coupling to the containers:
//!
//! - [`lap_timer`] - records successive wall-clock intervals.
//! - [`stats`] - min / max / mean / median / standard deviation over laps.

pub mod lap_timer;
pub mod stats;

pub use lap_timer::LapTimer;
pub use stats::{LapStats, TimeUnit};
