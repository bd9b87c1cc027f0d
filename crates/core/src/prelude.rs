//! `LatencyKit` Core Prelude
//!
//! Common imports for `LatencyKit` core functionality.
//! Import this module to get access to the most commonly used types and traits.

// Re-export containers
pub use crate::collections::{EnumKeyedMap, Ordinal, RingBufferQueue};
pub use crate::memory::{PoolAllocator, PoolHandle};

// Re-export timing
pub use crate::timing::{LapStats, LapTimer, TimeUnit};

// Re-export core types
pub use crate::config::{OutputFormat, ProbeConfig};
pub use crate::error::{CoreError, CoreResult, MapError, TimerError};

// Re-export commonly used std types
pub use std::time::{Duration, Instant};
