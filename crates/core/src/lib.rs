//! `LatencyKit` Core - Fixed-Capacity Containers for Latency-Sensitive Code
//!
//! This crate provides generic container primitives whose storage is reserved
//! once, at construction, and never grows afterwards.
//!
//! # Features
//!
//! - **Predictable cost**: every container operation is O(1)
//! - **No allocation after construction**: capacities are const generics
//! - **Zero unsafe**: free lists and sparse tables link by index, not by address
//! - **Two failure styles**: capacity outcomes are `bool`/`Option`, contract
//!   violations are [`CoreError`]
//!
//! # Architecture
//!
//! - [`collections`] - circular FIFO queue and enum-keyed dense map
//! - [`memory`] - constant-time pool allocator
//! - [`timing`] - lap timer with summary statistics
//! - [`config`] - validated probe configuration
//!
//! # Example
//!
//! ```rust
//! use latencykit_core::{CoreResult, EnumKeyedMap, PoolAllocator, RingBufferQueue};
//!
//! fn main() -> CoreResult<()> {
//!     let mut pool = PoolAllocator::<u64, 4>::new();
//!     let mut queue = RingBufferQueue::<_, 4>::new();
//!
//!     if let Ok(handle) = pool.allocate_with(42) {
//!         assert!(queue.push(handle));
//!     }
//!
//!     let mut counts = EnumKeyedMap::<u8, u32, 4>::new();
//!     *counts.index(3)? += 1;
//!     assert_eq!(counts.find(&3), Some(&1));
//!     Ok(())
//! }
//! ```
//!
//! # Threading
//!
//! Nothing here is synchronized. All mutation goes through `&mut self`;
//! callers sharing an instance across threads must provide their own lock.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::large_stack_arrays,
    clippy::indexing_slicing,
    missing_docs,
    unsafe_code
)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::correctness,
    clippy::suspicious,
    clippy::perf,
    clippy::style,
    clippy::complexity,
    clippy::unreachable,
    clippy::default_numeric_fallback,
    clippy::redundant_pattern_matching,
    clippy::manual_let_else,
    clippy::needless_pass_by_ref_mut,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::float_cmp
)]
#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Public modules
pub mod config;
pub mod error;
pub mod prelude;

// Core functionality modules
pub mod collections;
pub mod memory;
pub mod timing;

// Re-exports for convenience
pub use collections::{EnumKeyedMap, Ordinal, RingBufferQueue, DEFAULT_ORDINAL_DOMAIN};
pub use config::ProbeConfig;
pub use error::{CoreError, CoreResult, MapError, TimerError};
pub use memory::{PoolAllocator, PoolHandle, PoolStats};
pub use timing::{LapStats, LapTimer, TimeUnit};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: VERSION,
    git_hash: match option_env!("GIT_HASH") {
        Some(hash) => hash,
        None => "unknown",
    },
    profile: if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    },
};

/// Build information structure
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Crate version
    pub version: &'static str,
    /// Git commit hash, from `GIT_HASH` at compile time
    pub git_hash: &'static str,
    /// Build profile
    pub profile: &'static str,
}
