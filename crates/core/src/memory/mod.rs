//! Memory Management - Fixed Object Pools
//!
//! Implements slot-based memory management with:
//! - Storage reserved once, at construction, for exactly `N` objects
//! - Constant-time allocation and release through an index-linked free list
//! - Handles instead of raw pointers, so no slot storage is ever reinterpreted
//!
//! Pools are single-threaded; wrap them in an external lock to share.

pub mod pool;

pub use pool::{PoolAllocator, PoolHandle, PoolStats};
