//! Fixed-capacity collections
//!
//! Both collections reserve all of their storage up front and never grow:
//!
//! - [`ring_buffer`] - circular FIFO queue with inline `[Option<T>; N]` slots.
//! - [`enum_map`] - dense map keyed by small ordinals through a sparse index table.
//!
//! Neither is synchronized; share an instance across threads only behind an
//! external lock.

pub mod enum_map;
pub mod ring_buffer;

pub use enum_map::{EnumKeyedMap, Iter, IterMut, Ordinal, DEFAULT_ORDINAL_DOMAIN};
pub use ring_buffer::RingBufferQueue;
