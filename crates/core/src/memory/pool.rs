//! Constant-time pool allocator over a fixed slot array
//!
//! Implements a fixed pool with:
//! - `N` inline slots, each explicitly tagged as free or live
//! - A singly linked free list threaded through the free slots by index
//! - O(1) `allocate` / `deallocate` with no search and no heap traffic
//! - Lightweight allocation statistics
//!
//! A free slot stores only the index of the next free slot; a live slot
//! stores the caller's value (or nothing, until the caller writes one). The
//! two states never coexist, so the free-list link costs no extra space per
//! slot beyond the tag.

use std::mem;

/// Handle to a live pool slot
///
/// Handles are plain indices. A handle stays meaningful only until it is
/// passed to [`PoolAllocator::deallocate`]; after that the slot may be handed
/// out again and the old handle aliases the new owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolHandle(usize);

impl PoolHandle {
    /// Slot index inside the pool
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Slot state
#[derive(Debug, Clone)]
enum Slot<T> {
    /// On the free list; `next` is the following free slot
    Free { next: Option<usize> },
    /// Handed out; `None` until the caller constructs a value
    Live(Option<T>),
}

/// Pool allocation statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Successful allocations
    pub total_allocations: u64,
    /// Deallocations that returned a slot to the free list
    pub total_deallocations: u64,
    /// Allocation attempts that found the pool exhausted
    pub exhausted_requests: u64,
    /// Highest number of simultaneously live slots
    pub peak_live: usize,
}

impl PoolStats {
    /// Peak utilization ratio (0.0-1.0) for a pool of `capacity` slots
    #[must_use]
    pub fn peak_utilization(&self, capacity: usize) -> f64 {
        if capacity == 0 {
            return 0.0_f64;
        }
        f64::from(u32::try_from(self.peak_live).unwrap_or(u32::MAX))
            / f64::from(u32::try_from(capacity).unwrap_or(u32::MAX))
    }

    fn record_allocation(&mut self, live: usize) {
        self.total_allocations += 1;
        self.peak_live = self.peak_live.max(live);
    }

    fn record_deallocation(&mut self) {
        self.total_deallocations += 1;
    }

    fn record_exhaustion(&mut self) {
        self.exhausted_requests += 1;
    }
}

/// Fixed-capacity object pool with an index-linked free list
///
/// # Contract
///
/// At most `N` slots are live at once; further requests get `None`.
/// Deallocating a handle that belongs to a different pool is a contract
/// violation that is not detected when its index is live here. Handles that
/// are out of range or already free are ignored, so a double free cannot
/// corrupt the free list.
///
/// # Example
///
/// ```rust
/// use latencykit_core::PoolAllocator;
///
/// let mut pool = PoolAllocator::<u64, 2>::new();
/// let a = pool.allocate_with(7).ok();
/// let b = pool.allocate();
/// assert!(a.is_some() && b.is_some());
/// assert!(pool.allocate().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PoolAllocator<T, const N: usize> {
    slots: [Slot<T>; N],
    free_head: Option<usize>,
    live: usize,
    stats: PoolStats,
}

impl<T, const N: usize> PoolAllocator<T, N> {
    /// Capacity, checked at compile time; an empty pool has no chain to build
    const CAPACITY: usize = {
        assert!(N > 0, "PoolAllocator capacity must be > 0");
        N
    };

    /// Create a pool with every slot on the free list, in index order
    #[must_use]
    pub fn new() -> Self {
        let capacity = Self::CAPACITY;
        Self {
            slots: std::array::from_fn(|index| Slot::Free {
                next: (index + 1 < capacity).then_some(index + 1),
            }),
            free_head: Some(0),
            live: 0,
            stats: PoolStats::default(),
        }
    }

    /// Detach the head of the free list
    ///
    /// The slot starts out empty; store a value with [`Self::write`] or use
    /// [`Self::allocate_with`]. Returns `None` when all `N` slots are live.
    #[must_use]
    #[inline]
    pub fn allocate(&mut self) -> Option<PoolHandle> {
        let Some(index) = self.free_head else {
            self.stats.record_exhaustion();
            return None;
        };
        let slot = self.slots.get_mut(index)?;
        let Slot::Free { next } = *slot else {
            return None;
        };

        *slot = Slot::Live(None);
        self.free_head = next;
        self.live += 1;
        self.stats.record_allocation(self.live);
        Some(PoolHandle(index))
    }

    /// Allocate a slot and move `value` into it
    ///
    /// # Errors
    ///
    /// Returns `Err(value)` when the pool is exhausted.
    #[inline]
    pub fn allocate_with(&mut self, value: T) -> Result<PoolHandle, T> {
        match self.allocate() {
            Some(handle) => {
                if let Some(Slot::Live(stored)) = self.slots.get_mut(handle.0) {
                    *stored = Some(value);
                }
                Ok(handle)
            }
            None => Err(value),
        }
    }

    /// Push the slot behind `handle` onto the front of the free list
    ///
    /// Returns the value the slot held, if any. Out-of-range handles and
    /// slots that are already free are left alone.
    #[inline]
    pub fn deallocate(&mut self, handle: PoolHandle) -> Option<T> {
        let index = handle.0;
        let free_head = self.free_head;
        let slot = self.slots.get_mut(index)?;
        if matches!(slot, Slot::Free { .. }) {
            return None;
        }

        let previous = mem::replace(slot, Slot::Free { next: free_head });
        self.free_head = Some(index);
        self.live -= 1;
        self.stats.record_deallocation();
        match previous {
            Slot::Live(value) => value,
            Slot::Free { .. } => None,
        }
    }

    /// [`Self::deallocate`] for an optional handle; `None` is a no-op
    #[inline]
    pub fn deallocate_opt(&mut self, handle: Option<PoolHandle>) -> Option<T> {
        handle.and_then(|handle| self.deallocate(handle))
    }

    /// Store `value` in a live slot, returning the value it replaces
    ///
    /// # Errors
    ///
    /// Returns `Err(value)` if `handle` does not refer to a live slot.
    pub fn write(&mut self, handle: PoolHandle, value: T) -> Result<Option<T>, T> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Live(stored)) => Ok(stored.replace(value)),
            _ => Err(value),
        }
    }

    /// Borrow the value in a live slot
    #[must_use]
    #[inline]
    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        match self.slots.get(handle.0) {
            Some(Slot::Live(stored)) => stored.as_ref(),
            _ => None,
        }
    }

    /// Mutably borrow the value in a live slot
    #[inline]
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut T> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Live(stored)) => stored.as_mut(),
            _ => None,
        }
    }

    /// Move the value out of a live slot, leaving the slot allocated but empty
    pub fn take(&mut self, handle: PoolHandle) -> Option<T> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Live(stored)) => stored.take(),
            _ => None,
        }
    }

    /// Check whether `handle` refers to a live slot of this pool
    #[must_use]
    pub fn is_live(&self, handle: PoolHandle) -> bool {
        matches!(self.slots.get(handle.0), Some(Slot::Live(_)))
    }

    /// Number of live slots
    #[must_use]
    #[inline]
    pub const fn live(&self) -> usize {
        self.live
    }

    /// Number of slots that can still be allocated
    #[must_use]
    #[inline]
    pub const fn available(&self) -> usize {
        N - self.live
    }

    /// Fixed capacity `N`
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Check whether the free list is empty
    #[must_use]
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.free_head.is_none()
    }

    /// Allocation statistics
    #[must_use]
    pub const fn stats(&self) -> &PoolStats {
        &self.stats
    }

    /// Walk the free list and count its links
    ///
    /// O(N); the walk stops after `N` links so a corrupted chain cannot loop.
    #[must_use]
    pub fn free_chain_len(&self) -> usize {
        let mut length = 0;
        let mut cursor = self.free_head;
        while let Some(index) = cursor {
            if length == N {
                break;
            }
            length += 1;
            cursor = match self.slots.get(index) {
                Some(Slot::Free { next }) => *next,
                _ => None,
            };
        }
        length
    }
}

impl<T, const N: usize> Default for PoolAllocator<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_creation() {
        let pool = PoolAllocator::<u32, 4>::new();
        assert_eq!(pool.capacity(), 4);
        assert_eq!(pool.live(), 0);
        assert_eq!(pool.available(), 4);
        assert_eq!(pool.free_chain_len(), 4);
        assert!(!pool.is_exhausted());
    }

    #[test]
    fn test_capacity_two_scenario() {
        let mut pool = PoolAllocator::<u32, 2>::new();
        let p1 = pool.allocate();
        let p2 = pool.allocate();
        assert!(p1.is_some());
        assert!(p2.is_some());
        assert_ne!(p1, p2);
        assert!(pool.allocate().is_none());

        pool.deallocate_opt(p1);
        assert_eq!(pool.allocate(), p1);
    }

    #[test]
    fn test_handles_are_distinct() {
        let mut pool = PoolAllocator::<u8, 16>::new();
        let handles: HashSet<PoolHandle> = (0..16).filter_map(|_| pool.allocate()).collect();
        assert_eq!(handles.len(), 16);
        assert!(pool.is_exhausted());
        assert_eq!(pool.free_chain_len(), 0);
    }

    #[test]
    fn test_values_round_through_slots() {
        let mut pool = PoolAllocator::<String, 2>::new();
        let handle = pool.allocate_with("order".to_string());
        assert!(handle.is_ok());
        let Ok(handle) = handle else { return };

        assert_eq!(pool.get(handle).map(String::as_str), Some("order"));
        if let Some(value) = pool.get_mut(handle) {
            value.push_str("-1");
        }
        assert_eq!(pool.deallocate(handle).as_deref(), Some("order-1"));
        assert!(!pool.is_live(handle));
        assert_eq!(pool.get(handle), None);
    }

    #[test]
    fn test_allocate_leaves_slot_empty() {
        let mut pool = PoolAllocator::<u64, 1>::new();
        let Some(handle) = pool.allocate() else {
            return;
        };
        assert!(pool.is_live(handle));
        assert_eq!(pool.get(handle), None);
        assert_eq!(pool.write(handle, 9), Ok(None));
        assert_eq!(pool.write(handle, 10), Ok(Some(9)));
        assert_eq!(pool.take(handle), Some(10));
        assert!(pool.is_live(handle));
    }

    #[test]
    fn test_double_free_is_ignored() {
        let mut pool = PoolAllocator::<u8, 3>::new();
        let Some(handle) = pool.allocate() else {
            return;
        };
        pool.deallocate(handle);
        assert_eq!(pool.deallocate(handle), None);
        assert_eq!(pool.live(), 0);
        assert_eq!(pool.free_chain_len(), 3);
        assert_eq!(pool.write(handle, 1), Err(1));
    }

    #[test]
    fn test_deallocate_none_is_noop() {
        let mut pool = PoolAllocator::<u32, 3>::new();
        assert!(pool.allocate_with(5).is_ok());
        let before = pool.stats().total_deallocations;

        assert_eq!(pool.deallocate_opt(None), None);
        assert_eq!(pool.live(), 1);
        assert_eq!(pool.free_chain_len(), 2);
        assert_eq!(pool.stats().total_deallocations, before);
    }

    #[test]
    fn test_foreign_out_of_range_handle_is_ignored() {
        let mut big = PoolAllocator::<u8, 8>::new();
        let mut small = PoolAllocator::<u8, 2>::new();
        let mut last = None;
        for _ in 0..8 {
            last = big.allocate();
        }
        assert_eq!(last.map(PoolHandle::index), Some(7));
        assert_eq!(small.deallocate_opt(last), None);
        assert_eq!(small.free_chain_len(), 2);
    }

    #[test]
    fn test_lifo_reuse() {
        let mut pool = PoolAllocator::<u8, 4>::new();
        let a = pool.allocate();
        let b = pool.allocate();
        pool.deallocate_opt(a);
        pool.deallocate_opt(b);
        assert_eq!(pool.allocate(), b);
        assert_eq!(pool.allocate(), a);
    }

    #[test]
    fn test_stats() {
        let mut pool = PoolAllocator::<u8, 2>::new();
        let a = pool.allocate();
        let _b = pool.allocate();
        assert!(pool.allocate().is_none());
        pool.deallocate_opt(a);

        let stats = pool.stats();
        assert_eq!(stats.total_allocations, 2);
        assert_eq!(stats.total_deallocations, 1);
        assert_eq!(stats.exhausted_requests, 1);
        assert_eq!(stats.peak_live, 2);
        assert!((stats.peak_utilization(pool.capacity()) - 1.0_f64).abs() < f64::EPSILON);
    }
}
