//! Fixed-capacity circular FIFO queue
//!
//! Storage is an inline `[Option<T>; N]`, so a queue never touches the heap
//! after construction. `head` and `tail` wrap modulo `N`; `count` tells the
//! full state (`tail == head`) apart from the empty one.
//!
//! Capacity outcomes are not errors: a full queue rejects `push` with `false`
//! and an empty queue answers `pop` with `None`.

/// Bounded circular queue with compile-time capacity `N`
///
/// # Threading
/// Not synchronized. Every mutating operation takes `&mut self`.
///
/// # Example
///
/// ```rust
/// use latencykit_core::RingBufferQueue;
///
/// let mut queue = RingBufferQueue::<u32, 2>::new();
/// assert!(queue.push(1));
/// assert!(queue.push(2));
/// assert!(!queue.push(3));
/// assert_eq!(queue.pop(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct RingBufferQueue<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    tail: usize,
    count: usize,
}

impl<T, const N: usize> RingBufferQueue<T, N> {
    /// Capacity, checked at compile time; wrapping modulo zero is meaningless
    const CAPACITY: usize = {
        assert!(N > 0, "RingBufferQueue capacity must be > 0");
        N
    };

    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        let _ = Self::CAPACITY;
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Append `value` at the tail
    ///
    /// Returns `false` and leaves the queue untouched when it is full; the
    /// rejected value is dropped. Use [`Self::try_push`] to get it back.
    #[must_use = "a full queue rejects the value"]
    #[inline]
    pub fn push(&mut self, value: T) -> bool {
        self.try_push(value).is_ok()
    }

    /// Append `value` at the tail, handing it back if the queue is full
    ///
    /// # Errors
    ///
    /// Returns `Err(value)` when the queue already holds `N` items.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.count == Self::CAPACITY {
            return Err(value);
        }
        match self.slots.get_mut(self.tail) {
            Some(slot) => *slot = Some(value),
            None => return Err(value),
        }
        self.tail = (self.tail + 1) % Self::CAPACITY;
        self.count += 1;
        Ok(())
    }

    /// Remove and return the value at the head, or `None` when empty
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.slots.get_mut(self.head).and_then(Option::take)?;
        self.head = (self.head + 1) % Self::CAPACITY;
        self.count -= 1;
        Some(value)
    }

    /// Borrow the value at the head without removing it
    #[must_use]
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.slots.get(self.head).and_then(Option::as_ref)
    }

    /// Number of queued values
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Check if the queue is empty
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if the queue is full
    #[must_use]
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.count == N
    }

    /// Fixed capacity `N`
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drop every queued value and rewind both indices
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Iterate queued values from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count)
            .filter_map(move |offset| self.slots.get((self.head + offset) % N))
            .filter_map(Option::as_ref)
    }
}

impl<T, const N: usize> Default for RingBufferQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue() {
        let queue = RingBufferQueue::<i32, 8>::new();
        assert_eq!(queue.capacity(), 8);
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_capacity_three_scenario() {
        let mut queue = RingBufferQueue::<i32, 3>::new();
        assert!(queue.push(1));
        assert!(queue.push(2));
        assert!(queue.push(3));
        assert!(!queue.push(4));
        assert!(queue.is_full());

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert!(queue.push(4));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_rejected_push_does_not_mutate() {
        let mut queue = RingBufferQueue::<&str, 1>::new();
        assert!(queue.push("a"));
        assert_eq!(queue.try_push("b"), Err("b"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek(), Some(&"a"));
    }

    #[test]
    fn test_wraparound_many_cycles() {
        let mut queue = RingBufferQueue::<usize, 4>::new();
        for round in 0..50 {
            assert!(queue.push(round * 2));
            assert!(queue.push(round * 2 + 1));
            assert_eq!(queue.pop(), Some(round * 2));
            assert_eq!(queue.pop(), Some(round * 2 + 1));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_iter_follows_fifo_order() {
        let mut queue = RingBufferQueue::<u8, 3>::new();
        assert!(queue.push(1));
        assert!(queue.push(2));
        assert_eq!(queue.pop(), Some(1));
        assert!(queue.push(3));
        assert!(queue.push(4));

        let items: Vec<u8> = queue.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
    }

    #[test]
    fn test_clear() {
        let mut queue = RingBufferQueue::<String, 2>::new();
        assert!(queue.push("x".to_string()));
        assert!(queue.push("y".to_string()));
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.push("z".to_string()));
        assert_eq!(queue.pop().as_deref(), Some("z"));
    }
}
