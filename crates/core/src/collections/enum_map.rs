//! Dense map keyed by small enum-like ordinals
//!
//! Two storages back the map:
//! - **dense**: up to `N` `(key, value)` pairs in insertion order, reserved
//!   once at construction and never reallocated;
//! - **sparse**: a `[Option<usize>; D]` table translating a key ordinal into
//!   its dense position.
//!
//! `D` is the ordinal domain. It defaults to 16 and is independent of `N`: a
//! map with `N > D` is accepted but can never hold more than `D` keys, and any
//! key whose ordinal is `>= D` is rejected with [`MapError::KeyOutOfRange`].
//!
//! Entries are never removed one by one; [`EnumKeyedMap::clear`] resets the
//! whole map.

use crate::error::{CoreResult, MapError};

/// Default size of the sparse ordinal table
pub const DEFAULT_ORDINAL_DOMAIN: usize = 16;

/// Keys usable in an [`EnumKeyedMap`]
///
/// The ordinal must be stable for a given key and distinct keys must have
/// distinct ordinals. Fieldless enums get an implementation from
/// [`impl_ordinal!`](crate::impl_ordinal).
pub trait Ordinal {
    /// Zero-based position of the key in its domain
    fn ordinal(&self) -> usize;
}

macro_rules! impl_ordinal_for_int {
    ($($t:ty),*) => {
        $(
            impl Ordinal for $t {
                #[inline]
                fn ordinal(&self) -> usize {
                    usize::from(*self)
                }
            }
        )*
    };
}

impl_ordinal_for_int!(u8, u16, bool);

impl Ordinal for usize {
    #[inline]
    fn ordinal(&self) -> usize {
        *self
    }
}

impl Ordinal for u32 {
    #[inline]
    fn ordinal(&self) -> usize {
        usize::try_from(*self).unwrap_or(usize::MAX)
    }
}

/// Implement [`Ordinal`] for fieldless `Copy` enums using their discriminant
///
/// ```rust
/// use latencykit_core::{impl_ordinal, Ordinal};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Side {
///     Bid,
///     Ask,
/// }
/// impl_ordinal!(Side);
///
/// assert_eq!(Side::Ask.ordinal(), 1);
/// ```
#[macro_export]
macro_rules! impl_ordinal {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::Ordinal for $t {
                #[inline]
                fn ordinal(&self) -> usize {
                    *self as usize
                }
            }
        )+
    };
}

/// Fixed-capacity map from ordinal keys to values
///
/// Lookups are a bounds check plus two array reads. Inserting a key that is
/// already present overwrites its value in place without growing the map.
///
/// # Example
///
/// ```rust
/// use latencykit_core::{CoreResult, EnumKeyedMap};
///
/// fn main() -> CoreResult<()> {
///     let mut map = EnumKeyedMap::<u8, &str, 4>::new();
///     map.insert(3, "three")?;
///     map.insert(1, "one")?;
///     assert_eq!(map.find(&3), Some(&"three"));
///     assert_eq!(map.size(), 2);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct EnumKeyedMap<K, V, const N: usize, const D: usize = DEFAULT_ORDINAL_DOMAIN> {
    dense: Vec<(K, V)>,
    sparse: [Option<usize>; D],
}

impl<K: Ordinal, V, const N: usize, const D: usize> EnumKeyedMap<K, V, N, D> {
    /// Create an empty map, reserving dense storage for `N` entries
    #[must_use]
    pub fn new() -> Self {
        Self {
            dense: Vec::with_capacity(N),
            sparse: [None; D],
        }
    }

    /// Insert `value` under `key`, overwriting any value already stored
    ///
    /// # Errors
    ///
    /// - [`MapError::KeyOutOfRange`] if `key.ordinal() >= D`
    /// - [`MapError::MapFull`] if `key` is new and the map holds `N` entries
    pub fn insert(&mut self, key: K, value: V) -> CoreResult<()> {
        match self.locate(&key)? {
            Some(position) => {
                if let Some(entry) = self.dense.get_mut(position) {
                    entry.1 = value;
                }
            }
            None => {
                self.append(key, value)?;
            }
        }
        Ok(())
    }

    /// Borrow the value stored under `key`
    ///
    /// Out-of-range and never-inserted keys are both absent.
    #[must_use]
    #[inline]
    pub fn find(&self, key: &K) -> Option<&V> {
        let position = self.sparse.get(key.ordinal()).copied().flatten()?;
        self.dense.get(position).map(|(_, value)| value)
    }

    /// Mutably borrow the value stored under `key`
    #[inline]
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = self.sparse.get(key.ordinal()).copied().flatten()?;
        self.dense.get_mut(position).map(|(_, value)| value)
    }

    /// Value under `key`, inserting `V::default()` first if it is missing
    ///
    /// This is the subscript operation; it can grow the map.
    ///
    /// # Errors
    ///
    /// Fails exactly like [`Self::insert`] when the key has to be added.
    pub fn index(&mut self, key: K) -> CoreResult<&mut V>
    where
        V: Default,
    {
        let position = match self.locate(&key)? {
            Some(position) => position,
            None => self.append(key, V::default())?,
        };
        self.dense
            .get_mut(position)
            .map(|(_, value)| value)
            .ok_or_else(|| MapError::MapFull { capacity: N }.into())
    }

    /// Check whether `key` has a value
    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Number of stored entries
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.dense.len()
    }

    /// Alias of [`Self::size`]
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Check if the map is empty
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Maximum number of entries `N`
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Size `D` of the ordinal domain
    #[must_use]
    #[inline]
    pub const fn domain(&self) -> usize {
        D
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[(K, V)] {
        &self.dense
    }

    /// Iterate `(key, value)` pairs in insertion order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.dense.iter(),
        }
    }

    /// Iterate `(key, value)` pairs in insertion order with mutable values
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.dense.iter_mut(),
        }
    }

    /// Remove every entry, keeping the reserved storage
    pub fn clear(&mut self) {
        self.dense.clear();
        self.sparse = [None; D];
    }

    /// Dense position of `key`, or `None` if it has not been inserted
    fn locate(&self, key: &K) -> CoreResult<Option<usize>> {
        let ordinal = key.ordinal();
        self.sparse
            .get(ordinal)
            .copied()
            .ok_or_else(|| MapError::KeyOutOfRange { ordinal, domain: D }.into())
    }

    /// Push a new entry at the end of dense storage and return its position
    fn append(&mut self, key: K, value: V) -> CoreResult<usize> {
        let ordinal = key.ordinal();
        if self.dense.len() >= N {
            return Err(MapError::MapFull { capacity: N }.into());
        }
        let slot = self
            .sparse
            .get_mut(ordinal)
            .ok_or(MapError::KeyOutOfRange { ordinal, domain: D })?;

        let position = self.dense.len();
        *slot = Some(position);
        // len < N == reserved capacity, so this never reallocates
        self.dense.push((key, value));
        Ok(position)
    }
}

impl<K: Ordinal, V, const N: usize, const D: usize> Default for EnumKeyedMap<K, V, N, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, const N: usize, const D: usize> Clone for EnumKeyedMap<K, V, N, D> {
    fn clone(&self) -> Self {
        // `Vec::clone` would shrink the reservation to `len`.
        let mut dense = Vec::with_capacity(N);
        dense.extend(self.dense.iter().cloned());
        Self {
            dense,
            sparse: self.sparse,
        }
    }
}

/// Borrowing iterator over an [`EnumKeyedMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Mutable iterator over an [`EnumKeyedMap`]
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    inner: std::slice::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (&*key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<'a, K: Ordinal, V, const N: usize, const D: usize> IntoIterator
    for &'a EnumKeyedMap<K, V, N, D>
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: Ordinal, V, const N: usize, const D: usize> IntoIterator
    for &'a mut EnumKeyedMap<K, V, N, D>
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
