//! Key orders injected into a heap
//!
//! A [`KeyOrder`] compares two keys and may refuse to: `compare` returns
//! `None` for keys it cannot order. A heap accepts a key only if the order can
//! compare it with itself, which is how `f64::NAN` (under [`PartialOrder`])
//! or a `None` key (under a closure that rejects it) become
//! [`HeapError::InvalidKey`](crate::HeapError::InvalidKey).
//!
//! Over the keys it accepts, an order must be total. Two accepted keys that
//! still compare as `None` are treated as equal.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Comparator strategy for heap keys
pub trait KeyOrder<K: ?Sized> {
    /// Compares `a` with `b`, or returns `None` if they cannot be ordered
    fn compare(&self, a: &K, b: &K) -> Option<Ordering>;

    /// Returns true if `key` can be stored under this order
    fn accepts(&self, key: &K) -> bool {
        self.compare(key, key).is_some()
    }
}

/// A zero-sized order that delegates to the [`Ord`] implementation of `K`
pub struct NaturalOrder<K: ?Sized>(PhantomData<fn(&K)>);

impl<K: ?Sized> NaturalOrder<K> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K: ?Sized> Default for NaturalOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized> Clone for NaturalOrder<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for NaturalOrder<K> {}

impl<K: ?Sized> fmt::Debug for NaturalOrder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NaturalOrder")
    }
}

impl<K: ?Sized + Ord> KeyOrder<K> for NaturalOrder<K> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

/// An order that delegates to [`PartialOrd`], rejecting incomparable keys
///
/// ```rust
/// use adaptable_heap::order::{KeyOrder, PartialOrder};
///
/// let order = PartialOrder::<f64>::new();
/// assert!(order.accepts(&1.5));
/// assert!(!order.accepts(&f64::NAN));
/// ```
pub struct PartialOrder<K: ?Sized>(PhantomData<fn(&K)>);

impl<K: ?Sized> PartialOrder<K> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K: ?Sized> Default for PartialOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized> Clone for PartialOrder<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for PartialOrder<K> {}

impl<K: ?Sized> fmt::Debug for PartialOrder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PartialOrder")
    }
}

impl<K: ?Sized + PartialOrd> KeyOrder<K> for PartialOrder<K> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Reverses another order, turning the min-heap into a max-heap
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseOrder<O>(pub O);

impl<K: ?Sized, O: KeyOrder<K>> KeyOrder<K> for ReverseOrder<O> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        self.0.compare(a, b).map(Ordering::reverse)
    }

    fn accepts(&self, key: &K) -> bool {
        self.0.accepts(key)
    }
}

/// An order backed by a closure
///
/// ```rust
/// use adaptable_heap::order::{FnOrder, KeyOrder};
///
/// // Orders `Some` keys, rejects `None`
/// let order = FnOrder::new(|a: &Option<u32>, b: &Option<u32>| Some((*a)?.cmp(&(*b)?)));
/// assert!(order.accepts(&Some(3)));
/// assert!(!order.accepts(&None));
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F>(F);

impl<F> FnOrder<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder")
    }
}

impl<K: ?Sized, F: Fn(&K, &K) -> Option<Ordering>> KeyOrder<K> for FnOrder<F> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        (self.0)(a, b)
    }
}
