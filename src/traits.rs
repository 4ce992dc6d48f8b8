//! Common traits for priority queues
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: Base trait for min lookup, insertion and extract-min
//! - [`AdaptablePriorityQueue`]: Extended trait adding handle-based removal
//!   and key/value replacement for arbitrary entries
//!
//! Unlike `std::collections::BinaryHeap`, failures are reported through
//! [`HeapError`] rather than `Option`: an empty queue, a key the configured
//! order cannot compare, and a stale or foreign handle are distinct errors.
//! The provided [`PriorityQueue::peek`] and [`PriorityQueue::pop`] methods
//! give the familiar `Option` shape when the distinction does not matter.

use std::fmt;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The operation needs at least one element but the structure is empty
    EmptyStructure,
    /// The key cannot be ordered under the configured order
    InvalidKey,
    /// The handle was not issued by this queue or its entry was already removed
    InvalidEntry,
    /// The order can only be replaced while the queue is empty
    NotEmpty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyStructure => write!(f, "structure is empty"),
            HeapError::InvalidKey => {
                write!(f, "key cannot be ordered under the configured order")
            }
            HeapError::InvalidEntry => {
                write!(f, "handle does not refer to a live entry of this queue")
            }
            HeapError::NotEmpty => {
                write!(f, "order can only be replaced on an empty queue")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an entry in a queue, used for adaptable operations
///
/// This is an opaque type that identifies a specific entry. It stays valid
/// across unrelated insertions and removals until its own entry is removed.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for min-priority queues storing `(key, value)` pairs
///
/// # Example
///
/// ```rust
/// use adaptable_heap::{LinkedHeap, PriorityQueue};
///
/// let mut heap = LinkedHeap::new();
/// heap.insert(3, "three").unwrap();
/// heap.insert(1, "one").unwrap();
///
/// assert_eq!(heap.min(), Ok((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// assert_eq!(heap.pop(), Some((3, "three")));
/// assert_eq!(heap.pop(), None);
/// ```
pub trait PriorityQueue<K, V> {
    /// Returns the number of entries
    fn len(&self) -> usize;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the entry with the minimum key without removing it
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the queue is empty.
    fn min(&self) -> Result<(&K, &V), HeapError>;

    /// Inserts a key-value pair
    ///
    /// # Errors
    /// [`HeapError::InvalidKey`] if the key cannot be ordered; the queue is
    /// left unchanged.
    fn insert(&mut self, key: K, value: V) -> Result<(), HeapError>;

    /// Removes and returns the entry with the minimum key
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the queue is empty.
    fn remove_min(&mut self) -> Result<(K, V), HeapError>;

    /// `Option`-shaped [`min`](Self::min)
    fn peek(&self) -> Option<(&K, &V)> {
        self.min().ok()
    }

    /// `Option`-shaped [`remove_min`](Self::remove_min)
    fn pop(&mut self) -> Option<(K, V)> {
        self.remove_min().ok()
    }
}

/// Priority queue supporting removal and update of arbitrary entries
///
/// # Example
///
/// ```rust
/// use adaptable_heap::{AdaptablePriorityQueue, LinkedHeap, PriorityQueue};
///
/// let mut heap = LinkedHeap::new();
/// let a = heap.insert_with_handle(10, "a").unwrap();
/// let b = heap.insert_with_handle(20, "b").unwrap();
///
/// heap.replace_key(&b, 5).unwrap();
/// assert_eq!(heap.min(), Ok((&5, &"b")));
///
/// assert_eq!(heap.remove(&a), Ok((10, "a")));
/// assert!(heap.remove(&a).is_err());
/// ```
pub trait AdaptablePriorityQueue<K, V>: PriorityQueue<K, V> {
    /// The handle type issued by this queue
    type Handle: Handle;

    /// Inserts a key-value pair, returning a handle to the new entry
    ///
    /// # Errors
    /// [`HeapError::InvalidKey`] if the key cannot be ordered.
    fn insert_with_handle(&mut self, key: K, value: V) -> Result<Self::Handle, HeapError>;

    /// Removes the entry named by `handle`
    ///
    /// # Errors
    /// - [`HeapError::InvalidEntry`] if the handle is foreign or stale
    /// - [`HeapError::EmptyStructure`] if the queue is empty
    fn remove(&mut self, handle: &Self::Handle) -> Result<(K, V), HeapError>;

    /// Replaces the key of an entry, returning the old key
    ///
    /// # Errors
    /// - [`HeapError::InvalidEntry`] if the handle is foreign or stale
    /// - [`HeapError::InvalidKey`] if the new key cannot be ordered
    fn replace_key(&mut self, handle: &Self::Handle, key: K) -> Result<K, HeapError>;

    /// Replaces the value of an entry, returning the old value
    ///
    /// # Errors
    /// [`HeapError::InvalidEntry`] if the handle is foreign or stale.
    fn replace_value(&mut self, handle: &Self::Handle, value: V) -> Result<V, HeapError>;
}
