//! Adaptable heap over a linked complete binary tree
//!
//! [`LinkedHeap`] is a min-heap whose entries can be removed or re-keyed
//! through the [`LinkedHandle`] returned at insertion, in O(log n).
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert`        | O(log n)   |
//! | `min`           | O(1)       |
//! | `remove_min`    | O(log n)   |
//! | `remove`        | O(log n)   |
//! | `replace_key`   | O(log n)   |
//! | `replace_value` | O(1)       |
//!
//! # Algorithm Overview
//!
//! The shape is a [`CompleteTree`], so insertion and removal happen only at
//! the last node, found in O(1) through the tree's frontier.
//!
//! **Entries and back-references**: entries live in their own arena. Each
//! tree node stores an entry key, and each entry stores the position of the
//! node holding it. Restoration swaps entry keys between nodes and rewrites
//! both back-references on every swap, so `tree[entry.position] == entry`
//! always holds and a handle resolves to its node without searching.
//!
//! **Up-heap**: while an entry is strictly less than its parent, swap them.
//! **Down-heap**: while the smaller child (left on ties) is strictly less than
//! the entry, swap them. Both are loops bounded by the tree height.
//!
//! **Arbitrary removal**: swap the target with the last entry, drop the last
//! node, then restore from the vacated slot. The entry moved there came from
//! a different subtree, so it may need to move up or down.
//!
//! **Handle ownership**: every heap draws a unique id and stamps it into its
//! handles. A handle from another heap, or one whose entry was removed
//! (generational arena key), is rejected with [`HeapError::InvalidEntry`].
//!
//! # Example
//!
//! ```rust
//! use adaptable_heap::LinkedHeap;
//!
//! let mut heap = LinkedHeap::new();
//! let a = heap.insert(11, "a").unwrap();
//! let b = heap.insert(13, "b").unwrap();
//! heap.insert(64, "c").unwrap();
//!
//! heap.replace_key(&b, 1).unwrap();
//! assert_eq!(heap.min(), Ok((&1, &"b")));
//!
//! assert_eq!(heap.remove(&a), Ok((11, "a")));
//! assert_eq!(heap.remove_min(), Ok((1, "b")));
//! assert_eq!(heap.remove_min(), Ok((64, "c")));
//! assert!(heap.is_empty());
//! ```

use crate::complete_tree::CompleteTree;
use crate::linked_tree::Position;
use crate::order::{KeyOrder, NaturalOrder};
use crate::traits::{AdaptablePriorityQueue, Handle, HeapError, PriorityQueue};
use slotmap::{new_key_type, SlotMap};
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(0);

new_key_type! {
    struct EntryKey;
}

/// Internal entry: the key, the value and the node currently holding it
struct Entry<K, V> {
    key: K,
    value: V,
    position: Position,
}

/// Handle to an entry in a [`LinkedHeap`]
///
/// Stays valid across any other insertions and removals until its own entry
/// is removed. Handles are `Copy` and compare equal when they name the same
/// entry of the same heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkedHandle {
    heap: u64,
    entry: EntryKey,
}

impl Handle for LinkedHandle {}

/// Adaptable min-heap over a linked complete binary tree
///
/// # Type Parameters
///
/// - `K`: key type, ordered by `O`
/// - `V`: value type, never compared
/// - `O`: the [`KeyOrder`], [`NaturalOrder`] by default
pub struct LinkedHeap<K, V, O = NaturalOrder<K>> {
    tree: CompleteTree<EntryKey>,
    entries: SlotMap<EntryKey, Entry<K, V>>,
    order: O,
    id: u64,
}

impl<K: Ord, V> LinkedHeap<K, V> {
    /// Creates an empty heap ordered by `K`'s [`Ord`] implementation
    pub fn new() -> Self {
        Self::with_order(NaturalOrder::new())
    }
}

impl<K, V, O: KeyOrder<K>> LinkedHeap<K, V, O> {
    /// Creates an empty heap using `order` to compare keys
    pub fn with_order(order: O) -> Self {
        Self::with_capacity_and_order(0, order)
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            tree: CompleteTree::with_capacity(capacity),
            entries: SlotMap::with_capacity_and_key(capacity),
            order,
            id: NEXT_HEAP_ID.fetch_add(1, AtomicOrdering::Relaxed),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The order used to compare keys
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Replaces the order used to compare keys
    ///
    /// # Errors
    /// [`HeapError::NotEmpty`] unless the heap is empty, since existing
    /// entries were arranged under the old order.
    pub fn set_order(&mut self, order: O) -> Result<(), HeapError> {
        if !self.is_empty() {
            return Err(HeapError::NotEmpty);
        }
        self.order = order;
        Ok(())
    }

    /// Returns the entry with the minimum key without removing it
    ///
    /// **Time Complexity**: O(1)
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap is empty.
    pub fn min(&self) -> Result<(&K, &V), HeapError> {
        let &key = self.tree.current_min()?;
        self.entries
            .get(key)
            .map(|entry| (&entry.key, &entry.value))
            .ok_or(HeapError::EmptyStructure)
    }

    /// Inserts a key-value pair and returns a handle to the new entry
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// # Errors
    /// [`HeapError::InvalidKey`] if the order cannot compare `key` with
    /// itself. The heap is unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Result<LinkedHandle, HeapError> {
        if !self.order.accepts(&key) {
            return Err(HeapError::InvalidKey);
        }

        let entry = self.entries.insert(Entry {
            key,
            value,
            position: Position::default(),
        });
        let pos = self.tree.add(entry);
        self.entries[entry].position = pos;

        if self.tree.len() > 1 {
            self.up_heap(pos);
        }

        Ok(LinkedHandle {
            heap: self.id,
            entry,
        })
    }

    /// Removes and returns the entry with the minimum key
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap is empty.
    pub fn remove_min(&mut self) -> Result<(K, V), HeapError> {
        let root = self.tree.root().ok_or(HeapError::EmptyStructure)?;
        self.remove_at(root)
    }

    /// Removes the entry named by `handle`
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// # Errors
    /// - [`HeapError::InvalidEntry`] if the handle is foreign or its entry
    ///   was already removed
    /// - [`HeapError::EmptyStructure`] if the heap is empty
    pub fn remove(&mut self, handle: &LinkedHandle) -> Result<(K, V), HeapError> {
        let entry = self.resolve(handle)?;
        if self.is_empty() {
            return Err(HeapError::EmptyStructure);
        }
        let pos = self.entries[entry].position;
        self.remove_at(pos)
    }

    /// Replaces the key of the entry named by `handle`, returning the old key
    ///
    /// A smaller key moves the entry toward the root, a larger one toward the
    /// leaves, an equal one leaves the tree untouched.
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// # Errors
    /// - [`HeapError::InvalidEntry`] if the handle is foreign or stale
    /// - [`HeapError::InvalidKey`] if the order cannot compare `key`
    pub fn replace_key(&mut self, handle: &LinkedHandle, key: K) -> Result<K, HeapError> {
        let entry = self.resolve(handle)?;
        if !self.order.accepts(&key) {
            return Err(HeapError::InvalidKey);
        }

        let direction = self.order.compare(&key, &self.entries[entry].key);
        let entry = &mut self.entries[entry];
        let old = mem::replace(&mut entry.key, key);
        let pos = entry.position;

        match direction {
            Some(Ordering::Less) => {
                self.up_heap(pos);
            }
            Some(Ordering::Greater) => self.down_heap(pos),
            _ => {}
        }
        Ok(old)
    }

    /// Replaces the value of the entry named by `handle`, returning the old
    /// value
    ///
    /// **Time Complexity**: O(1)
    ///
    /// # Errors
    /// [`HeapError::InvalidEntry`] if the handle is foreign or stale.
    pub fn replace_value(&mut self, handle: &LinkedHandle, value: V) -> Result<V, HeapError> {
        let entry = self.resolve(handle)?;
        Ok(mem::replace(&mut self.entries[entry].value, value))
    }

    /// Returns the key and value of the entry named by `handle`
    ///
    /// # Errors
    /// [`HeapError::InvalidEntry`] if the handle is foreign or stale.
    pub fn get(&self, handle: &LinkedHandle) -> Result<(&K, &V), HeapError> {
        let entry = &self.entries[self.resolve(handle)?];
        Ok((&entry.key, &entry.value))
    }

    /// Returns true if `handle` names a live entry of this heap
    pub fn contains(&self, handle: &LinkedHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Iterates over the entries in tree level order (root first)
    ///
    /// Only the first item is guaranteed to be the minimum.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.tree
            .iter()
            .filter_map(move |&key| self.entries.get(key))
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Removes every entry, invalidating all outstanding handles
    pub fn clear(&mut self) {
        self.tree.clear();
        self.entries.clear();
    }

    /// Consumes the heap, returning its entries in ascending key order
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(entry) = self.remove_min() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks that no entry is less than its parent
    ///
    /// **Time Complexity**: O(n). Intended for tests.
    pub fn verify_heap_property(&self) -> bool {
        self.tree.positions().into_iter().all(|pos| {
            self.tree
                .parent(pos)
                .map_or(true, |parent| !self.less_at(pos, parent))
        })
    }

    /// Checks that every entry's back-reference names the node holding it
    ///
    /// **Time Complexity**: O(n). Intended for tests.
    pub fn verify_back_references(&self) -> bool {
        self.entries.len() == self.tree.len()
            && self
                .entries
                .iter()
                .all(|(key, entry)| self.tree.element(entry.position) == Some(&key))
    }

    /// Checks the completeness and frontier invariants of the underlying tree
    ///
    /// **Time Complexity**: O(n). Intended for tests.
    pub fn verify_complete_structure(&self) -> bool {
        self.tree.verify_complete_structure()
    }

    fn resolve(&self, handle: &LinkedHandle) -> Result<EntryKey, HeapError> {
        if handle.heap == self.id && self.entries.contains_key(handle.entry) {
            Ok(handle.entry)
        } else {
            Err(HeapError::InvalidEntry)
        }
    }

    /// Swaps the entry at `pos` with the last entry, removes the last node and
    /// restores order around `pos`
    fn remove_at(&mut self, pos: Position) -> Result<(K, V), HeapError> {
        let last = self.tree.last().ok_or(HeapError::EmptyStructure)?;
        self.swap_entries(pos, last);
        let removed = self.tree.remove_last()?;
        let entry = self
            .entries
            .remove(removed)
            .ok_or(HeapError::InvalidEntry)?;

        // If the removed entry was itself last, `pos` no longer exists.
        if pos != last {
            let pos = self.up_heap(pos);
            self.down_heap(pos);
        }
        Ok((entry.key, entry.value))
    }

    fn key_at(&self, pos: Position) -> Option<&K> {
        let &entry = self.tree.element(pos)?;
        self.entries.get(entry).map(|entry| &entry.key)
    }

    /// True if the key at `a` is strictly less than the key at `b`
    fn less_at(&self, a: Position, b: Position) -> bool {
        match (self.key_at(a), self.key_at(b)) {
            (Some(a), Some(b)) => self.order.compare(a, b) == Some(Ordering::Less),
            _ => false,
        }
    }

    /// Swaps the entries at two nodes and rewrites both back-references
    fn swap_entries(&mut self, a: Position, b: Position) {
        self.tree.swap(a, b);
        for pos in [a, b] {
            if let Some(&key) = self.tree.element(pos) {
                if let Some(entry) = self.entries.get_mut(key) {
                    entry.position = pos;
                }
            }
        }
    }

    /// Moves the entry at `pos` toward the root, returning where it stops
    fn up_heap(&mut self, mut pos: Position) -> Position {
        while let Some(parent) = self.tree.parent(pos) {
            if !self.less_at(pos, parent) {
                break;
            }
            self.swap_entries(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Moves the entry at `pos` toward the leaves
    fn down_heap(&mut self, mut pos: Position) {
        // In a complete tree a node without a left child is a leaf.
        while let Some(left) = self.tree.left(pos) {
            let smaller = match self.tree.right(pos) {
                Some(right) if self.less_at(right, left) => right,
                _ => left,
            };
            if !self.less_at(smaller, pos) {
                break;
            }
            self.swap_entries(pos, smaller);
            pos = smaller;
        }
    }
}

impl<K: Ord, V> Default for LinkedHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for LinkedHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<K: Ord, V> Extend<(K, V)> for LinkedHeap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let inserted = LinkedHeap::insert(self, key, value);
            // NaturalOrder accepts every key
            debug_assert!(inserted.is_ok());
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for LinkedHeap<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .tree
            .iter()
            .filter_map(|&key| self.entries.get(key))
            .map(|entry| (&entry.key, &entry.value));
        f.debug_map().entries(entries).finish()
    }
}

impl<K, V, O: KeyOrder<K>> PriorityQueue<K, V> for LinkedHeap<K, V, O> {
    fn len(&self) -> usize {
        LinkedHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        LinkedHeap::is_empty(self)
    }

    fn min(&self) -> Result<(&K, &V), HeapError> {
        LinkedHeap::min(self)
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), HeapError> {
        LinkedHeap::insert(self, key, value).map(|_| ())
    }

    fn remove_min(&mut self) -> Result<(K, V), HeapError> {
        LinkedHeap::remove_min(self)
    }
}

impl<K, V, O: KeyOrder<K>> AdaptablePriorityQueue<K, V> for LinkedHeap<K, V, O> {
    type Handle = LinkedHandle;

    fn insert_with_handle(&mut self, key: K, value: V) -> Result<LinkedHandle, HeapError> {
        LinkedHeap::insert(self, key, value)
    }

    fn remove(&mut self, handle: &LinkedHandle) -> Result<(K, V), HeapError> {
        LinkedHeap::remove(self, handle)
    }

    fn replace_key(&mut self, handle: &LinkedHandle, key: K) -> Result<K, HeapError> {
        LinkedHeap::replace_key(self, handle, key)
    }

    fn replace_value(&mut self, handle: &LinkedHandle, value: V) -> Result<V, HeapError> {
        LinkedHeap::replace_value(self, handle, value)
    }
}
