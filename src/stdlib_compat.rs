//! Standard library compatibility layer
//!
//! Provides a `std::collections::BinaryHeap`-shaped wrapper where the item
//! is its own key.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` or [`ReverseOrder`](crate::order::ReverseOrder)
//!   to get max-heap behavior.
//! - **Fallible push**: the underlying order may reject an item (e.g. `NaN`
//!   under [`PartialOrder`](crate::order::PartialOrder)), so `push` returns a
//!   `Result`.
//!
//! # Example
//!
//! ```rust
//! use adaptable_heap::stdlib_compat::StdHeap;
//! use adaptable_heap::LinkedHeap;
//!
//! let mut heap: StdHeap<i32, LinkedHeap<i32, ()>> = StdHeap::new();
//! heap.push(5).unwrap();
//! heap.push(3).unwrap();
//! heap.push(7).unwrap();
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use crate::traits::{HeapError, PriorityQueue};

/// A `BinaryHeap`-like wrapper over any [`PriorityQueue`]
///
/// # Type Parameters
/// - `T`: The item type, used as the key
/// - `H`: The underlying queue (e.g., `LinkedHeap<T, ()>`)
pub struct StdHeap<T, H: PriorityQueue<T, ()>> {
    heap: H,
    _phantom: std::marker::PhantomData<T>,
}

impl<T, H: PriorityQueue<T, ()> + Default> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_queue(H::default())
    }
}

impl<T, H: PriorityQueue<T, ()>> StdHeap<T, H> {
    /// Wraps an existing queue, e.g. one built with a custom order
    pub fn from_queue(heap: H) -> Self {
        Self {
            heap,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    ///
    /// # Errors
    /// [`HeapError::InvalidKey`] if the underlying order rejects the item.
    pub fn push(&mut self, item: T) -> Result<(), HeapError> {
        self.heap.insert(item, ())
    }

    /// Returns a reference to the smallest item without removing it
    ///
    /// This is equivalent to `BinaryHeap::peek`, but returns the minimum (not maximum).
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|(item, _)| item)
    }

    /// Removes and returns the smallest item
    ///
    /// This is equivalent to `BinaryHeap::pop`, but returns the minimum (not maximum).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|(item, _)| item)
    }

    /// Unwraps the underlying queue
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T, H: PriorityQueue<T, ()> + Default> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{NaturalOrder, PartialOrder, ReverseOrder};
    use crate::LinkedHeap;
    use std::cmp::Reverse;

    #[test]
    fn test_min_heap_order() {
        let mut heap: StdHeap<i32, LinkedHeap<i32, ()>> = StdHeap::new();
        for i in [4, 8, 1, 6] {
            heap.push(i).unwrap();
        }
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(4));
        assert_eq!(heap.pop(), Some(6));
        assert_eq!(heap.pop(), Some(8));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_std_reverse_gives_max_heap() {
        let mut heap: StdHeap<Reverse<i32>, LinkedHeap<Reverse<i32>, ()>> = StdHeap::default();
        for i in [4, 8, 1, 6] {
            heap.push(Reverse(i)).unwrap();
        }
        assert_eq!(heap.peek(), Some(&Reverse(8)));
    }

    #[test]
    fn test_from_queue_with_custom_order() {
        let mut heap: StdHeap<char, LinkedHeap<char, (), ReverseOrder<NaturalOrder<char>>>> =
            StdHeap::from_queue(LinkedHeap::with_order(ReverseOrder(NaturalOrder::new())));
        heap.push('a').unwrap();
        heap.push('z').unwrap();
        assert_eq!(heap.pop(), Some('z'));
        assert_eq!(heap.into_inner().len(), 1);
    }

    #[test]
    fn test_push_rejected_item() {
        let mut heap: StdHeap<f64, LinkedHeap<f64, (), PartialOrder<f64>>> =
            StdHeap::from_queue(LinkedHeap::with_order(PartialOrder::new()));
        heap.push(0.5).unwrap();
        assert_eq!(heap.push(f64::NAN), Err(HeapError::InvalidKey));
        assert_eq!(heap.len(), 1);
    }
}
