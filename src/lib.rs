//! Adaptable Priority Queue over a Linked Complete Binary Tree
//!
//! This crate provides a min-heap whose arbitrary entries can be removed or
//! re-keyed in O(log n) through handles returned at insertion, built on a
//! complete binary tree made of linked nodes rather than an array.
//!
//! # Features
//!
//! - **[`LinkedHeap`]**: O(log n) insert, remove-min, remove-by-handle and
//!   replace-key; O(1) min and replace-value
//! - **[`CompleteTree`](complete_tree::CompleteTree)**: O(1) worst-case add
//!   and remove at the last slot of a linked complete binary tree
//! - **[`LinkedBinaryTree`](linked_tree::LinkedBinaryTree)**: arena-backed
//!   binary tree with non-owning parent links
//! - **[`KeyOrder`](order::KeyOrder)**: injected comparators that may reject
//!   keys they cannot order
//!
//! # Example
//!
//! ```rust
//! use adaptable_heap::{HeapError, LinkedHeap};
//!
//! let mut heap = LinkedHeap::new();
//! let handle1 = heap.insert(5, "item1").unwrap();
//! let _handle2 = heap.insert(3, "item2").unwrap();
//! heap.replace_key(&handle1, 1).unwrap();
//! assert_eq!(heap.min(), Ok((&1, &"item1")));
//!
//! heap.remove(&handle1).unwrap();
//! assert_eq!(heap.remove(&handle1), Err(HeapError::InvalidEntry));
//! ```

pub mod complete_tree;
pub mod linked_heap;
pub mod linked_tree;
pub mod order;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use linked_heap::{LinkedHandle, LinkedHeap};
pub use traits::{AdaptablePriorityQueue, Handle, HeapError, PriorityQueue};
