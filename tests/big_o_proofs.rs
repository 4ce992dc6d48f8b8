//! Big-O complexity checks for heap operations
//!
//! This module empirically verifies the operation costs of [`LinkedHeap`]
//! using the `big-o-test` crate.
//!
//! ## Testing Strategy
//!
//! We use `test_algorithm` to measure batch operations. Note that for batch operations:
//! - O(1) per-element operations appear as O(n) for n operations
//! - O(log n) operations appear as O(n log n) for n operations
//!
//! The linked tree must not degrade any of these: an `add` or `remove_last`
//! that walked the tree to find the last slot would show up here as an extra
//! log factor (or worse).
//!
//! Note: These are empirical tests, not formal proofs. They detect significant
//! deviations from expected behavior but may not catch subtle issues with
//! specific input patterns.

use adaptable_heap::{LinkedHandle, LinkedHeap};
use big_o_test::{test_algorithm, BigOAlgorithmComplexity};

use ctor::ctor;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // cause tests to run serially -- this may be replaced by using the `serial_test` crate
    std::env::set_var("RUST_TEST_THREADS", "1");
}

type Heap = LinkedHeap<i32, i32>;

/// Ascending inserts never move, so the batch is O(n)
#[test]
fn test_linked_insert() {
    let heap = Arc::new(RwLock::new(Heap::new()));

    test_algorithm(
        "LinkedHeap insert batch",
        3,
        || {
            *heap.write() = Heap::new();
        },
        1000,
        || {
            let mut h = heap.write();
            // The reset closure runs once, not before every pass
            *h = Heap::new();
            for i in 0..1000 {
                h.insert(i, i).unwrap();
            }
            42
        },
        2000,
        || {
            let mut h = heap.write();
            *h = Heap::new();
            for i in 0..2000 {
                h.insert(i, i).unwrap();
            }
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

/// Test that n remove_min calls have O(n log n) batch complexity
#[test]
fn test_linked_remove_min() {
    let heap = Arc::new(RwLock::new(Heap::new()));

    test_algorithm(
        "LinkedHeap remove_min batch",
        3,
        || {
            *heap.write() = Heap::new();
        },
        1000,
        || {
            let mut h = heap.write();
            for i in 0..1000 {
                h.insert(i, i).unwrap();
            }
            for _ in 0..1000 {
                assert!(
                    h.remove_min().is_ok(),
                    "remove_min() must succeed after inserting elements"
                );
            }
            42
        },
        2000,
        || {
            let mut h = heap.write();
            for i in 0..2000 {
                h.insert(i, i).unwrap();
            }
            for _ in 0..2000 {
                assert!(
                    h.remove_min().is_ok(),
                    "remove_min() must succeed after inserting elements"
                );
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

/// Decreasing keys in insertion order: every ancestor already holds a
/// smaller key, so each replace_key is O(1) and the batch is O(n)
#[test]
fn test_linked_replace_key() {
    let heap_arc = Arc::new(RwLock::new(Heap::new()));
    let heap1 = Arc::clone(&heap_arc);
    let heap2 = Arc::clone(&heap_arc);

    test_algorithm(
        "LinkedHeap replace_key batch",
        3,
        || {
            let mut h = heap_arc.write();
            *h = Heap::new();
        },
        1000,
        || {
            let mut handles = Vec::new();
            {
                let mut h = heap1.write();
                // The reset closure runs once, not before every pass
                *h = Heap::new();
                for i in 0..1000 {
                    handles.push(h.insert(i + 10000, i).unwrap());
                }
            }

            for (i, handle) in handles.iter().enumerate() {
                let mut h = heap1.write();
                assert!(h.replace_key(handle, i as i32).is_ok());
            }
            42
        },
        2000,
        || {
            let mut handles = Vec::new();
            {
                let mut h = heap2.write();
                *h = Heap::new();
                for i in 0..2000 {
                    handles.push(h.insert(i + 20000, i).unwrap());
                }
            }

            for (i, handle) in handles.iter().enumerate() {
                let mut h = heap2.write();
                assert!(h.replace_key(handle, i as i32).is_ok());
            }
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

/// Removing by handle in insertion order always removes the root, which
/// sifts the swapped-in last entry down: O(n log n) for the batch
#[test]
fn test_linked_remove_by_handle() {
    let heap_arc = Arc::new(RwLock::new(Heap::new()));
    let heap1 = Arc::clone(&heap_arc);
    let heap2 = Arc::clone(&heap_arc);

    test_algorithm(
        "LinkedHeap remove batch",
        3,
        || {
            let mut h = heap_arc.write();
            *h = Heap::new();
        },
        1000,
        || {
            let mut h = heap1.write();
            let handles: Vec<LinkedHandle> = (0..1000).map(|i| h.insert(i, i).unwrap()).collect();
            for handle in &handles {
                assert!(h.remove(handle).is_ok());
            }
            42
        },
        2000,
        || {
            let mut h = heap2.write();
            let handles: Vec<LinkedHandle> = (0..2000).map(|i| h.insert(i, i).unwrap()).collect();
            for handle in &handles {
                assert!(h.remove(handle).is_ok());
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}
