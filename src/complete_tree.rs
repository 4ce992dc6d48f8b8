//! Complete binary tree over a linked structure
//!
//! [`CompleteTree`] wraps a [`LinkedBinaryTree`] and keeps it complete: every
//! level full except possibly the last, which fills left-to-right. Nodes are
//! only ever added after the last node or removed at the last node.
//!
//! # Algorithm Overview
//!
//! An array-backed heap finds the next slot by index arithmetic. A linked tree
//! has no indices, so instead the tree keeps a **frontier**: a deque holding,
//! in level order, every node that does not yet have two children.
//!
//! - The **front** is the parent of the next node to add
//! - The **back** is the current last node
//!
//! **Add**: attach under the front (left slot first). When the front gains
//! its right child it is full and leaves the deque. The new node joins the
//! back.
//!
//! **Remove last**: pop the back and detach it. If it was a right child its
//! parent has a free slot again and rejoins the front. If it was a left child
//! the parent was already the front and stays there.
//!
//! Both are O(1) worst-case: no walk from the root is ever needed.
//!
//! # Example
//!
//! ```rust
//! use adaptable_heap::complete_tree::CompleteTree;
//!
//! let mut tree = CompleteTree::new();
//! let root = tree.add(1);
//! let left = tree.add(2);
//! let right = tree.add(3);
//! assert_eq!(tree.left(root), Some(left));
//! assert_eq!(tree.right(root), Some(right));
//! assert_eq!(tree.last(), Some(right));
//!
//! assert_eq!(tree.remove_last(), Ok(3));
//! assert_eq!(tree.last(), Some(left));
//! ```

use crate::linked_tree::{LinkedBinaryTree, Position};
use crate::traits::HeapError;
use std::collections::VecDeque;
use std::fmt;

/// Complete binary tree with O(1) add and remove at the last slot
pub struct CompleteTree<E> {
    tree: LinkedBinaryTree<E>,
    /// Nodes lacking two children, in level order
    frontier: VecDeque<Position>,
}

impl<E> CompleteTree<E> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self {
            tree: LinkedBinaryTree::new(),
            frontier: VecDeque::new(),
        }
    }

    /// Creates an empty tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: LinkedBinaryTree::with_capacity(capacity),
            // at most half the nodes (rounded up) lack two children
            frontier: VecDeque::with_capacity(capacity / 2 + 1),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Adds `element` as the new last node and returns its position
    ///
    /// **Time Complexity**: O(1) worst-case
    pub fn add(&mut self, element: E) -> Position {
        let pos = match self.frontier.front().copied() {
            None => self.tree.add_root(element),
            Some(front) if !self.tree.has_left(front) => self.tree.insert_left(front, element),
            Some(front) => {
                let pos = self.tree.insert_right(front, element);
                // front now has both children
                self.frontier.pop_front();
                pos
            }
        };
        // The frontier front is live with a free slot, and an empty frontier
        // means an empty tree, so attachment cannot fail.
        let pos = match pos {
            Some(pos) => pos,
            None => unreachable!("frontier front must have a free child slot"),
        };
        self.frontier.push_back(pos);
        pos
    }

    /// Removes the last node and returns its element
    ///
    /// **Time Complexity**: O(1) worst-case
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the tree is empty.
    pub fn remove_last(&mut self) -> Result<E, HeapError> {
        let last = self.frontier.pop_back().ok_or(HeapError::EmptyStructure)?;
        match self.tree.parent(last) {
            None => {
                // last node was the root
                debug_assert!(self.frontier.is_empty());
                self.frontier.clear();
            }
            Some(parent) => {
                if self.tree.right(parent) == Some(last) {
                    self.frontier.push_front(parent);
                }
                debug_assert_eq!(self.frontier.front(), Some(&parent));
            }
        }
        self.tree.remove(last).ok_or(HeapError::EmptyStructure)
    }

    /// Returns the root element
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the tree is empty.
    pub fn current_min(&self) -> Result<&E, HeapError> {
        self.tree
            .root()
            .and_then(|root| self.tree.element(root))
            .ok_or(HeapError::EmptyStructure)
    }

    /// Exchanges the elements at two positions
    ///
    /// The caller is responsible for any back-references embedded in them.
    pub fn swap(&mut self, a: Position, b: Position) {
        self.tree.swap_elements(a, b);
    }

    /// Position of the last node in level order
    pub fn last(&self) -> Option<Position> {
        self.frontier.back().copied()
    }

    pub fn root(&self) -> Option<Position> {
        self.tree.root()
    }

    pub fn parent(&self, pos: Position) -> Option<Position> {
        self.tree.parent(pos)
    }

    pub fn left(&self, pos: Position) -> Option<Position> {
        self.tree.left(pos)
    }

    pub fn right(&self, pos: Position) -> Option<Position> {
        self.tree.right(pos)
    }

    pub fn has_left(&self, pos: Position) -> bool {
        self.tree.has_left(pos)
    }

    pub fn has_right(&self, pos: Position) -> bool {
        self.tree.has_right(pos)
    }

    pub fn is_leaf(&self, pos: Position) -> bool {
        self.tree.is_external(pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.tree.contains(pos)
    }

    pub fn element(&self, pos: Position) -> Option<&E> {
        self.tree.element(pos)
    }

    pub fn element_mut(&mut self, pos: Position) -> Option<&mut E> {
        self.tree.element_mut(pos)
    }

    /// Removes every node
    pub fn clear(&mut self) {
        self.tree.clear();
        self.frontier.clear();
    }

    /// Iterates over the elements in level order
    pub fn iter(&self) -> LevelOrder<'_, E> {
        let mut queue = VecDeque::new();
        queue.extend(self.tree.root());
        LevelOrder { tree: self, queue }
    }

    /// Positions in level order
    pub(crate) fn positions(&self) -> Vec<Position> {
        let mut order = Vec::with_capacity(self.len());
        order.extend(self.tree.root());
        let mut i = 0;
        while i < order.len() {
            let pos = order[i];
            order.extend(self.tree.left(pos));
            order.extend(self.tree.right(pos));
            i += 1;
        }
        order
    }

    /// Verifies the completeness and frontier invariants
    ///
    /// Checks that:
    /// - no node has a right child without a left child
    /// - once a level-order slot is empty, every later slot is empty
    /// - parent links agree with child links
    /// - the frontier is exactly the level-ordered list of nodes lacking
    ///   two children, so its back is the last node
    ///
    /// **Time Complexity**: O(n). Intended for tests.
    pub fn verify_complete_structure(&self) -> bool {
        let order = self.positions();
        if order.len() != self.len() {
            return false;
        }

        let mut seen_gap = false;
        for &pos in &order {
            let left = self.tree.left(pos);
            let right = self.tree.right(pos);
            if left.is_none() && right.is_some() {
                return false;
            }
            for child in [left, right] {
                match child {
                    Some(child) => {
                        if seen_gap || self.tree.parent(child) != Some(pos) {
                            return false;
                        }
                    }
                    None => seen_gap = true,
                }
            }
        }

        let lacking = order
            .iter()
            .copied()
            .filter(|&pos| !(self.tree.has_left(pos) && self.tree.has_right(pos)));
        self.frontier.iter().copied().eq(lacking)
    }
}

impl<E> Default for CompleteTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for CompleteTree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Level-order iterator over the elements of a [`CompleteTree`]
pub struct LevelOrder<'a, E> {
    tree: &'a CompleteTree<E>,
    queue: VecDeque<Position>,
}

impl<'a, E> Iterator for LevelOrder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.queue.pop_front()?;
        self.queue.extend(self.tree.left(pos));
        self.queue.extend(self.tree.right(pos));
        self.tree.element(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_one_element() {
        let mut tree = CompleteTree::new();
        let root = tree.add(1);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.last(), Some(root));
        assert_eq!(tree.current_min(), Ok(&1));
        assert!(tree.verify_complete_structure());
    }

    #[test]
    fn test_remove_from_empty() {
        let mut tree: CompleteTree<i32> = CompleteTree::new();
        assert_eq!(tree.remove_last(), Err(HeapError::EmptyStructure));
        assert_eq!(tree.current_min(), Err(HeapError::EmptyStructure));

        tree.add(1);
        assert_eq!(tree.remove_last(), Ok(1));
        assert_eq!(tree.remove_last(), Err(HeapError::EmptyStructure));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_multiple_elements_in_reverse_order() {
        let mut tree = CompleteTree::new();
        for i in 1..=7 {
            tree.add(i);
        }
        assert_eq!(tree.len(), 7);

        for expected in (1..=7).rev() {
            assert_eq!(tree.remove_last(), Ok(expected));
            assert_eq!(tree.len(), expected as usize - 1);
            assert!(tree.verify_complete_structure());
        }
    }

    #[test]
    fn test_fill_left_to_right() {
        let mut tree = CompleteTree::new();
        let positions: Vec<_> = (0..7).map(|i| tree.add(i)).collect();

        // positions[i] has children 2i+1, 2i+2 as in an array heap
        for i in 0..3 {
            assert_eq!(tree.left(positions[i]), Some(positions[2 * i + 1]));
            assert_eq!(tree.right(positions[i]), Some(positions[2 * i + 2]));
        }
        for &leaf in &positions[3..] {
            assert!(tree.is_leaf(leaf));
        }
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            (0..7).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_node_retired_only_after_second_child() {
        let mut tree = CompleteTree::new();
        let root = tree.add('a');
        let left = tree.add('b');
        // root has only a left child: the next add must still go under root
        assert!(tree.has_left(root) && !tree.has_right(root));
        let right = tree.add('c');
        assert_eq!(tree.right(root), Some(right));
        // root retired, next add goes under left
        let next = tree.add('d');
        assert_eq!(tree.parent(next), Some(left));
        assert!(tree.verify_complete_structure());
    }

    #[test]
    fn test_right_child_removal_reopens_parent() {
        let mut tree = CompleteTree::new();
        let root = tree.add(0);
        tree.add(1);
        let right = tree.add(2);

        assert_eq!(tree.remove_last(), Ok(2));
        assert!(!tree.contains(right));
        assert!(!tree.has_right(root));
        assert!(tree.verify_complete_structure());

        // slot reopens under root, not under the left child
        let again = tree.add(3);
        assert_eq!(tree.right(root), Some(again));
        assert!(tree.verify_complete_structure());
    }

    #[test]
    fn test_left_child_removal_keeps_parent_at_front() {
        let mut tree = CompleteTree::new();
        for i in 0..4 {
            tree.add(i);
        }
        // node 3 is the left child of node 1
        assert_eq!(tree.remove_last(), Ok(3));
        assert!(tree.verify_complete_structure());
        let pos = tree.add(4);
        let left_of_root = tree.left(tree.root().unwrap()).unwrap();
        assert_eq!(tree.parent(pos), Some(left_of_root));
        assert_eq!(tree.left(left_of_root), Some(pos));
    }

    #[test]
    fn test_interleaved_add_remove_keeps_structure() {
        let mut tree = CompleteTree::new();
        let mut expected_len = 0usize;
        for round in 0..50 {
            for i in 0..(round % 7 + 1) {
                tree.add(round * 10 + i);
                expected_len += 1;
                assert!(tree.verify_complete_structure());
            }
            for _ in 0..(round % 5) {
                if tree.remove_last().is_ok() {
                    expected_len -= 1;
                }
                assert!(tree.verify_complete_structure());
            }
            assert_eq!(tree.len(), expected_len);
        }
    }

    #[test]
    fn test_swap_and_clear() {
        let mut tree = CompleteTree::with_capacity(8);
        let root = tree.add("x");
        let left = tree.add("y");
        tree.swap(root, left);
        assert_eq!(tree.current_min(), Ok(&"y"));
        assert_eq!(tree.element(left), Some(&"x"));

        *tree.element_mut(left).unwrap() = "z";
        assert_eq!(format!("{:?}", tree), r#"["y", "z"]"#);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.last(), None);
        assert!(tree.verify_complete_structure());
    }
}
