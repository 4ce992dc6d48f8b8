//! Arena-backed linked binary tree
//!
//! Nodes live in a [`SlotMap`] and refer to each other by generational
//! [`Position`] keys:
//!
//! - child links (`left`, `right`) are the owning direction: a node stays in
//!   the arena exactly as long as it is attached to the tree
//! - parent links are plain keys with no ownership, so there are no reference
//!   cycles and no `Rc<RefCell<_>>` bookkeeping
//!
//! A `Position` that outlives its node is detected by the slotmap generation
//! check, so every accessor taking a position returns `Option`.
//!
//! Only leaves can be removed. That is all a complete binary tree needs: it
//! grows and shrinks exclusively at its last node.
//!
//! # Example
//!
//! ```rust
//! use adaptable_heap::linked_tree::LinkedBinaryTree;
//!
//! let mut tree = LinkedBinaryTree::new();
//! let root = tree.add_root("root").unwrap();
//! let left = tree.insert_left(root, "left").unwrap();
//! assert_eq!(tree.parent(left), Some(root));
//!
//! tree.swap_elements(root, left);
//! assert_eq!(tree.element(root), Some(&"left"));
//! assert_eq!(tree.remove(left), Some("root"));
//! assert!(tree.is_external(root));
//! ```

use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::mem;

new_key_type! {
    /// Key naming one node of a [`LinkedBinaryTree`]
    pub struct Position;
}

/// Internal node structure
///
/// Payloads move between nodes on swaps; the links never do.
struct Node<E> {
    element: E,
    parent: Option<Position>,
    left: Option<Position>,
    right: Option<Position>,
}

/// Linked binary tree with O(1) structural operations
pub struct LinkedBinaryTree<E> {
    nodes: SlotMap<Position, Node<E>>,
    root: Option<Position>,
}

impl<E> LinkedBinaryTree<E> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
        }
    }

    /// Creates an empty tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            root: None,
        }
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root position, if any
    pub fn root(&self) -> Option<Position> {
        self.root
    }

    /// Returns true if `pos` names a node currently in this tree
    pub fn contains(&self, pos: Position) -> bool {
        self.nodes.contains_key(pos)
    }

    /// Creates the root of an empty tree
    ///
    /// Returns `None` and leaves the tree untouched if it already has a root.
    pub fn add_root(&mut self, element: E) -> Option<Position> {
        if self.root.is_some() {
            return None;
        }
        let pos = self.nodes.insert(Node {
            element,
            parent: None,
            left: None,
            right: None,
        });
        self.root = Some(pos);
        Some(pos)
    }

    /// Attaches a new leaf as the left child of `parent`
    ///
    /// Returns `None` if `parent` is stale or already has a left child.
    pub fn insert_left(&mut self, parent: Position, element: E) -> Option<Position> {
        if self.nodes.get(parent)?.left.is_some() {
            return None;
        }
        let child = self.new_leaf(parent, element);
        self.nodes[parent].left = Some(child);
        Some(child)
    }

    /// Attaches a new leaf as the right child of `parent`
    ///
    /// Returns `None` if `parent` is stale or already has a right child.
    pub fn insert_right(&mut self, parent: Position, element: E) -> Option<Position> {
        if self.nodes.get(parent)?.right.is_some() {
            return None;
        }
        let child = self.new_leaf(parent, element);
        self.nodes[parent].right = Some(child);
        Some(child)
    }

    fn new_leaf(&mut self, parent: Position, element: E) -> Position {
        self.nodes.insert(Node {
            element,
            parent: Some(parent),
            left: None,
            right: None,
        })
    }

    /// Detaches and destroys a leaf, returning its element
    ///
    /// Returns `None` if `pos` is stale or still has children.
    pub fn remove(&mut self, pos: Position) -> Option<E> {
        let node = self.nodes.get(pos)?;
        if node.left.is_some() || node.right.is_some() {
            return None;
        }
        let node = self.nodes.remove(pos)?;
        match node.parent {
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(pos) {
                    parent.left = None;
                } else {
                    debug_assert_eq!(parent.right, Some(pos));
                    parent.right = None;
                }
            }
            None => self.root = None,
        }
        Some(node.element)
    }

    /// Exchanges the elements stored at two positions
    ///
    /// Node identity and links are unchanged. Stale positions are ignored.
    pub fn swap_elements(&mut self, a: Position, b: Position) {
        if a == b {
            return;
        }
        if let Some([x, y]) = self.nodes.get_disjoint_mut([a, b]) {
            mem::swap(&mut x.element, &mut y.element);
        }
    }

    /// Element stored at `pos`
    pub fn element(&self, pos: Position) -> Option<&E> {
        self.nodes.get(pos).map(|node| &node.element)
    }

    /// Mutable access to the element stored at `pos`
    pub fn element_mut(&mut self, pos: Position) -> Option<&mut E> {
        self.nodes.get_mut(pos).map(|node| &mut node.element)
    }

    pub fn parent(&self, pos: Position) -> Option<Position> {
        self.nodes.get(pos)?.parent
    }

    pub fn left(&self, pos: Position) -> Option<Position> {
        self.nodes.get(pos)?.left
    }

    pub fn right(&self, pos: Position) -> Option<Position> {
        self.nodes.get(pos)?.right
    }

    pub fn has_left(&self, pos: Position) -> bool {
        self.left(pos).is_some()
    }

    pub fn has_right(&self, pos: Position) -> bool {
        self.right(pos).is_some()
    }

    /// Returns true if `pos` is a live node with no children
    pub fn is_external(&self, pos: Position) -> bool {
        self.nodes
            .get(pos)
            .is_some_and(|node| node.left.is_none() && node.right.is_none())
    }

    /// Removes every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl<E> Default for LinkedBinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for LinkedBinaryTree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedBinaryTree")
            .field("len", &self.nodes.len())
            .field("root", &self.root.and_then(|r| self.element(r)))
            .finish()
    }
}
