//! A mutable, unbalanced Binary Search Tree (BST) with parent links, written
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a node. A node stores a key and may have
//! a left and a right child. The most important invariants of this BST are:
//!
//! 1. For every node, all the nodes in its left subtree have a key less than
//!    its own key.
//! 2. For every node, all the nodes in its right subtree have a key greater
//!    than or equal to its own key.
//! 3. For every node except the root, its parent's left or right link points
//!    back at it.
//!
//! > Note that some nodes have no children. These nodes are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the number of nodes on the
//! longest path from the root to a leaf. This tree does nothing to keep that
//! small: inserting keys in sorted order produces a chain of height `N`.
//! [`BinarySearchTree::rotate_left`] and [`BinarySearchTree::rotate_right`]
//! are the building blocks a caller can rebalance with.
//!
//! The parent links make it possible to step to a node's in-order successor
//! or predecessor without starting over from the root, which is what
//! [`BinarySearchTree::remove`] relies on.
//!
//! # Examples
//!
//! ```
//! use binarytree::{BinarySearchTree, TreeNode};
//!
//! let mut tree = BinarySearchTree::from_root(TreeNode::new(100));
//! for key in [50, 150, 25, 75, 125, 175, 110] {
//!     tree.insert(TreeNode::new(key));
//! }
//!
//! assert_eq!(tree.bft(tree.root()), [&100, &50, &150, &25, &75, &125, &175, &110]);
//! assert_eq!(tree.dft_inorder(tree.root()), [&25, &50, &75, &100, &110, &125, &150, &175]);
//!
//! let hundred = tree.search(&100).unwrap();
//! tree.remove(hundred).unwrap();
//! assert_eq!(tree.key(tree.root().unwrap()), Some(&110));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod shape;
mod slot;
mod traversal;
mod tree;

pub use error::TreeError;
pub use node::{NodeId, TreeNode};
pub use slot::{Side, Slot};
pub use traversal::{Ids, Iter, TraversalOrders};
pub use tree::BinarySearchTree;
