//! The nodes a [`BinarySearchTree`][crate::BinarySearchTree] is built from.
//!
//! A [`TreeNode`] is a plain record: a key plus three links. Links are
//! [`NodeId`]s into the arena of the tree that owns the node, so a parent
//! link never owns anything and can't dangle into freed memory.
//!
//! # Examples
//!
//! ```
//! use binarytree::{BinarySearchTree, TreeNode};
//!
//! let mut tree = BinarySearchTree::new();
//! let root = tree.insert(TreeNode::new(100));
//! let left = tree.insert(TreeNode::new(50));
//!
//! let node = tree.node(left).unwrap();
//! assert_eq!(node.key(), &50);
//! assert_eq!(node.parent(), Some(root));
//! assert_eq!(node.left(), None);
//! ```

use std::fmt;

use crate::slot::Side;

/// A handle to a node stored in a [`BinarySearchTree`][crate::BinarySearchTree].
///
/// Handles are only meaningful for the tree that returned them. Once the node
/// is removed its slot may be reused by a later insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The position of this node in its tree's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A binary tree node holding a key and links to its parent and children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeNode<K> {
    key: K,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<K> TreeNode<K> {
    /// Construct an unlinked node holding `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            parent: None,
            left: None,
            right: None,
        }
    }

    /// Construct a node with every field given.
    ///
    /// The links are kept as given, but a tree resets them when the node is
    /// inserted.
    pub fn with_links(
        key: K,
        parent: Option<NodeId>,
        left: Option<NodeId>,
        right: Option<NodeId>,
    ) -> Self {
        Self {
            key,
            parent,
            left,
            right,
        }
    }

    /// The key of this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The parent of this node, `None` for a root or an unlinked node.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The left child of this node.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The right child of this node.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Replaces the key of this node.
    pub fn set_key(&mut self, key: K) {
        self.key = key;
    }

    /// Replaces the parent link of this node.
    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Replaces the left child link of this node.
    pub fn set_left(&mut self, left: Option<NodeId>) {
        self.left = left;
    }

    /// Replaces the right child link of this node.
    pub fn set_right(&mut self, right: Option<NodeId>) {
        self.right = right;
    }

    /// Consumes the node, returning its key.
    pub fn into_key(self) -> K {
        self.key
    }

    pub(crate) fn key_mut(&mut self) -> &mut K {
        &mut self.key
    }

    /// Drops all three links.
    pub(crate) fn unlink(&mut self) {
        self.parent = None;
        self.left = None;
        self.right = None;
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

impl<K> From<K> for TreeNode<K> {
    fn from(key: K) -> Self {
        Self::new(key)
    }
}
