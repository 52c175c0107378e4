//! Names for the places a node link can live.
//!
//! A [`Slot`] is either the tree's root link or one of a node's two child
//! links. Operations that rebind "whatever points at this subtree" (recursive
//! insert, rotations, destroy) take a `Slot` so the empty-tree case and the
//! child case go through the same code.

use std::fmt;

use crate::node::NodeId;

/// Which child of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child; keys strictly less than the parent's.
    Left,
    /// The right child; keys greater than or equal to the parent's.
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A link that may hold the root of a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The tree's own root link.
    Root,
    /// The `Side` child link of the given node.
    Child(NodeId, Side),
}

impl Slot {
    /// The left child link of `node`.
    pub fn left_of(node: NodeId) -> Self {
        Slot::Child(node, Side::Left)
    }

    /// The right child link of `node`.
    pub fn right_of(node: NodeId) -> Self {
        Slot::Child(node, Side::Right)
    }

    /// The node owning this link, `None` for the root link.
    pub fn owner(self) -> Option<NodeId> {
        match self {
            Slot::Root => None,
            Slot::Child(parent, _) => Some(parent),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Root => f.write_str("root"),
            Slot::Child(parent, side) => write!(f, "{} child of {}", side, parent),
        }
    }
}
