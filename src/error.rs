use thiserror::Error;

use crate::node::NodeId;
use crate::slot::{Side, Slot};

/// Contract violations reported by structural operations.
///
/// Lookups never fail with one of these: a missing key is just `None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The handle does not name a node currently in the tree.
    #[error("node {0} is not in the tree")]
    Vacant(NodeId),
    /// A rotation was requested on a link that holds no subtree.
    #[error("nothing to rotate in the {0} slot")]
    EmptySlot(Slot),
    /// A rotation needs the child it promotes.
    #[error("node {node} has no {side} child to rotate up")]
    MissingChild {
        /// The root of the subtree being rotated.
        node: NodeId,
        /// The side whose child was missing.
        side: Side,
    },
    /// Rotating `child` up over `node` would leave a key equal to `child`'s
    /// in its left subtree.
    #[error("rotating {child} above {node} would put an equal key on its left")]
    TiedKeys {
        /// The root of the subtree being rotated.
        node: NodeId,
        /// The right child holding the same key.
        child: NodeId,
    },
}
