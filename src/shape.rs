//! Height, balance, and the single rotations that reshape a subtree without
//! changing its in-order sequence.

use crate::error::TreeError;
use crate::node::NodeId;
use crate::slot::{Side, Slot};
use crate::tree::BinarySearchTree;

impl<K> BinarySearchTree<K> {
    /// How many levels are in the subtree at `root`. An empty subtree has a
    /// height of 0 and a lone node has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::BinarySearchTree;
    ///
    /// let chain: BinarySearchTree<_> = (1..=5).collect();
    /// assert_eq!(chain.height(chain.root()), 5);
    ///
    /// let bushy: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(bushy.height(bushy.root()), 2);
    /// ```
    pub fn height(&self, root: Option<NodeId>) -> usize {
        self.fold_heights(root, |_, _| true).unwrap_or(0)
    }

    /// Whether, at every node of the subtree at `root`, the heights of the
    /// two children differ by at most one.
    pub fn is_balanced(&self, root: Option<NodeId>) -> bool {
        self.fold_heights(root, |left, right| left.abs_diff(right) <= 1)
            .is_some()
    }

    /// The height of the subtree at `root`, worked out bottom-up in one
    /// post-order pass. `None` as soon as `keep(left, right)` rejects the
    /// child heights of some node.
    fn fold_heights(
        &self,
        root: Option<NodeId>,
        keep: impl Fn(usize, usize) -> bool,
    ) -> Option<usize> {
        // Post-order puts a node's right height on top of its left one.
        let mut heights = Vec::new();
        for id in self.postorder_ids(root) {
            let node = self.get(id);
            let right = node.right().and_then(|_| heights.pop()).unwrap_or(0);
            let left = node.left().and_then(|_| heights.pop()).unwrap_or(0);
            if !keep(left, right) {
                return None;
            }
            heights.push(left.max(right) + 1);
        }
        Some(heights.pop().unwrap_or(0))
    }
}

impl<K> BinarySearchTree<K>
where
    K: Ord,
{
    /// Rotate the subtree held by `slot` to the left. This moves the right
    /// child up and the old subtree root down to its left. Returns the new
    /// subtree root, which `slot` now holds.
    ///
    /// # Errors
    ///
    /// - [`TreeError::Vacant`] if `slot` is a child link of a node not in the tree.
    /// - [`TreeError::EmptySlot`] if `slot` holds nothing.
    /// - [`TreeError::MissingChild`] if the subtree root has no right child.
    /// - [`TreeError::TiedKeys`] if that right child has the same key as the
    ///   subtree root.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      slot                    slot
    ///       |                       |
    ///    old_root                new_root
    ///    /     \                 /     \
    ///   x    new_root  rotate -> old_root  z
    ///         /  \              /  \
    ///        y    z            x    y
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::{BinarySearchTree, Slot};
    ///
    /// let mut tree: BinarySearchTree<_> = vec![1, 2, 3].into_iter().collect();
    /// let two = tree.rotate_left(Slot::Root).unwrap();
    ///
    /// assert_eq!(tree.root(), Some(two));
    /// assert_eq!(tree.key(two), Some(&2));
    /// assert!(tree.is_balanced(tree.root()));
    /// ```
    pub fn rotate_left(&mut self, slot: Slot) -> Result<NodeId, TreeError> {
        self.rotate(slot, Side::Right)
    }

    /// Rotate the subtree held by `slot` to the right. This moves the left
    /// child up and the old subtree root down to its right. Returns the new
    /// subtree root, which `slot` now holds.
    ///
    /// # Errors
    ///
    /// - [`TreeError::Vacant`] if `slot` is a child link of a node not in the tree.
    /// - [`TreeError::EmptySlot`] if `slot` holds nothing.
    /// - [`TreeError::MissingChild`] if the subtree root has no left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        slot                  slot
    ///         |                     |
    ///      old_root              new_root
    ///      /     \               /     \
    ///   new_root  z   rotate ->  x   old_root
    ///    / \                          /  \
    ///   x   y                        y    z
    /// ```
    pub fn rotate_right(&mut self, slot: Slot) -> Result<NodeId, TreeError> {
        self.rotate(slot, Side::Left)
    }

    /// Promotes the `up` child of the subtree root held by `slot`.
    fn rotate(&mut self, slot: Slot, up: Side) -> Result<NodeId, TreeError> {
        if let Some(owner) = slot.owner() {
            self.try_get(owner)?;
        }
        let old_root = self.link(slot).ok_or(TreeError::EmptySlot(slot))?;
        let old_node = self.get(old_root);
        let new_root = old_node.child(up).ok_or(TreeError::MissingChild {
            node: old_root,
            side: up,
        })?;
        let new_node = self.get(new_root);
        // Only a right child can tie, and it may not end up on anybody's left.
        if new_node.key() == old_node.key() {
            return Err(TreeError::TiedKeys {
                node: old_root,
                child: new_root,
            });
        }
        let moved = new_node.child(up.opposite());

        self.set_link(Slot::Child(old_root, up), moved);
        self.set_link(slot, Some(new_root));
        self.set_link(Slot::Child(new_root, up.opposite()), Some(old_root));

        self.check_links(old_root);
        self.check_links(new_root);
        Ok(new_root)
    }
}
