//! An unbalanced Binary Search Tree whose nodes keep a link to their parent.
//!
//! Nodes live in an arena owned by the tree and are addressed by [`NodeId`].
//! Lookups hand back ids, and structural operations such as
//! [`remove`][BinarySearchTree::remove] take them, so a caller can search for
//! a node, walk to its successor, and remove it without re-searching.
//!
//! Equal keys are allowed. A key equal to a node's key is routed into that
//! node's right subtree, so every key in a node's left subtree is strictly
//! smaller than its key and every key in its right subtree is greater or
//! equal.
//!
//! # Examples
//!
//! ```
//! use binarytree::{BinarySearchTree, TreeNode};
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! let one = tree.insert(TreeNode::new(1));
//! assert_eq!(tree.search(&1), Some(one));
//!
//! // Removing a node hands back its key.
//! assert_eq!(tree.remove(one), Ok(1));
//! assert_eq!(tree.search(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::TreeError;
use crate::node::{NodeId, TreeNode};
use crate::slot::{Side, Slot};

/// A Binary Search Tree of keys. Insertion order decides its shape; nothing
/// rebalances it, so sorted input degenerates into a chain.
#[derive(Clone)]
pub struct BinarySearchTree<K> {
    nodes: Vec<Option<TreeNode<K>>>,
    // Vacant `nodes` entries, reused before the arena grows.
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<K> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for BinarySearchTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("root", &self.root)
            .field("len", &self.len)
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> BinarySearchTree<K> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Generate a tree holding only `root`. Any links on `root` are dropped.
    pub fn from_root(root: TreeNode<K>) -> Self {
        let mut tree = Self::new();
        tree.attach(Slot::Root, root);
        tree
    }

    /// The root of the tree, `None` when the tree is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether `id` names a node currently in this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// The node behind `id`, if it is still in the tree.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode<K>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// The key stored at `id`, if it is still in the tree.
    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.node(id).map(TreeNode::key)
    }

    /// The link that currently holds `id`: the root link or a child link of
    /// its parent.
    pub fn slot_of(&self, id: NodeId) -> Result<Slot, TreeError> {
        self.try_get(id)?;
        Ok(self.slot_of_linked(id))
    }

    /// The node in the leftmost position of the subtree at `root`, i.e. the
    /// one with the smallest key.
    ///
    /// A handle that's not in the tree is treated as an empty subtree.
    pub fn minimum(&self, root: Option<NodeId>) -> Option<NodeId> {
        self.extreme(root, Side::Left)
    }

    /// The node in the rightmost position of the subtree at `root`. With
    /// duplicate keys this is the last of the largest.
    pub fn maximum(&self, root: Option<NodeId>) -> Option<NodeId> {
        self.extreme(root, Side::Right)
    }

    /// The node that comes right after `id` in an in-order walk, or `None`
    /// if `id` is the last node.
    ///
    /// If `id` has a right subtree its successor is the minimum there.
    /// Otherwise we climb until we come up out of a left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let one = tree.search(&1).unwrap();
    /// let two = tree.successor_inorder(one).unwrap();
    ///
    /// assert_eq!(tree.key(two), Some(&2));
    /// assert_eq!(tree.successor_inorder(tree.search(&3).unwrap()), None);
    /// ```
    pub fn successor_inorder(&self, id: NodeId) -> Option<NodeId> {
        self.neighbour(id, Side::Right)
    }

    /// The node that comes right before `id` in an in-order walk, or `None`
    /// if `id` is the first node.
    pub fn predecessor_inorder(&self, id: NodeId) -> Option<NodeId> {
        self.neighbour(id, Side::Left)
    }

    /// Deletes the node at `id` and returns the key it held.
    ///
    /// A node with at most one child is spliced out and its child takes its
    /// place. A node with two children stays where it is: its in-order
    /// successor is spliced out instead and the successor's key moves into
    /// `id`. Either way every other id stays valid.
    ///
    /// # Errors
    ///
    /// [`TreeError::Vacant`] if `id` is not in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(tree.remove(root), Ok(2));
    ///
    /// // The root node survives and now holds the successor's key.
    /// assert_eq!(tree.root(), Some(root));
    /// assert_eq!(tree.key(root), Some(&3));
    /// ```
    pub fn remove(&mut self, id: NodeId) -> Result<K, TreeError>
    where
        K: Ord,
    {
        let node = self.try_get(id)?;
        let splice = match (node.left(), node.right()) {
            (Some(_), Some(_)) => self
                .successor_inorder(id)
                .expect("A node with a right child has a successor"),
            _ => id,
        };

        let spliced = self.get(splice);
        let promoted = spliced.left().or_else(|| spliced.right());
        let slot = self.slot_of_linked(splice);
        self.set_link(slot, promoted);

        let mut removed = self.release(splice);
        if splice != id {
            mem::swap(self.get_mut(id).key_mut(), removed.key_mut());
        }

        if let Some(owner) = slot.owner() {
            self.check_links(owner);
        }
        if let Some(promoted) = promoted {
            self.check_links(promoted);
        }

        Ok(removed.into_key())
    }

    /// Frees every node in the subtree held by `slot`, post-order, and empties
    /// the slot. Returns how many nodes were freed.
    ///
    /// Destroying an already empty slot, or a child slot of a node that is no
    /// longer in the tree, frees nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::{BinarySearchTree, Slot};
    ///
    /// let mut tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.destroy(Slot::Root), 3);
    /// assert_eq!(tree.destroy(Slot::Root), 0);
    /// assert!(tree.is_empty());
    /// ```
    pub fn destroy(&mut self, slot: Slot) -> usize {
        if let Some(owner) = slot.owner() {
            if !self.contains(owner) {
                return 0;
            }
        }
        let Some(subtree) = self.link(slot) else {
            return 0;
        };

        self.set_link(slot, None);
        self.free_subtree(subtree)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.destroy(Slot::Root);
        debug_assert_eq!(self.len, 0);
        self.nodes.clear();
        self.free.clear();
    }

    /// Builds an independent tree out of the subtree at `root`.
    ///
    /// The copy has fresh ids. Its root has no parent; every other node in it
    /// links to its copied parent, so the copy supports the same walks as the
    /// original.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let mut copy = tree.copy(tree.root());
    ///
    /// copy.remove_key(&1);
    ///
    /// assert_eq!(copy.dft_inorder(copy.root()), [&2, &3]);
    /// assert_eq!(tree.dft_inorder(tree.root()), [&1, &2, &3]);
    /// ```
    pub fn copy(&self, root: Option<NodeId>) -> Self
    where
        K: Clone,
    {
        let mut copy = Self::new();
        // Each pending node is copied into the slot its copied parent left.
        let mut pending: Vec<(NodeId, Slot)> = self
            .live(root)
            .map(|id| (id, Slot::Root))
            .into_iter()
            .collect();

        while let Some((from, slot)) = pending.pop() {
            let node = self.get(from);
            let id = copy.attach(slot, TreeNode::new(node.key().clone()));
            pending.extend(node.right().map(|right| (right, Slot::right_of(id))));
            pending.extend(node.left().map(|left| (left, Slot::left_of(id))));
        }
        copy
    }

    /// Releases every node of the subtree at `id`, children first. The link
    /// into `id` must already be cut.
    fn free_subtree(&mut self, id: NodeId) -> usize {
        let doomed = self.postorder_ids(Some(id));
        for &id in &doomed {
            self.release(id);
        }
        doomed.len()
    }

    fn extreme(&self, root: Option<NodeId>, side: Side) -> Option<NodeId> {
        let mut id = root?;
        let mut node = self.node(id)?;
        while let Some(next) = node.child(side) {
            id = next;
            node = self.get(id);
        }
        Some(id)
    }

    /// Shared walk for successor (`side == Right`) and predecessor.
    fn neighbour(&self, id: NodeId, side: Side) -> Option<NodeId> {
        let node = self.node(id)?;
        if let Some(child) = node.child(side) {
            return self.extreme(Some(child), side.opposite());
        }

        let mut curr = id;
        let mut parent = node.parent();
        while let Some(up) = parent {
            let up_node = self.get(up);
            if up_node.child(side) != Some(curr) {
                break;
            }
            curr = up;
            parent = up_node.parent();
        }
        parent
    }

    /// Moves `node` into the arena and hangs it off `slot`.
    pub(crate) fn attach(&mut self, slot: Slot, mut node: TreeNode<K>) -> NodeId {
        node.unlink();
        let id = self.alloc(node);
        self.set_link(slot, Some(id));
        id
    }

    fn alloc(&mut self, node: TreeNode<K>) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Takes the node at `id` out of the arena. Its neighbours must no longer
    /// link to it.
    fn release(&mut self, id: NodeId) -> TreeNode<K> {
        let node = self.nodes[id.0]
            .take()
            .expect("Releasing a node implies it is in the tree");
        self.free.push(id);
        self.len -= 1;
        node
    }

    pub(crate) fn try_get(&self, id: NodeId) -> Result<&TreeNode<K>, TreeError> {
        self.node(id).ok_or(TreeError::Vacant(id))
    }

    /// The node behind a link that the tree itself maintains.
    pub(crate) fn get(&self, id: NodeId) -> &TreeNode<K> {
        self.node(id).expect("Tree links only point at live nodes")
    }

    fn get_mut(&mut self, id: NodeId) -> &mut TreeNode<K> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect("Tree links only point at live nodes")
    }

    pub(crate) fn link(&self, slot: Slot) -> Option<NodeId> {
        match slot {
            Slot::Root => self.root,
            Slot::Child(parent, side) => self.get(parent).child(side),
        }
    }

    /// Points `slot` at `child` and points `child` back at the slot's owner.
    /// Whatever `slot` held before is left dangling for the caller to deal
    /// with.
    pub(crate) fn set_link(&mut self, slot: Slot, child: Option<NodeId>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Child(parent, side) => self.get_mut(parent).set_child(side, child),
        }
        if let Some(child) = child {
            self.get_mut(child).set_parent(slot.owner());
        }
    }

    pub(crate) fn slot_of_linked(&self, id: NodeId) -> Slot {
        match self.get(id).parent() {
            None => Slot::Root,
            Some(parent) if self.get(parent).left() == Some(id) => Slot::left_of(parent),
            Some(parent) => Slot::right_of(parent),
        }
    }

    /// In debug builds, asserts the ordering and parent links around `id`.
    pub(crate) fn check_links(&self, id: NodeId)
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            let node = self.get(id);
            if let Some(left) = node.left() {
                let left = self.get(left);
                assert!(left.key() < node.key());
                assert_eq!(left.parent(), Some(id));
            }
            if let Some(right) = node.right() {
                let right = self.get(right);
                assert!(right.key() >= node.key());
                assert_eq!(right.parent(), Some(id));
            }
            if node.parent().is_some() {
                assert_eq!(self.link(self.slot_of_linked(id)), Some(id));
            } else {
                assert_eq!(self.root, Some(id));
            }
        }
    }
}

impl<K> BinarySearchTree<K>
where
    K: Ord,
{
    /// Inserts `node` at the bottom of the tree and returns its id. Keys
    /// smaller than a node's key go left, everything else goes right, so a
    /// duplicate ends up to the right of the keys it equals.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::{BinarySearchTree, TreeNode};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// let first = tree.insert(TreeNode::new(5));
    /// let second = tree.insert(TreeNode::new(5));
    ///
    /// assert_eq!(tree.node(first).unwrap().right(), Some(second));
    /// assert_eq!(tree.search(&5), Some(first));
    /// ```
    pub fn insert(&mut self, node: TreeNode<K>) -> NodeId {
        let mut slot = Slot::Root;
        while let Some(id) = self.link(slot) {
            slot = self.descend(id, node.key());
        }

        let id = self.attach(slot, node);
        self.check_links(slot.owner().unwrap_or(id));
        id
    }

    /// Same as [`insert`][Self::insert] but walks down recursively, one child
    /// slot at a time.
    pub fn insert_recursive(&mut self, node: TreeNode<K>) -> NodeId {
        self.insert_at(Slot::Root, node)
    }

    /// Inserts a new node holding `key`.
    pub fn insert_key(&mut self, key: K) -> NodeId {
        self.insert(key.into())
    }

    /// Searches for `key` and removes the first node holding it.
    pub fn remove_key(&mut self, key: &K) -> Option<K> {
        let id = self.search(key)?;
        self.remove(id).ok()
    }

    /// Finds a node holding `key`, starting at the tree's root.
    pub fn search(&self, key: &K) -> Option<NodeId> {
        self.search_iterative(self.root, key)
    }

    /// Finds a node holding `key` in the subtree at `root`. With duplicates,
    /// the match closest to `root` wins.
    pub fn search_recursive(&self, root: Option<NodeId>, key: &K) -> Option<NodeId> {
        let id = root?;
        let node = self.node(id)?;
        match key.cmp(node.key()) {
            Ordering::Less => self.search_recursive(node.left(), key),
            Ordering::Equal => Some(id),
            Ordering::Greater => self.search_recursive(node.right(), key),
        }
    }

    /// Loop form of [`search_recursive`][Self::search_recursive]. Same
    /// result, no call per level.
    pub fn search_iterative(&self, root: Option<NodeId>, key: &K) -> Option<NodeId> {
        let mut curr = root;
        while let Some(id) = curr {
            let node = self.node(id)?;
            curr = match key.cmp(node.key()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// The deepest node that has both `one` and `another` in its subtree.
    ///
    /// Returns `None` when either key is not in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![100, 50, 150, 25, 75].into_iter().collect();
    /// let ancestor = tree.lowest_common_ancestor(&25, &75).unwrap();
    ///
    /// assert_eq!(tree.key(ancestor), Some(&50));
    /// assert_eq!(tree.lowest_common_ancestor(&25, &60), None);
    /// ```
    pub fn lowest_common_ancestor(&self, one: &K, another: &K) -> Option<NodeId> {
        self.search(one)?;
        self.search(another)?;

        let mut curr = self.root;
        while let Some(id) = curr {
            let node = self.get(id);
            if node.key() > one && node.key() > another {
                curr = node.left();
            } else if node.key() < one && node.key() < another {
                curr = node.right();
            } else {
                return Some(id);
            }
        }
        None
    }

    fn insert_at(&mut self, slot: Slot, node: TreeNode<K>) -> NodeId {
        match self.link(slot) {
            None => {
                let id = self.attach(slot, node);
                self.check_links(slot.owner().unwrap_or(id));
                id
            }
            Some(id) => {
                let next = self.descend(id, node.key());
                self.insert_at(next, node)
            }
        }
    }

    /// The child slot of `id` that `key` belongs under.
    fn descend(&self, id: NodeId, key: &K) -> Slot {
        if key < self.get(id).key() {
            Slot::left_of(id)
        } else {
            Slot::right_of(id)
        }
    }
}

impl<K> FromIterator<K> for BinarySearchTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for BinarySearchTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert_key(key);
        }
    }
}
