//! Depth-first and breadth-first walks.
//!
//! Every walk starts at a given subtree root and returns the keys in the
//! order it visits them. The recursive and `_iterative` forms of each
//! depth-first walk produce the same sequence; the iterative ones keep their
//! own stack instead of using the call stack.
//!
//! # Examples
//!
//! ```
//! use binarytree::BinarySearchTree;
//!
//! let tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.dft_preorder(tree.root()), [&2, &1, &3]);
//! assert_eq!(tree.dft_inorder(tree.root()), [&1, &2, &3]);
//! assert_eq!(tree.dft_postorder(tree.root()), [&1, &3, &2]);
//! assert_eq!(tree.bft(tree.root()), [&2, &1, &3]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::NodeId;
use crate::tree::BinarySearchTree;

/// The three depth-first orders of one subtree, collected in a single walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalOrders<'a, K> {
    /// Each node before its subtrees.
    pub preorder: Vec<&'a K>,
    /// Each node between its left and right subtrees.
    pub inorder: Vec<&'a K>,
    /// Each node after its subtrees.
    pub postorder: Vec<&'a K>,
}

impl<K> BinarySearchTree<K> {
    /// Keys of the subtree at `root`, each node before its children.
    pub fn dft_preorder(&self, root: Option<NodeId>) -> Vec<&K> {
        let mut out = Vec::new();
        self.preorder_into(self.live(root), &mut out);
        out
    }

    /// Keys of the subtree at `root` in sorted order.
    pub fn dft_inorder(&self, root: Option<NodeId>) -> Vec<&K> {
        let mut out = Vec::new();
        self.inorder_into(self.live(root), &mut out);
        out
    }

    /// Keys of the subtree at `root`, each node after its children.
    pub fn dft_postorder(&self, root: Option<NodeId>) -> Vec<&K> {
        let mut out = Vec::new();
        self.postorder_into(self.live(root), &mut out);
        out
    }

    /// [`dft_preorder`][Self::dft_preorder] with an explicit stack.
    pub fn dft_preorder_iterative(&self, root: Option<NodeId>) -> Vec<&K> {
        let mut out = Vec::new();
        let mut stack: Vec<_> = self.live(root).into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = self.get(id);
            out.push(node.key());
            // Right goes on first so left comes off first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        out
    }

    /// [`dft_inorder`][Self::dft_inorder] with an explicit stack.
    pub fn dft_inorder_iterative(&self, root: Option<NodeId>) -> Vec<&K> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut curr = self.live(root);

        loop {
            if let Some(id) = curr {
                stack.push(id);
                curr = self.get(id).left();
            } else if let Some(id) = stack.pop() {
                let node = self.get(id);
                out.push(node.key());
                curr = node.right();
            } else {
                break;
            }
        }
        out
    }

    /// [`dft_postorder`][Self::dft_postorder] with an explicit stack.
    pub fn dft_postorder_iterative(&self, root: Option<NodeId>) -> Vec<&K> {
        self.postorder_ids(root)
            .into_iter()
            .map(|id| self.get(id).key())
            .collect()
    }

    /// Pre-, in-, and post-order of the subtree at `root` from one walk.
    pub fn dft_pre_in_post_order(&self, root: Option<NodeId>) -> TraversalOrders<'_, K> {
        let mut orders = TraversalOrders {
            preorder: Vec::new(),
            inorder: Vec::new(),
            postorder: Vec::new(),
        };
        self.all_orders_into(self.live(root), &mut orders);
        orders
    }

    /// Keys of the subtree at `root` level by level, left to right.
    pub fn bft(&self, root: Option<NodeId>) -> Vec<&K> {
        let mut out = Vec::new();
        let mut queue: VecDeque<_> = self.live(root).into_iter().collect();

        while let Some(id) = queue.pop_front() {
            let node = self.get(id);
            out.push(node.key());
            queue.extend(node.left());
            queue.extend(node.right());
        }
        out
    }

    /// Iterates over the keys of the whole tree in sorted order by following
    /// successor links.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            ids: self.iter_ids(),
        }
    }

    /// Iterates over the ids of the whole tree in key order.
    pub fn iter_ids(&self) -> Ids<'_, K> {
        Ids {
            tree: self,
            next: self.minimum(self.root()),
            remaining: self.len(),
        }
    }

    /// Ids of the subtree at `root`, each node after its children, without
    /// recursing.
    ///
    /// Popping the stack visits root, right, left; reversing that gives left,
    /// right, root.
    pub(crate) fn postorder_ids(&self, root: Option<NodeId>) -> Vec<NodeId> {
        let mut primary: Vec<_> = self.live(root).into_iter().collect();
        let mut finished = Vec::new();

        while let Some(id) = primary.pop() {
            let node = self.get(id);
            finished.push(id);
            primary.extend(node.left());
            primary.extend(node.right());
        }

        finished.reverse();
        finished
    }

    /// `root`, unless it names a node no longer in the tree.
    pub(crate) fn live(&self, root: Option<NodeId>) -> Option<NodeId> {
        root.filter(|&id| self.contains(id))
    }

    fn preorder_into<'a>(&'a self, root: Option<NodeId>, out: &mut Vec<&'a K>) {
        if let Some(id) = root {
            let node = self.get(id);
            out.push(node.key());
            self.preorder_into(node.left(), out);
            self.preorder_into(node.right(), out);
        }
    }

    fn inorder_into<'a>(&'a self, root: Option<NodeId>, out: &mut Vec<&'a K>) {
        if let Some(id) = root {
            let node = self.get(id);
            self.inorder_into(node.left(), out);
            out.push(node.key());
            self.inorder_into(node.right(), out);
        }
    }

    fn postorder_into<'a>(&'a self, root: Option<NodeId>, out: &mut Vec<&'a K>) {
        if let Some(id) = root {
            let node = self.get(id);
            self.postorder_into(node.left(), out);
            self.postorder_into(node.right(), out);
            out.push(node.key());
        }
    }

    fn all_orders_into<'a>(&'a self, root: Option<NodeId>, orders: &mut TraversalOrders<'a, K>) {
        if let Some(id) = root {
            let node = self.get(id);
            orders.preorder.push(node.key());
            self.all_orders_into(node.left(), orders);
            orders.inorder.push(node.key());
            self.all_orders_into(node.right(), orders);
            orders.postorder.push(node.key());
        }
    }
}

/// In-order iterator over node ids, created by
/// [`BinarySearchTree::iter_ids`].
#[derive(Debug)]
pub struct Ids<'a, K> {
    tree: &'a BinarySearchTree<K>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<K> Clone for Ids<'_, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<K> Iterator for Ids<'_, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.successor_inorder(id);
        self.remaining -= 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Ids<'_, K> {}
impl<K> FusedIterator for Ids<'_, K> {}

/// In-order iterator over keys, created by [`BinarySearchTree::iter`].
#[derive(Debug)]
pub struct Iter<'a, K> {
    ids: Ids<'a, K>,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            ids: self.ids.clone(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let tree = self.ids.tree;
        self.ids.next().map(|id| tree.get(id).key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a BinarySearchTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::TreeNode;

    fn fixture() -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::from_root(TreeNode::new(100));
        for key in &[50, 150, 25, 75, 125, 175, 110] {
            tree.insert(TreeNode::new(*key));
        }
        tree
    }

    fn keys(walk: Vec<&i32>) -> Vec<i32> {
        walk.into_iter().copied().collect()
    }

    #[test]
    fn fixture_orders() {
        let tree = fixture();
        let root = tree.root();

        assert_eq!(keys(tree.dft_preorder(root)), [100, 50, 25, 75, 150, 125, 110, 175]);
        assert_eq!(keys(tree.dft_inorder(root)), [25, 50, 75, 100, 110, 125, 150, 175]);
        assert_eq!(keys(tree.dft_postorder(root)), [25, 75, 50, 110, 125, 175, 150, 100]);
        assert_eq!(keys(tree.bft(root)), [100, 50, 150, 25, 75, 125, 175, 110]);
    }

    #[test]
    fn iterative_matches_recursive() {
        let tree = fixture();
        let root = tree.root();

        assert_eq!(tree.dft_preorder_iterative(root), tree.dft_preorder(root));
        assert_eq!(tree.dft_inorder_iterative(root), tree.dft_inorder(root));
        assert_eq!(tree.dft_postorder_iterative(root), tree.dft_postorder(root));
    }

    #[test]
    fn single_pass_orders() {
        let tree = fixture();
        let root = tree.root();
        let orders = tree.dft_pre_in_post_order(root);

        assert_eq!(orders.preorder, tree.dft_preorder(root));
        assert_eq!(orders.inorder, tree.dft_inorder(root));
        assert_eq!(orders.postorder, tree.dft_postorder(root));
    }

    #[test]
    fn subtree_walks() {
        let tree = fixture();
        let one_fifty = tree.search(&150);

        assert_eq!(keys(tree.dft_preorder(one_fifty)), [150, 125, 110, 175]);
        assert_eq!(keys(tree.bft(one_fifty)), [150, 125, 175, 110]);
        assert_eq!(keys(tree.dft_postorder_iterative(one_fifty)), [110, 125, 175, 150]);
    }

    #[test]
    fn empty_walks() {
        let tree = BinarySearchTree::<i32>::new();

        assert!(tree.dft_preorder(None).is_empty());
        assert!(tree.dft_inorder_iterative(None).is_empty());
        assert!(tree.dft_postorder_iterative(None).is_empty());
        assert!(tree.bft(tree.root()).is_empty());
        assert_eq!(tree.dft_pre_in_post_order(None), TraversalOrders::default());
        assert_eq!(tree.iter().next(), None);

        // Stale ids walk like empty subtrees.
        let full = fixture();
        assert!(full.dft_inorder(Some(NodeId(99))).is_empty());
    }

    #[test]
    fn after_removing_the_root() {
        let mut tree = fixture();
        let root = tree.root().unwrap();
        tree.remove(root).unwrap();

        assert_eq!(keys(tree.bft(tree.root())), [110, 50, 150, 25, 75, 125, 175]);
        assert_eq!(keys(tree.dft_inorder(tree.root())), [25, 50, 75, 110, 125, 150, 175]);
    }

    #[test]
    fn iter_follows_successors() {
        let tree = fixture();
        let iter = tree.iter();

        assert_eq!(iter.len(), 8);
        assert_eq!(iter.copied().collect::<Vec<_>>(), keys(tree.dft_inorder(tree.root())));

        let mut visited = 0;
        for key in &tree {
            assert!(tree.search(key).is_some());
            visited += 1;
        }
        assert_eq!(visited, tree.len());
    }
}
