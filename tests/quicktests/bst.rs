use binarytree::{BinarySearchTree, NodeId, Slot, TreeNode};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a sorted vector.
/// This way we can ensure that after a random smattering of inserts
/// and deletes the tree still holds exactly the keys of the vector.
fn do_ops(ops: &[Op<i8>], bst: &mut BinarySearchTree<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(TreeNode::new(*k));
                let pos = model.partition_point(|x| x <= k);
                model.insert(pos, *k);
            }
            Op::Remove(k) => {
                if let Some(id) = bst.search(k) {
                    assert_eq!(bst.remove(id), Ok(*k));
                    let pos = model.iter().position(|x| x == k).unwrap();
                    model.remove(pos);
                }
            }
            Op::RemoveSuccessor(k) => {
                let next = bst.search(k).and_then(|id| bst.successor_inorder(id));
                if let Some(next) = next {
                    let removed = bst.remove(next).unwrap();
                    let pos = model.iter().position(|x| *x == removed).unwrap();
                    model.remove(pos);
                }
            }
        }
    }
}

/// Every child points back at its parent and the root has none.
fn links_are_consistent(tree: &BinarySearchTree<i8>) -> bool {
    let mut stack: Vec<NodeId> = tree.root().into_iter().collect();
    let root_ok = tree
        .root()
        .map_or(true, |root| tree.node(root).unwrap().parent().is_none());
    let mut seen = 0;

    while let Some(id) = stack.pop() {
        let node = tree.node(id).unwrap();
        for child in node.left().into_iter().chain(node.right()) {
            if tree.node(child).unwrap().parent() != Some(id) {
                return false;
            }
            stack.push(child);
        }
        seen += 1;
    }

    root_ok && seen == tree.len()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinarySearchTree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        tree.iter().copied().eq(model.iter().copied()) && links_are_consistent(&tree)
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none() && tree.search_recursive(tree.root(), x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while tree.remove_key(delete).is_some() {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
            && tree.len() == still_present.len()
            && links_are_consistent(&tree)
    }
}

quickcheck::quickcheck! {
    fn copy_matches_and_is_independent(xs: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let mut copy = tree.copy(tree.root());
        let same_shape = copy.bft(copy.root()) == tree.bft(tree.root());

        copy.destroy(Slot::Root);

        same_shape && copy.is_empty() && tree.len() == xs.len() && links_are_consistent(&tree)
    }
}

quickcheck::quickcheck! {
    fn destroy_is_idempotent(xs: Vec<i8>) -> bool {
        let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();

        tree.destroy(Slot::Root) == xs.len() && tree.destroy(Slot::Root) == 0 && tree.is_empty()
    }
}

#[test]
fn sorted_input_degenerates() {
    let tree: BinarySearchTree<_> = (1..=7).collect();

    assert_eq!(tree.height(tree.root()), 7);
    assert!(!tree.is_balanced(tree.root()));
}

#[test]
fn fixture_end_to_end() {
    let mut tree = BinarySearchTree::from_root(TreeNode::new(100));
    for key in [50, 150, 25, 75, 125, 175, 110].iter() {
        tree.insert(TreeNode::new(*key));
    }

    assert_eq!(tree.bft(tree.root()), [&100, &50, &150, &25, &75, &125, &175, &110]);
    assert_eq!(
        tree.dft_inorder(tree.root()),
        [&25, &50, &75, &100, &110, &125, &150, &175]
    );
    assert!(tree.is_balanced(tree.root()));

    let hundred = tree.search_recursive(tree.root(), &100).unwrap();
    assert_eq!(tree.remove(hundred), Ok(100));

    assert_eq!(tree.key(tree.root().unwrap()), Some(&110));
    assert_eq!(tree.bft(tree.root()), [&110, &50, &150, &25, &75, &125, &175]);
    assert_eq!(tree.dft_inorder(tree.root()), [&25, &50, &75, &110, &125, &150, &175]);
}
