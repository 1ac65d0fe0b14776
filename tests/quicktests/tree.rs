use bintree::Tree;

use crate::Op;

/// Applies a set of operations to a tree and a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// and rebuilds we have the same values, in the same order, in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, model: &mut Vec<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                model.push(x.clone());
            }
            Op::Append(xs) => {
                bst.append(xs.iter().cloned());
                model.extend(xs.iter().cloned());
            }
            Op::Reorder => bst.reorder(),
            Op::Rebalance => bst.rebalance(),
        }
    }
    model.sort();
}

/// The smallest depth a tree holding `len` values can have.
fn minimal_depth(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        tree.to_list() == model && tree.validate_all().is_ok()
    }
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        tree.inorder().zip(tree.inorder().skip(1)).all(|(a, b)| a <= b)
            && tree.len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn validate_never_fails_on_inserted_trees(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.validate().is_ok() && tree.validate_all().is_ok()
    }
}

quickcheck::quickcheck! {
    fn preorder_and_inorder_agree_on_contents(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let mut preorder: Vec<_> = tree.preorder().copied().collect();
        preorder.sort();

        preorder == tree.to_list()
    }
}

quickcheck::quickcheck! {
    fn preorder_replay_rebuilds_same_tree(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let replayed: Tree<_> = tree.preorder().copied().collect();

        replayed == tree && tree.map(|x| *x) == tree
    }
}

quickcheck::quickcheck! {
    fn map_does_not_touch_original(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let before = tree.to_list();

        let mapped = tree.map(|x| i16::from(*x) * i16::from(*x));
        let mut expected: Vec<_> = xs.iter().map(|x| i16::from(*x) * i16::from(*x)).collect();
        expected.sort();

        tree.to_list() == before && mapped.to_list() == expected
    }
}

quickcheck::quickcheck! {
    fn fold_matches_iterator_sum(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        tree.fold(0i64, |acc, x| acc + i64::from(*x)) == xs.iter().map(|x| i64::from(*x)).sum::<i64>()
    }
}

quickcheck::quickcheck! {
    fn balance_is_difference_of_child_depths(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        match (tree.left(), tree.right()) {
            (Some(l), Some(r)) => {
                tree.balance() == r.depth() as isize - l.depth() as isize
                    && tree.depth() == 1 + l.depth().max(r.depth())
            }
            _ => tree.is_empty() && tree.depth() == 0 && tree.balance() == 0,
        }
    }
}

quickcheck::quickcheck! {
    fn reorder_skews_fully_right(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.reorder();

        tree.depth() == xs.len()
            && tree.balance() == (xs.len() as isize - 1).max(0)
            && tree.validate_all().is_ok()
    }
}

quickcheck::quickcheck! {
    fn rebalance_gives_minimal_depth_for_distinct_values(xs: Vec<u16>) -> bool {
        let mut distinct = xs;
        distinct.sort();
        distinct.dedup();

        let mut tree: Tree<_> = distinct.iter().copied().collect();
        tree.rebalance();

        tree.depth() == minimal_depth(distinct.len())
            && tree.balance().abs() <= 1
            && tree.to_list() == distinct
    }
}
