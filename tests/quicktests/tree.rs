use plain_bst::{Order, Tree};

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map of key counts.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same multiset of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, counts: &mut HashMap<K, usize>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                *counts.entry(k.clone()).or_insert(0) += 1;
            }
            Op::Remove(k) => {
                let expected = match counts.get_mut(k) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        true
                    }
                    _ => false,
                };
                assert_eq!(bst.delete(k), expected);
            }
        }
    }
}

/// Keys in ascending order, one per visit.
fn in_order<K: Clone>(tree: &Tree<K>) -> Vec<K> {
    let mut keys = Vec::with_capacity(tree.len());
    tree.for_each_in_order(|key| keys.push(key.clone()));
    keys
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = HashMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        tree.is_valid()
            && tree.len() == counts.values().sum::<usize>()
            && counts
                .iter()
                .all(|(key, count)| tree.contains(key) == (*count > 0))
    }

    fn in_order_is_non_decreasing(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let keys = in_order(&tree);

        keys.windows(2).all(|pair| pair[0] <= pair[1])
    }

    fn size_matches_visits(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut visits = 0;
        tree.for_each_post_order(|_| visits += 1);
        tree.len() == visits && tree.len() == in_order(&tree).len()
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have inserted the same key multiple times - delete each one.
            while tree.delete(delete) {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == still_present.len()
            && tree.is_valid()
    }

    fn delete_miss_changes_nothing(xs: Vec<i8>, miss: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != miss).collect();
        let before = tree.clone();

        !tree.delete(&miss) && tree == before
    }

    fn min_max_match_sorted_order(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let keys = tree.keys(Order::InOrder);

        tree.min().ok() == keys.first().copied() && tree.max().ok() == keys.last().copied()
    }
}
