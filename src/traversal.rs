//! Ways to walk a [`Tree`]. The depth-first walks recurse, so they need stack space proportional
//! to the height of the tree. Visitors only ever see `&K`, so keys can't be changed (and the
//! ordering broken) mid-walk.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Order, Tree};
//!
//! let tree: Tree<_> = vec![10, 5, 15, 8, 3].into_iter().collect();
//!
//! let mut pre_order = Vec::new();
//! tree.for_each_pre_order(|key| pre_order.push(*key));
//! assert_eq!(pre_order, [10, 5, 3, 8, 15]);
//!
//! assert_eq!(tree.keys(Order::PostOrder), [&3, &8, &5, &15, &10]);
//! assert_eq!(tree.keys(Order::LevelOrder), [&10, &5, &15, &3, &8]);
//!
//! // Walking in order gives the keys sorted.
//! assert!(tree.iter().eq([3, 5, 8, 10, 15].iter()));
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;
use crate::tree::Tree;

/// The order in which a traversal visits keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Keys come out sorted.
    InOrder,
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
    /// Breadth first: the root, then every node one level down from left to right, and so on.
    LevelOrder,
}

impl<K> Tree<K> {
    /// Calls `visit` with every key in ascending order.
    pub fn for_each_in_order<F>(&self, visit: F)
    where
        F: FnMut(&K),
    {
        self.traverse(Order::InOrder, visit);
    }

    /// Calls `visit` with every key, each node before its subtrees.
    pub fn for_each_pre_order<F>(&self, visit: F)
    where
        F: FnMut(&K),
    {
        self.traverse(Order::PreOrder, visit);
    }

    /// Calls `visit` with every key, each node after its subtrees.
    pub fn for_each_post_order<F>(&self, visit: F)
    where
        F: FnMut(&K),
    {
        self.traverse(Order::PostOrder, visit);
    }

    /// Calls `visit` with every key, level by level starting at the root.
    pub fn for_each_level_order<F>(&self, visit: F)
    where
        F: FnMut(&K),
    {
        self.traverse(Order::LevelOrder, visit);
    }

    /// Calls `visit` with every key in the given `order`.
    pub fn traverse<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(&K),
    {
        self.walk(order, &mut visit);
    }

    /// Collects every key in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Order, Tree};
    ///
    /// let tree: Tree<_> = vec![2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.keys(Order::InOrder), [&1, &2, &3]);
    /// assert_eq!(tree.keys(Order::PreOrder), [&2, &1, &3]);
    /// ```
    pub fn keys(&self, order: Order) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        self.walk(order, &mut |key| keys.push(key));
        keys
    }

    // Unlike the public visitors, `visit` here is handed keys borrowed for as long as the tree
    // is, so `keys` can hold on to them.
    fn walk<'a, F>(&'a self, order: Order, visit: &mut F)
    where
        F: FnMut(&'a K),
    {
        let root = match self.root.root() {
            Some(root) => root,
            None => return,
        };
        match order {
            Order::InOrder => root.in_order(visit),
            Order::PreOrder => root.pre_order(visit),
            Order::PostOrder => root.post_order(visit),
            Order::LevelOrder => {
                let mut queue = VecDeque::new();
                queue.push_back(root);
                while let Some(node) = queue.pop_front() {
                    visit(&node.key);
                    queue.extend(node.left());
                    queue.extend(node.right());
                }
            }
        }
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root.root());
        iter
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Node<K> {
    fn in_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a K),
    {
        if let Some(left) = self.left() {
            left.in_order(visit);
        }
        visit(&self.key);
        if let Some(right) = self.right() {
            right.in_order(visit);
        }
    }

    fn pre_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a K),
    {
        visit(&self.key);
        if let Some(left) = self.left() {
            left.pre_order(visit);
        }
        if let Some(right) = self.right() {
            right.pre_order(visit);
        }
    }

    fn post_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a K),
    {
        if let Some(left) = self.left() {
            left.post_order(visit);
        }
        if let Some(right) = self.right() {
            right.post_order(visit);
        }
        visit(&self.key);
    }
}

/// An iterator over the keys of a [`Tree`] in ascending order, created by [`Tree::iter`].
///
/// It keeps the ancestors whose keys are still to come on a stack, so it needs no parent
/// pointers and no recursion.
#[derive(Clone, Debug)]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

impl<'a, K> FusedIterator for Iter<'a, K> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// The tree from the traversal exercise:
    ///
    /// ```text
    ///            10
    ///          /    \
    ///         5      15
    ///        / \    /  \
    ///       3   8  14   20
    ///          / \      /
    ///         7   9    17
    /// ```
    fn exercise_tree() -> Tree<i32> {
        let mut tree = Tree::new();
        tree.insert(10)
            .insert(5)
            .insert(15)
            .insert(8)
            .insert(3)
            .insert(7)
            .insert(20)
            .insert(17)
            .insert(9)
            .insert(14);
        tree
    }

    fn visited(tree: &Tree<i32>, order: Order) -> Vec<i32> {
        let mut keys = Vec::new();
        tree.traverse(order, |key| keys.push(*key));
        keys
    }

    #[test]
    fn in_order() {
        let tree = exercise_tree();
        let expected = [3, 5, 7, 8, 9, 10, 14, 15, 17, 20];

        assert_eq!(visited(&tree, Order::InOrder), expected);
        assert!(tree.iter().copied().eq(expected.iter().copied()));
    }

    #[test]
    fn pre_order() {
        let tree = exercise_tree();
        assert_eq!(
            visited(&tree, Order::PreOrder),
            [10, 5, 3, 8, 7, 9, 15, 14, 20, 17]
        );
    }

    #[test]
    fn post_order() {
        let tree = exercise_tree();
        assert_eq!(
            visited(&tree, Order::PostOrder),
            [3, 7, 9, 8, 5, 14, 17, 20, 15, 10]
        );
    }

    #[test]
    fn level_order() {
        let tree = exercise_tree();
        assert_eq!(
            visited(&tree, Order::LevelOrder),
            [10, 5, 15, 3, 8, 14, 20, 7, 9, 17]
        );
    }

    #[test]
    fn keys_match_visits() {
        let tree = exercise_tree();
        for order in [
            Order::InOrder,
            Order::PreOrder,
            Order::PostOrder,
            Order::LevelOrder,
        ]
        .iter()
        .copied()
        {
            let keys: Vec<i32> = tree.keys(order).into_iter().copied().collect();
            assert_eq!(keys, visited(&tree, order), "{:?}", order);
        }
    }

    #[test]
    fn empty_tree_visits_nothing() {
        let tree = Tree::<i32>::new();
        for order in [
            Order::InOrder,
            Order::PreOrder,
            Order::PostOrder,
            Order::LevelOrder,
        ]
        .iter()
        .copied()
        {
            assert!(visited(&tree, order).is_empty());
        }
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn iter_is_exact_size() {
        let tree = exercise_tree();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 10);

        iter.next();
        iter.next();
        assert_eq!(iter.len(), 8);
        assert_eq!(iter.count(), 8);
    }

    #[test]
    fn iter_keeps_duplicates() {
        let tree: Tree<_> = vec![2, 2, 1, 2, 3].into_iter().collect();
        let keys: Vec<_> = (&tree).into_iter().copied().collect();
        assert_eq!(keys, [1, 2, 2, 2, 3]);
    }
}
