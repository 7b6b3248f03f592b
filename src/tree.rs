//! An unbalanced, mutable BST. Nodes are owned top-down with `Box`es and there are no parent
//! pointers. Equal keys are kept (the tree is a multiset): an inserted key equal to a node's key
//! goes into that node's left subtree.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.min().is_err());
//!
//! tree.insert(2).insert(1).insert(3);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.max(), Ok(&3));
//!
//! // Deleting the root promotes its in-order predecessor.
//! assert!(tree.delete(&2));
//! assert_eq!(tree.keys(Order::PreOrder), [&1, &3]);
//!
//! // Deleting something that isn't there changes nothing.
//! assert!(!tree.delete(&2));
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::error::TreeError;
use crate::node::{Link, Side};

/// A Binary Search Tree of keys. This can be used for inserting, finding, and deleting keys as
/// well as walking them in several orders.
///
/// No balancing is done: the shape (and so the cost of every operation, `O(height)`) depends on
/// insertion order. Inserting sorted keys builds a tree as tall as it is big.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<K> {
    pub(crate) root: Link<K>,
    size: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("root", &self.root)
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link::empty(),
            size: 0,
        }
    }

    /// Builds a tree from a sequence of keys that may have gaps, inserting in input order. The
    /// first absent key fails the whole build.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::try_from_keys(vec![Some(2), Some(1)]).unwrap();
    /// assert_eq!(tree.len(), 2);
    ///
    /// let err = Tree::try_from_keys(vec![Some(2), None, Some(1)]).unwrap_err();
    /// assert_eq!(err, TreeError::MissingKey { position: 1 });
    /// ```
    pub fn try_from_keys<I>(keys: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = Option<K>>,
        K: Ord,
    {
        let mut tree = Self::new();
        for (position, key) in keys.into_iter().enumerate() {
            tree.insert(key.ok_or(TreeError::MissingKey { position })?);
        }
        Ok(tree)
    }

    /// How many keys are stored, duplicates included.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree stores no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root = Link::empty();
        self.size = 0;
    }

    /// Inserts the given key into the tree. A key equal to one already stored is kept as well, in
    /// the left subtree of the existing one. Returns the tree so inserts can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).insert(1).insert(0);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert!(tree.contains(&0));
    /// ```
    pub fn insert(&mut self, key: K) -> &mut Self
    where
        K: Ord,
    {
        self.root.insert(key);
        self.size += 1;
        self
    }

    /// Whether some node holds a key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut node = self.root.root();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// The smallest key, or [`TreeError::EmptyTree`].
    pub fn min(&self) -> Result<&K, TreeError> {
        self.extreme(Side::Left)
    }

    /// The largest key, or [`TreeError::EmptyTree`].
    pub fn max(&self) -> Result<&K, TreeError> {
        self.extreme(Side::Right)
    }

    fn extreme(&self, side: Side) -> Result<&K, TreeError> {
        self.root
            .root()
            .map(|root| &root.extreme(side).key)
            .ok_or(TreeError::EmptyTree)
    }

    /// Deletes one node holding `key` and returns whether there was one to delete. See
    /// [`remove`][Self::remove].
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        self.remove(key).is_some()
    }

    /// Deletes the node closest to the root holding `key` and returns the key it held. If the
    /// tree has no such node, nothing happens.
    ///
    /// A node with two children isn't unlinked itself: it takes over the key of its in-order
    /// predecessor (the largest key of its left subtree) and the predecessor's node is unlinked
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Order, Tree};
    ///
    /// let mut tree: Tree<_> = vec![10, 5, 15, 3, 7, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&10), Some(10));
    /// assert_eq!(tree.keys(Order::PreOrder), [&8, &5, &3, &7, &15]);
    /// assert_eq!(tree.remove(&10), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let removed = self.root.find_slot(key)?.unlink()?;
        self.size -= 1;
        Some(removed)
    }

    /// Removes and returns the smallest key, or [`TreeError::EmptyTree`].
    pub fn pop_min(&mut self) -> Result<K, TreeError> {
        let min = self.root.take_min().ok_or(TreeError::EmptyTree)?;
        self.size -= 1;
        Ok(min)
    }

    /// Removes and returns the largest key, or [`TreeError::EmptyTree`].
    pub fn pop_max(&mut self) -> Result<K, TreeError> {
        let max = self.root.take_max().ok_or(TreeError::EmptyTree)?;
        self.size -= 1;
        Ok(max)
    }

    /// Edges on the longest path from the root to a leaf, or [`TreeError::EmptyTree`]. A tree
    /// with a single node has a height of 0.
    pub fn height(&self) -> Result<usize, TreeError> {
        self.root
            .root()
            .map(|root| root.height())
            .ok_or(TreeError::EmptyTree)
    }

    /// Whether every node has either zero or two children. An empty tree is full.
    pub fn is_full(&self) -> bool {
        self.root.root().map_or(true, |root| root.is_full())
    }

    /// Whether the shortest and the longest paths from the root to a missing child differ by at
    /// most one level. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let bushy: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// let stringy: Tree<_> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert!(bushy.is_balanced());
    /// assert!(!stringy.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.root
            .root()
            .map_or(true, |root| root.max_depth() - root.min_depth() <= 1)
    }

    /// Checks the tree's invariants from scratch: every key in a node's left subtree is `<=` its
    /// key, every key in its right subtree is `>` its key, and the stored size matches the number
    /// of nodes.
    pub fn is_valid(&self) -> bool
    where
        K: Ord,
    {
        match self.root.root() {
            None => self.size == 0,
            Some(root) => root.count() == self.size && root.is_ordered_within(None, None),
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    /// Inserts the keys in iteration order. No balancing is done so sorted input gives a tree
    /// shaped like a list.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
