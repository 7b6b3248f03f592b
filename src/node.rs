//! Owned storage for the tree: `Node`s and the `Link`s that hold them.
//!
//! Every `Node` is owned by exactly one `Link` (its parent's `left` or `right` slot, or the tree's
//! root slot). Nothing points back up the tree. Operations that need "the parent" of a node work
//! with a cursor on the `Link` that owns it instead, which is all a parent pointer would be used
//! for anyway: it is the slot we splice into.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// Which child slot of a node to follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The side a key is routed to when it's compared against a node's key. Keys equal to the
    /// node's key go left, so the left subtree holds `<=` keys and the right subtree `>` keys.
    pub(crate) fn of<K: Ord>(key: &K, node_key: &K) -> Self {
        match key.cmp(node_key) {
            Ordering::Less | Ordering::Equal => Side::Left,
            Ordering::Greater => Side::Right,
        }
    }
}

/// An owning slot for an optional subtree.
pub(crate) struct Link<K>(pub(crate) Option<Box<Node<K>>>);

impl<K> Drop for Link<K> {
    // Dropping a `Box<Node>` recursively would use one stack frame per level and degenerate trees
    // (e.g. built from sorted input) are as tall as they are big. Unlink children onto a heap
    // stack instead so every node is dropped with empty links.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
    }
}

// `Clone` and `PartialEq` walk with a heap stack for the same reason `Drop` does.
impl<K> Clone for Link<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        let mut cloned = Link::empty();
        {
            let mut pending: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
            if let Some(root) = self.root() {
                pending.push((root, &mut cloned));
            }
            while let Some((source, slot)) = pending.pop() {
                let node = slot.0.insert(Box::new(Node {
                    key: source.key.clone(),
                    left: Link::empty(),
                    right: Link::empty(),
                }));
                let Node { left, right, .. } = &mut **node;
                if let Some(source_left) = source.left() {
                    pending.push((source_left, left));
                }
                if let Some(source_right) = source.right() {
                    pending.push((source_right, right));
                }
            }
        }
        cloned
    }
}

impl<K> PartialEq for Link<K>
where
    K: PartialEq,
{
    /// Two links are equal when their subtrees have the same shape and the same keys in the same
    /// places.
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root(), other.root())];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.key == b.key => {
                    pending.push((a.left(), b.left()));
                    pending.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K> Eq for Link<K> where K: Eq {}

impl<K> fmt::Debug for Link<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.root(), f)
    }
}

impl<K> Link<K> {
    pub(crate) fn empty() -> Self {
        Link(None)
    }

    fn leaf(key: K) -> Self {
        Link(Some(Box::new(Node {
            key,
            left: Link::empty(),
            right: Link::empty(),
        })))
    }

    pub(crate) fn root(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    pub(crate) fn is_populated(&self) -> bool {
        self.0.is_some()
    }

    pub(crate) fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// The child slot on `side` of the node in this slot, if there is a node.
    fn child_mut(&mut self, side: Side) -> Option<&mut Self> {
        self.0.as_mut().map(|node| match side {
            Side::Left => &mut node.left,
            Side::Right => &mut node.right,
        })
    }

    /// Attaches `key` as a new leaf at the first empty slot on its search path.
    pub(crate) fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut cursor = self;
        while let Some(ref mut node) = cursor.0 {
            cursor = match Side::of(&key, &node.key) {
                Side::Left => &mut node.left,
                Side::Right => &mut node.right,
            };
        }
        *cursor = Link::leaf(key);
    }

    /// Finds the slot holding the first node (closest to the root) whose key equals `key`.
    pub(crate) fn find_slot(&mut self, key: &K) -> Option<&mut Self>
    where
        K: Ord,
    {
        let mut cursor = self;
        loop {
            let ordering = key.cmp(&cursor.root()?.key);
            if ordering == Ordering::Equal {
                return Some(cursor);
            }
            cursor = cursor.child_mut(if ordering == Ordering::Less {
                Side::Left
            } else {
                Side::Right
            })?;
        }
    }

    /// Removes the node in this slot and returns its key. The slot is refilled so the remaining
    /// subtree keeps the ordering invariant:
    ///
    /// * a leaf leaves the slot empty,
    /// * a node with one child is replaced by that child,
    /// * a node with two children keeps its place but takes the key of its in-order predecessor
    ///   (the largest key in its left subtree), whose node is unlinked instead.
    pub(crate) fn unlink(&mut self) -> Option<K> {
        let mut node = self.0.take()?;
        let removed = match (node.left.take(), node.right.take()) {
            (Link(None), Link(None)) => node.key,
            (Link(None), child) | (child, Link(None)) => {
                *self = child;
                node.key
            }
            (mut left, right) => match left.take_max() {
                Some(predecessor) => {
                    let removed = mem::replace(&mut node.key, predecessor);
                    node.left = left;
                    node.right = right;
                    self.0 = Some(node);
                    removed
                }
                // Only reachable with an empty left subtree, which is the one-child case.
                None => {
                    *self = right;
                    node.key
                }
            },
        };
        Some(removed)
    }

    /// Unlinks the leftmost node of this subtree, splicing its right child into its place.
    pub(crate) fn take_min(&mut self) -> Option<K> {
        self.take_extreme(Side::Left)
    }

    /// Unlinks the rightmost node of this subtree, splicing its left child into its place.
    pub(crate) fn take_max(&mut self) -> Option<K> {
        self.take_extreme(Side::Right)
    }

    fn take_extreme(&mut self, side: Side) -> Option<K> {
        let mut cursor = self;
        while cursor.root()?.child(side).is_populated() {
            cursor = cursor.child_mut(side)?;
        }

        let mut extreme = cursor.0.take()?;
        // The extreme node has nothing on `side` so it has at most one child to hand up.
        *cursor = match side {
            Side::Left => extreme.right.take(),
            Side::Right => extreme.left.take(),
        };
        Some(extreme.key)
    }
}

/// A `Node` stores one key and owns up to two subtrees. Every key in `left` is `<=` `key` and
/// every key in `right` is `>` `key`.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<K> Node<K> {
    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.root()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.root()
    }

    fn child(&self, side: Side) -> &Link<K> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Follows `side` links until there are none left.
    pub(crate) fn extreme(&self, side: Side) -> &Self {
        let mut node = self;
        while let Some(next) = node.child(side).root() {
            node = next;
        }
        node
    }

    /// How many nodes are in the subtree rooted at this node.
    pub(crate) fn count(&self) -> usize {
        1 + self.left().map_or(0, Self::count) + self.right().map_or(0, Self::count)
    }

    /// Edges on the longest path from this node down to a leaf. A leaf has a height of 0.
    pub(crate) fn height(&self) -> usize {
        match (self.left(), self.right()) {
            (None, None) => 0,
            (left, right) => 1 + left.map_or(0, Self::height).max(right.map_or(0, Self::height)),
        }
    }

    /// Levels on the shortest path from this node to a missing child. A node missing either child
    /// has a minimum depth of 1.
    pub(crate) fn min_depth(&self) -> usize {
        1 + self
            .left()
            .map_or(0, Self::min_depth)
            .min(self.right().map_or(0, Self::min_depth))
    }

    /// Levels on the longest path from this node to a missing child, i.e. `height() + 1`.
    pub(crate) fn max_depth(&self) -> usize {
        1 + self
            .left()
            .map_or(0, Self::max_depth)
            .max(self.right().map_or(0, Self::max_depth))
    }

    /// Whether every node in this subtree has zero or two children.
    pub(crate) fn is_full(&self) -> bool {
        match (self.left(), self.right()) {
            (None, None) => true,
            (Some(left), Some(right)) => left.is_full() && right.is_full(),
            _ => false,
        }
    }

    /// Checks the ordering invariant for this subtree given the bounds inherited from its
    /// ancestors: every key must be `> lower` and `<= upper`.
    pub(crate) fn is_ordered_within(&self, lower: Option<&K>, upper: Option<&K>) -> bool
    where
        K: Ord,
    {
        let above_lower = lower.map_or(true, |lower| self.key > *lower);
        let within_upper = upper.map_or(true, |upper| self.key <= *upper);

        above_lower
            && within_upper
            && self
                .left()
                .map_or(true, |left| left.is_ordered_within(lower, Some(&self.key)))
            && self
                .right()
                .map_or(true, |right| right.is_ordered_within(Some(&self.key), upper))
    }
}
