//! This crate exposes a plain, unbalanced Binary Search Tree (BST) mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a key and will sometimes have child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than or
//!    equal to its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than
//!    its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The first invariant allows equal keys, so the [`Tree`] here stores a multiset: inserting a key
//! that's already present adds another node for it, down the left side.
//!
//! The benefits of these invariants are many. For instance, searching for keys in the tree takes
//! `O(height)` (where `height` is defined as the longest path from the root `Node` to a leaf
//! `Node`). This tree does nothing to limit its height, so inserting keys in sorted order gives a
//! tree of height `N - 1` and every operation degrades to `O(N)`. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then the right subtree.
//! See [`traversal`] for that and the other orders.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Order, Tree};
//!
//! let mut tree: Tree<_> = vec![10, 5, 15, 8, 3, 7, 20, 17, 9, 14].into_iter().collect();
//!
//! assert_eq!(tree.keys(Order::InOrder), [&3, &5, &7, &8, &9, &10, &14, &15, &17, &20]);
//! assert!(tree.is_valid());
//!
//! tree.delete(&10);
//! assert_eq!(tree.keys(Order::PreOrder)[0], &9);
//! assert!(tree.is_valid());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![forbid(unsafe_code)]

pub mod error;
mod node;
pub mod traversal;
pub mod tree;

pub use error::TreeError;
pub use traversal::{Iter, Order};
pub use tree::Tree;
