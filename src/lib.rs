//! This crate exposes an unbalanced Binary Search Tree over ordered keys, mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! the key that was inserted and will sometimes have child `Node`s. The invariants of this BST
//! are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less than its own key.
//! 2. For every `Node`, none of the `Node`s in its right subtree have a key less than its own
//!    key. Keys equal to it live here too.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys takes `O(height)` (where `height` is the number of edges on the longest
//! path from the root `Node` to a leaf `Node`). Nothing in [`unbalanced::Tree`] limits that
//! height, so inserting keys in sorted order produces a tree with a height of `N - 1`. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod unbalanced;

pub use unbalanced::Tree as OrderedBinaryTree;
