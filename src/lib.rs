//! This crate exposes a plain, unbalanced Binary Search Tree (BST) along
//! with the usual traversals and a few structural measurements.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert stored values and to visit them in sorted order. BSTs are
//! typically defined recursively using the notion of a `Node`. A `Node`
//! stores a value and two child trees, either of which may be empty. The
//! invariant this tree keeps is:
//!
//! 1. For every `Node`, all the values in its left subtree are less than
//!    its own value.
//! 2. For every `Node`, all the values in its right subtree are greater
//!    than or equal to its own value.
//!
//! The invariant is upheld by [`Tree::insert`] rather than checked on
//! every mutation. [`Tree::validate`] and [`Tree::validate_all`] look for
//! violations in trees assembled by hand with [`Tree::with_children`].
//!
//! Nothing here rebalances the tree on its own. Inserting values in
//! ascending order gives a tree whose depth equals its number of values,
//! which [`Tree::depth`] and [`Tree::balance`] make visible and
//! [`Tree::rebalance`] repairs.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod tree;

pub use error::OrderingViolation;
pub use tree::{Node, Tree};
