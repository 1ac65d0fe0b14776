//! Lazy traversals over a [`Tree`].
//!
//! Every traversal keeps an explicit stack of the nodes it still has to visit instead of
//! recursing, so walking a skewed tree never grows the call stack. Each call to
//! [`Tree::inorder`] or [`Tree::preorder`] starts a fresh, independent traversal.

use std::iter::FusedIterator;
use std::mem;

use crate::tree::{Node, Tree};

/// Borrowing iterator yielding values in ascending order (left subtree, node, right subtree).
///
/// Created by [`Tree::inorder`].
#[derive(Clone, Debug)]
pub struct Inorder<'a, T> {
    /// Nodes whose left subtree has been visited but whose own value hasn't been yielded yet.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    /// Pushes `tree` and every left descendant of it, leaving the smallest value on top.
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &n.left;
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}

impl<T> FusedIterator for Inorder<'_, T> {}

/// Borrowing iterator over the populated nodes of a tree, root first.
#[derive(Clone, Debug)]
pub(crate) struct Nodes<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        let mut stack = Vec::new();
        if let Tree::Node(n) = tree {
            stack.push(n);
        }
        Self { stack }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree comes out first.
        if let Tree::Node(right) = &*node.right {
            self.stack.push(right);
        }
        if let Tree::Node(left) = &*node.left {
            self.stack.push(left);
        }
        Some(node)
    }
}

/// Borrowing iterator yielding values root first (node, left subtree, right subtree).
///
/// Created by [`Tree::preorder`].
#[derive(Clone, Debug)]
pub struct Preorder<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            nodes: Nodes::new(tree),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|n| &n.value)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

/// Owning iterator yielding values in ascending order. Nodes are torn down as they're
/// visited.
///
/// Created by [`Tree::into_iter`][IntoIterator::into_iter].
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Vec<Node<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: Tree<T>) {
        while let Some(mut n) = tree.into_node() {
            tree = mem::take(&mut *n.left);
            self.stack.push(n);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let Node { value, right, .. } = self.stack.pop()?;
        self.push_left_spine(*right);
        Some(value)
    }
}

impl<T> FusedIterator for IntoIter<T> {}
