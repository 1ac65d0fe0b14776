//! An unbalanced, mutable BST. Values are placed purely by comparison as they're inserted, so
//! the shape of the tree is whatever the insertion order makes it.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.append(vec![3, 1, 5, 0, 2, 4, 6]);
//!
//! // Traversals are lazy and can be restarted at will.
//! assert_eq!(tree.to_list(), vec![0, 1, 2, 3, 4, 5, 6]);
//! assert!(tree.inorder().eq(tree.inorder()));
//!
//! // This insertion order happens to produce a perfectly balanced tree.
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(tree.balance(), 0);
//! assert!(tree.validate().is_ok());
//!
//! // Mapping builds a new tree and leaves this one alone.
//! let squares = tree.map(|x| x * x);
//! assert_eq!(squares.fold(0, |acc, x| acc + x), 91);
//! assert_eq!(tree.fold(0, |acc, x| acc + x), 21);
//! ```

use std::cmp;
use std::mem::{self, ManuallyDrop};
use std::ptr;

use crate::error::OrderingViolation;
use crate::iter::{Inorder, IntoIter, Nodes, Preorder};

/// A Binary Search Tree of values. Smaller values go left, equal and larger values go right,
/// and nothing ever rebalances the tree unless asked to with [`Tree::rebalance`].
///
/// Every operation walks the tree with an explicit stack, so a tree skewed into a long chain
/// is as safe to build, measure, clone, compare and drop as a balanced one. The one exception
/// is the derived `Debug` output, which recurses once per level.
#[derive(Debug)]
pub enum Tree<T> {
    /// An empty tree. Also marks the empty children at the bottom of every subtree.
    Leaf,
    /// A populated tree. This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach every subtree before it's dropped so each drop only ever sees `Leaf` children.
        let mut stack = Vec::new();
        if let Self::Node(n) = self {
            n.detach_children(&mut stack);
        }
        while let Some(mut tree) = stack.pop() {
            if let Self::Node(n) = &mut tree {
                n.detach_children(&mut stack);
            }
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        // Rebuild bottom-up by walking the pre-order in reverse: by the time a node comes up,
        // its left subtree's copy sits on top of `built` with its right subtree's copy below.
        let nodes: Vec<_> = Nodes::new(self).collect();
        let mut built = Vec::new();
        for n in nodes.into_iter().rev() {
            let left = if n.left.is_empty() {
                Tree::Leaf
            } else {
                built.pop().unwrap_or_default()
            };
            let right = if n.right.is_empty() {
                Tree::Leaf
            } else {
                built.pop().unwrap_or_default()
            };
            built.push(Tree::with_children(n.value.clone(), left, right));
        }
        built.pop().unwrap_or_default()
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    /// Trees are equal when they have the same shape and the same values in the same places.
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Self::Leaf, Self::Leaf) => {}
                (Self::Node(a), Self::Node(b)) => {
                    if a.value != b.value {
                        return false;
                    }
                    stack.push((&*a.left, &*b.left));
                    stack.push((&*a.right, &*b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Builds a populated tree from a value and two subtrees.
    ///
    /// **Note** Nothing checks that `left` holds smaller values and `right` holds larger or
    /// equal ones. Use [`Tree::validate_all`] if that matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::with_children(2, Tree::from_iter([1]), Tree::from_iter([3]));
    /// assert_eq!(tree.to_list(), vec![1, 2, 3]);
    ///
    /// // Out of order children are accepted here and caught by `validate`.
    /// let bad = Tree::with_children(2, Tree::from_iter([3]), Tree::new());
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn with_children(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        Self::Node(Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Counts the values in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.inorder().count()
    }

    /// The value at the root of this tree, if there is one.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&n.value),
        }
    }

    /// The left subtree, or `None` if this tree is empty.
    pub fn left(&self) -> Option<&Tree<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&n.left),
        }
    }

    /// The right subtree, or `None` if this tree is empty.
    pub fn right(&self) -> Option<&Tree<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&n.right),
        }
    }

    /// Inserts a value into the tree. If the tree is empty it becomes a single node holding
    /// `value`. Otherwise `value` goes to the left subtree if it's strictly less than this
    /// node's value and to the right subtree if not, so duplicates always end up on the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.to_list(), vec![1, 1]);
    /// assert_eq!(tree.right().and_then(Tree::value), Some(&1));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: cmp::Ord,
    {
        let mut tree = self;
        while let Self::Node(n) = tree {
            tree = if value < n.value {
                &mut *n.left
            } else {
                &mut *n.right
            };
        }
        *tree = Self::Node(Node::new(value));
    }

    /// Inserts every value of `values`, in iteration order.
    ///
    /// The shape of the result depends on that order. Ascending input produces a tree leaning
    /// entirely right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut skewed = Tree::new();
    /// skewed.append(0..7);
    /// assert_eq!(skewed.depth(), 7);
    /// assert_eq!(skewed.balance(), 6);
    /// ```
    pub fn append<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: cmp::Ord,
    {
        for value in values {
            self.insert(value);
        }
    }

    /// Lazily yields every value in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self)
    }

    /// Lazily yields every value root first: a node, then its left subtree, then its right
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_iter([2, 1, 3]);
    /// assert_eq!(tree.preorder().collect::<Vec<_>>(), vec![&2, &1, &3]);
    /// ```
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self)
    }

    /// Copies the values of the tree into a `Vec`, sorted ascending.
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inorder().cloned().collect()
    }

    /// Rebuilds the tree by re-inserting its values in ascending order.
    ///
    /// **Note** This is not a balancing operation. Since equal and larger values go right,
    /// ascending insertion always produces a tree that leans entirely right, whatever shape it
    /// had before. See [`Tree::rebalance`] for the balancing rebuild.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::from_iter([3, 1, 5, 0, 2, 4, 6]);
    /// tree.reorder();
    ///
    /// assert_eq!(tree.to_list(), vec![0, 1, 2, 3, 4, 5, 6]);
    /// assert_eq!(tree.depth(), 7);
    /// ```
    pub fn reorder(&mut self)
    where
        T: cmp::Ord,
    {
        let old = mem::take(self);
        log::trace!("reordering tree of depth {}", old.depth());

        let mut fresh = Self::new();
        fresh.append(old);
        *self = fresh;
    }

    /// Rebuilds the tree from its sorted values, always picking the middle value as the root
    /// of each subtree. With distinct values this gives the smallest possible depth.
    ///
    /// When the middle value has duplicates, the leftmost of them becomes the root so the
    /// smaller values stay strictly left.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::from_iter(0..7);
    /// tree.rebalance();
    ///
    /// assert_eq!(tree.depth(), 3);
    /// assert_eq!(tree.balance(), 0);
    /// assert_eq!(tree.value(), Some(&3));
    /// ```
    pub fn rebalance(&mut self)
    where
        T: cmp::Ord,
    {
        let old = mem::take(self);
        log::trace!("rebalancing tree of depth {}", old.depth());

        *self = build_balanced(old.into_iter().collect());
    }

    /// Builds a new tree by applying `f` to every value and inserting the results.
    ///
    /// Values are replayed in pre-order so the new tree is built in the same order as this
    /// one was laid out. If `f` preserves order the two trees have the same shape; otherwise
    /// the new shape follows the comparisons between the mapped values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_iter([5, 1, 10, -2]);
    /// let squares = tree.map(|x| x * x);
    ///
    /// assert_eq!(squares.to_list(), vec![1, 4, 25, 100]);
    /// assert_eq!(tree.to_list(), vec![-2, 1, 5, 10]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
        U: cmp::Ord,
    {
        log::trace!("mapping tree of depth {}", self.depth());
        self.preorder().map(f).collect()
    }

    /// Reduces the values into an accumulator, visiting them in ascending order starting from
    /// `init`.
    ///
    /// `f` is expected to be associative and commutative so callers don't depend on the visit
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_iter([5, 1, 10, -2]);
    ///
    /// assert_eq!(tree.fold(0, |acc, x| acc + x), 14);
    /// assert_eq!(tree.fold(-10000, |acc, &x| std::cmp::max(acc, x)), 10);
    /// ```
    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.inorder().fold(init, f)
    }

    /// Gets the number of nodes on the longest path from the root down to a leaf. An empty
    /// tree has a depth of 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = Vec::new();
        if let Self::Node(n) = self {
            stack.push((n, 1));
        }
        while let Some((n, level)) = stack.pop() {
            depth = cmp::max(depth, level);
            for child in [&*n.left, &*n.right] {
                if let Self::Node(c) = child {
                    stack.push((c, level + 1));
                }
            }
        }
        depth
    }

    /// Gets the depth of the right subtree minus the depth of the left subtree. Positive means
    /// the tree leans right, negative means it leans left.
    pub fn balance(&self) -> isize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.right.depth() as isize - n.left.depth() as isize,
        }
    }

    /// Checks the root against its immediate children: a populated left child must be
    /// strictly smaller and a populated right child must not be smaller. Empty children are
    /// skipped, as is everything further down. See [`Tree::validate_all`] to check every node.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderingViolation`] borrowing the parent and child values that are out of
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{OrderingViolation, Tree};
    ///
    /// let tree = Tree::with_children(1, Tree::from_iter([7]), Tree::new());
    ///
    /// assert_eq!(
    ///     tree.validate(),
    ///     Err(OrderingViolation::Left { parent: &1, child: &7 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), OrderingViolation<&T>>
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => Ok(()),
            Self::Node(n) => n.validate(),
        }
    }

    /// Runs the [`Tree::validate`] check at every node, root first, stopping at the first
    /// violation.
    ///
    /// This still only compares each node with its own children, so a value that is in order
    /// relative to its parent but not to some further ancestor goes unnoticed.
    pub fn validate_all(&self) -> Result<(), OrderingViolation<&T>>
    where
        T: cmp::Ord,
    {
        Nodes::new(self).try_for_each(Node::validate)
    }

    /// Moves the root node out of the tree, leaving its children attached to it.
    pub(crate) fn into_node(self) -> Option<Node<T>> {
        let mut this = ManuallyDrop::new(self);
        match &mut *this {
            Self::Leaf => None,
            // SAFETY: `this` is never touched again and `ManuallyDrop` keeps `Tree::drop` from
            // running on it, so the node read out here is the only copy that gets dropped.
            Self::Node(n) => Some(unsafe { ptr::read(n) }),
        }
    }
}

/// Builds a balanced tree out of sorted values. Recursion only goes as deep as the resulting
/// tree.
fn build_balanced<T: cmp::Ord>(mut values: Vec<T>) -> Tree<T> {
    let mut mid = values.len() / 2;
    while mid > 0 && values[mid - 1] == values[mid] {
        mid -= 1;
    }

    // `values` keeps everything left of the middle, `rest` starts at the new root.
    let mut rest = values.split_off(mid).into_iter();
    let Some(value) = rest.next() else {
        return Tree::Leaf;
    };

    Tree::with_children(value, build_balanced(values), build_balanced(rest.collect()))
}

impl<T: cmp::Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.append(iter);
        tree
    }
}

impl<T: cmp::Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// A `Node` holds a value and always has two children, although those children may be
/// [`Leaf`][Tree::Leaf]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Box<Tree<T>>,
    pub(crate) right: Box<Tree<T>>,
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given value and two empty children.
    fn new(value: T) -> Self {
        Self {
            value,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
        }
    }

    /// Moves any populated children onto `stack`, leaving `Leaf`s in their place.
    fn detach_children(&mut self, stack: &mut Vec<Tree<T>>) {
        for child in [&mut self.left, &mut self.right] {
            if !child.is_empty() {
                stack.push(mem::take(&mut **child));
            }
        }
    }

    fn validate(&self) -> Result<(), OrderingViolation<&T>>
    where
        T: cmp::Ord,
    {
        if let Tree::Node(left) = &*self.left {
            if left.value >= self.value {
                log::debug!("left child is not less than its parent");
                return Err(OrderingViolation::Left {
                    parent: &self.value,
                    child: &left.value,
                });
            }
        }

        if let Tree::Node(right) = &*self.right {
            if right.value < self.value {
                log::debug!("right child is less than its parent");
                return Err(OrderingViolation::Right {
                    parent: &self.value,
                    child: &right.value,
                });
            }
        }

        Ok(())
    }
}
