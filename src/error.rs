//! Errors surfaced by [`Tree::validate`][crate::Tree::validate].

/// A child whose value breaks the ordering a BST expects relative to its parent.
///
/// The offending values are carried along for diagnostics. [`Tree::validate`][crate::Tree::validate]
/// hands back borrowed values; use [`OrderingViolation::cloned`] to detach the error from the
/// tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum OrderingViolation<T> {
    /// The left child's value is greater than or equal to its parent's.
    #[error("left side value >= parent")]
    Left {
        /// Value of the node being checked.
        parent: T,
        /// Value of its left child.
        child: T,
    },
    /// The right child's value is less than its parent's.
    #[error("right side value < parent")]
    Right {
        /// Value of the node being checked.
        parent: T,
        /// Value of its right child.
        child: T,
    },
}

impl<T> OrderingViolation<T> {
    /// The value of the node whose child is out of order.
    pub fn parent(&self) -> &T {
        match self {
            Self::Left { parent, .. } | Self::Right { parent, .. } => parent,
        }
    }

    /// The value of the out-of-order child.
    pub fn child(&self) -> &T {
        match self {
            Self::Left { child, .. } | Self::Right { child, .. } => child,
        }
    }
}

impl<T: Clone> OrderingViolation<&T> {
    /// Clones the borrowed values so the error no longer references the tree.
    pub fn cloned(self) -> OrderingViolation<T> {
        match self {
            Self::Left { parent, child } => OrderingViolation::Left {
                parent: parent.clone(),
                child: child.clone(),
            },
            Self::Right { parent, child } => OrderingViolation::Right {
                parent: parent.clone(),
                child: child.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let left = OrderingViolation::Left {
            parent: 1,
            child: 2,
        };
        let right = OrderingViolation::Right {
            parent: 1,
            child: 0,
        };

        assert_eq!(left.to_string(), "left side value >= parent");
        assert_eq!(right.to_string(), "right side value < parent");
    }

    #[test]
    fn test_cloned_keeps_values() {
        let (parent, child) = (String::from("b"), String::from("c"));
        let borrowed = OrderingViolation::Left {
            parent: &parent,
            child: &child,
        };

        let owned = borrowed.cloned();
        assert_eq!(owned.parent(), "b");
        assert_eq!(owned.child(), "c");
    }
}
