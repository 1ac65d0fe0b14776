use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Insert all the values, in order
    Append(Vec<T>),
    /// Re-insert everything in ascending order
    Reorder,
    /// Rebuild the tree median first
    Rebalance,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => {
                // Keep batches short so skewed trees stay shallow enough to recurse into.
                let mut xs = Vec::arbitrary(g);
                xs.truncate(8);
                Op::Append(xs)
            }
            2 => Op::Reorder,
            3 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}
