use quickcheck::{Arbitrary, Gen};

#[macro_use]
extern crate quickcheck_macros;


/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Search the tree for the K
    Search(K),
    /// Compare traversals
    Traverse,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]) {
            Some(0) => Op::Insert(K::arbitrary(g)),
            Some(1) => Op::Search(K::arbitrary(g)),
            _ => Op::Traverse,
        }
    }
}
