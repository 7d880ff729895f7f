//! Climbing a leaf digest up its sibling path to the mountain peak.

use bridge_mmr_costs::{CostContext, CostsExt, OperationCost};

use crate::hasher::{MmrHasher, merge};

/// How a node's index inside its mountain level encodes left/right.
///
/// Both conventions orient nodes of a standard mountain identically; they
/// differ only in the base of the index the climb starts from, which must
/// agree with whoever generated the sibling path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChildParity {
    /// 1-based index; odd is a left child, parent is `(index + 1) / 2`.
    /// Index 0 is the root sentinel.
    #[default]
    OddIsLeft,
    /// 0-based index; even is a left child, parent is `index / 2`.
    EvenIsLeft,
}

impl ChildParity {
    /// Starting index for a leaf at `offset` (0-based) inside its mountain.
    pub fn start_index(self, offset: u64) -> u64 {
        match self {
            ChildParity::OddIsLeft => offset + 1,
            ChildParity::EvenIsLeft => offset,
        }
    }

    /// Whether the node at `index` is the left child of its parent.
    pub fn is_left(self, index: u64) -> bool {
        match self {
            ChildParity::OddIsLeft => index % 2 == 1,
            ChildParity::EvenIsLeft => index % 2 == 0,
        }
    }

    /// Index of the parent of the node at `index`.
    pub fn parent(self, index: u64) -> u64 {
        match self {
            // ceil(index / 2) without the `index + 1` overflow
            ChildParity::OddIsLeft => index / 2 + index % 2,
            ChildParity::EvenIsLeft => index / 2,
        }
    }
}

/// Fold `leaf_digest` with `siblings`, lowest level first, into the peak.
///
/// At each level a left child is merged as `(current, sibling)` and a right
/// child as `(sibling, current)`. An empty path means the leaf is its own
/// peak. The caller is responsible for checking the path length against the
/// mountain height.
pub fn compute_peak<H: MmrHasher>(
    parity: ChildParity,
    node_index: u64,
    leaf_digest: H::Digest,
    siblings: &[H::Digest],
) -> CostContext<H::Digest> {
    let mut cost = OperationCost::default();
    let mut index = node_index;
    let mut current = leaf_digest;
    for sibling in siblings {
        let parent = if parity.is_left(index) {
            merge::<H>(&current, sibling)
        } else {
            merge::<H>(sibling, &current)
        };
        current = parent.unwrap_add_cost(&mut cost);
        index = parity.parent(index);
    }
    current.wrap_with_cost(cost)
}
