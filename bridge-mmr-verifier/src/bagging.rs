//! Peak bagging and root binding.

use bridge_mmr_costs::{CostContext, CostsExt, OperationCost};

use crate::hasher::{MmrHasher, merge};

/// Bag peaks right-to-left: start from the rightmost peak and fold each
/// peak to its left in as `merge(left, running)`.
///
/// No peaks bag to the scheme's zero digest; a single peak bags to itself.
pub fn bag_peaks<H: MmrHasher>(peaks: &[H::Digest]) -> CostContext<H::Digest> {
    let mut cost = OperationCost::default();
    let bagged = match peaks.split_last() {
        None => H::zero(),
        Some((rightmost, rest)) => rest.iter().rev().fold(*rightmost, |running, left| {
            merge::<H>(left, &running).unwrap_add_cost(&mut cost)
        }),
    };
    bagged.wrap_with_cost(cost)
}

/// Root committed by an MMR of `mmr_size` nodes with these peaks:
/// `merge(size_digest(mmr_size), bag_peaks(peaks))`.
pub fn compute_root<H: MmrHasher>(peaks: &[H::Digest], mmr_size: u64) -> CostContext<H::Digest> {
    bag_peaks::<H>(peaks).flat_map(|bagged| merge::<H>(&H::size_digest(mmr_size), &bagged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        digest::{CompactDigest, WideDigest},
        hasher::{Keccak256Wide, PoseidonCompact},
    };

    #[test]
    fn empty_and_single() {
        assert_eq!(bag_peaks::<Keccak256Wide>(&[]).value, WideDigest::ZERO);
        assert_eq!(bag_peaks::<PoseidonCompact>(&[]).value, CompactDigest::ZERO);

        let only = WideDigest::new(9, 9);
        let ctx = bag_peaks::<Keccak256Wide>(&[only]);
        assert_eq!(ctx.value, only);
        assert!(ctx.cost.is_nothing());
    }

    #[test]
    fn bags_right_to_left() {
        let h = PoseidonCompact::hash_pair;
        let [a, b, c] = [1u64, 2, 3].map(CompactDigest::from_u64);
        let ctx = bag_peaks::<PoseidonCompact>(&[a, b, c]);
        assert_eq!(ctx.value, h(&a, &h(&b, &c)));
        assert_ne!(ctx.value, h(&h(&a, &b), &c));
        assert_eq!(ctx.cost.hash_pair_calls, 2);
    }

    #[test]
    fn root_binds_size() {
        let peak = WideDigest::new(0, 42);
        let root = compute_root::<Keccak256Wide>(&[peak], 1);
        assert_eq!(
            root.value,
            Keccak256Wide::hash_pair(&WideDigest::from_u64(1), &peak)
        );
        assert_eq!(root.cost.hash_pair_calls, 1);
        assert_ne!(root.value, compute_root::<Keccak256Wide>(&[peak], 3).value);
    }
}
