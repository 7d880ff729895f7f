//! In-memory proof generator for tests and benchmarks.
//!
//! Builds every mountain of an MMR from raw leaf values with standard
//! left/right pairing and hands out inclusion proofs against it. Nothing is
//! persisted; the range is rebuilt from scratch on construction.

use core::marker::PhantomData;

use crate::{
    bagging::compute_root,
    hasher::{MmrHasher, leaf_digest},
    helper::{leaf_index_to_mmr_size, locate_leaf, mountain_heights},
    proof::{Claim, InclusionProof},
};

/// A fully materialized MMR under scheme `H`.
#[derive(Clone, Debug)]
pub struct MountainRange<H: MmrHasher> {
    values: Vec<H::Digest>,
    /// Per mountain, tallest first: the node levels, leaves first.
    mountains: Vec<Vec<Vec<H::Digest>>>,
    _hasher: PhantomData<H>,
}

impl<H: MmrHasher> MountainRange<H> {
    /// Append `values` as leaves, in order, to an empty MMR.
    pub fn new(values: Vec<H::Digest>) -> Self {
        let leaf_count = values.len() as u64;
        let mut mountains = Vec::new();
        let mut first_leaf = 0usize;
        for height in mountain_heights(leaf_count) {
            let width = 1usize << height;
            let mut levels = vec![
                values[first_leaf..first_leaf + width]
                    .iter()
                    .map(|value| leaf_digest::<H>(value).value)
                    .collect::<Vec<_>>(),
            ];
            for _ in 0..height {
                let below = levels.last().map(Vec::as_slice).unwrap_or_default();
                let level = below
                    .chunks_exact(2)
                    .map(|pair| H::hash_pair(&pair[0], &pair[1]))
                    .collect();
                levels.push(level);
            }
            mountains.push(levels);
            first_leaf += width;
        }
        MountainRange {
            values,
            mountains,
            _hasher: PhantomData,
        }
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> u64 {
        self.values.len() as u64
    }

    /// Total node count; zero when empty.
    pub fn mmr_size(&self) -> u64 {
        match self.leaf_count() {
            0 => 0,
            n => leaf_index_to_mmr_size(n - 1),
        }
    }

    /// Peaks, tallest mountain first.
    pub fn peaks(&self) -> Vec<H::Digest> {
        self.mountains
            .iter()
            .filter_map(|levels| levels.last().and_then(|top| top.first().copied()))
            .collect()
    }

    /// Root committing to the peaks and the size.
    pub fn root(&self) -> H::Digest {
        compute_root::<H>(&self.peaks(), self.mmr_size()).value
    }

    /// Inclusion proof for the leaf at `leaf_index`.
    pub fn proof(&self, leaf_index: u64) -> Option<InclusionProof<H::Digest>> {
        let mountain = locate_leaf(leaf_index, self.leaf_count())?;
        let levels = self.mountains.get(mountain.peak_index)?;
        let siblings = (0..mountain.height as usize)
            .map(|level| levels[level][((mountain.offset >> level) ^ 1) as usize])
            .collect();
        Some(InclusionProof::new(
            *self.values.get(leaf_index as usize)?,
            leaf_index,
            self.mmr_size(),
            siblings,
            self.peaks(),
        ))
    }

    /// A claim of the leaf at `leaf_index` under the current root.
    pub fn claim(&self, leaf_index: u64) -> Option<Claim<H::Digest>> {
        Some(Claim::new(self.root(), self.proof(leaf_index)?))
    }
}
