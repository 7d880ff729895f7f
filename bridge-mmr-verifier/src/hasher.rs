//! Hash schemes: pairwise merge and sequence fold for each digest type.
//!
//! - Wide: `keccak256(a ‖ b)` over 32-byte big-endian words, output split
//!   into `high ‖ low`.
//! - Compact: `poseidon(a, b)` and the Poseidon sponge over a sequence.
//!
//! A leaf digest is the sequence hash of the single raw leaf value.

use core::fmt::Debug;

use bridge_mmr_costs::{CostContext, CostsExt, OperationCost};
use sha3::{Digest as _, Keccak256};
use starknet_crypto::{PoseidonHasher, poseidon_hash};

use crate::digest::{CompactDigest, Scheme, WideDigest};

/// A hash scheme over one digest type.
pub trait MmrHasher {
    /// Digest produced and consumed by this scheme.
    type Digest: Copy + Eq + Debug;

    /// Which scheme this is.
    const SCHEME: Scheme;

    /// Combine two digests, `left` first.
    fn hash_pair(left: &Self::Digest, right: &Self::Digest) -> Self::Digest;

    /// Fold a sequence of digests into one.
    fn hash_many(items: &[Self::Digest]) -> Self::Digest;

    /// Embed an MMR size into a digest for root binding.
    fn size_digest(mmr_size: u64) -> Self::Digest;

    /// The digest of an empty peak set.
    fn zero() -> Self::Digest;
}

/// Keccak-256 over two-limb 256-bit words.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Wide;

impl MmrHasher for Keccak256Wide {
    type Digest = WideDigest;

    const SCHEME: Scheme = Scheme::Wide;

    fn hash_pair(left: &WideDigest, right: &WideDigest) -> WideDigest {
        let mut hasher = Keccak256::new();
        hasher.update(left.to_be_bytes());
        hasher.update(right.to_be_bytes());
        let out: [u8; 32] = hasher.finalize().into();
        WideDigest::from_be_bytes(out)
    }

    fn hash_many(items: &[WideDigest]) -> WideDigest {
        let mut hasher = Keccak256::new();
        for item in items {
            hasher.update(item.to_be_bytes());
        }
        let out: [u8; 32] = hasher.finalize().into();
        WideDigest::from_be_bytes(out)
    }

    fn size_digest(mmr_size: u64) -> WideDigest {
        WideDigest::from_u64(mmr_size)
    }

    fn zero() -> WideDigest {
        WideDigest::ZERO
    }
}

/// Poseidon over Stark field elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoseidonCompact;

impl MmrHasher for PoseidonCompact {
    type Digest = CompactDigest;

    const SCHEME: Scheme = Scheme::Compact;

    fn hash_pair(left: &CompactDigest, right: &CompactDigest) -> CompactDigest {
        CompactDigest(poseidon_hash(left.0, right.0))
    }

    fn hash_many(items: &[CompactDigest]) -> CompactDigest {
        let mut hasher = PoseidonHasher::new();
        for item in items {
            hasher.update(item.0);
        }
        CompactDigest(hasher.finalize())
    }

    fn size_digest(mmr_size: u64) -> CompactDigest {
        CompactDigest::from_u64(mmr_size)
    }

    fn zero() -> CompactDigest {
        CompactDigest::ZERO
    }
}

/// Pairwise merge with its cost.
pub(crate) fn merge<H: MmrHasher>(left: &H::Digest, right: &H::Digest) -> CostContext<H::Digest> {
    H::hash_pair(left, right).wrap_with_cost(OperationCost::with_hash_pair_calls(1))
}

/// Digest of a raw leaf value under scheme `H`.
pub fn leaf_digest<H: MmrHasher>(value: &H::Digest) -> CostContext<H::Digest> {
    H::hash_many(core::slice::from_ref(value)).wrap_with_cost(OperationCost::with_hash_many(1))
}
