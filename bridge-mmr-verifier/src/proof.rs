//! Inclusion proofs and the verification requests built from them.

use crate::digest::{CompactDigest, Scheme, WideDigest};

/// An MMR inclusion proof for one leaf.
///
/// Produced by an MMR state provider: the proved leaf value, its position,
/// the size of the MMR the proof was generated against, the sibling path
/// (lowest level first) and the peak set (tallest mountain first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InclusionProof<D> {
    leaf: D,
    leaf_index: u64,
    mmr_size: u64,
    siblings: Vec<D>,
    peaks: Vec<D>,
}

impl<D> InclusionProof<D> {
    /// Construct a proof from its parts.
    pub fn new(leaf: D, leaf_index: u64, mmr_size: u64, siblings: Vec<D>, peaks: Vec<D>) -> Self {
        InclusionProof {
            leaf,
            leaf_index,
            mmr_size,
            siblings,
            peaks,
        }
    }

    /// The raw (unhashed) leaf value the proof is for.
    pub fn leaf(&self) -> &D {
        &self.leaf
    }

    /// 0-based index of the leaf.
    pub fn leaf_index(&self) -> u64 {
        self.leaf_index
    }

    /// The MMR size at proof generation time.
    pub fn mmr_size(&self) -> u64 {
        self.mmr_size
    }

    /// The sibling path, lowest level first.
    pub fn siblings(&self) -> &[D] {
        &self.siblings
    }

    /// The peak set, tallest mountain first.
    pub fn peaks(&self) -> &[D] {
        &self.peaks
    }
}

/// A caller's claim that `leaf` is included under `root`, with the proof.
///
/// `leaf` is what the caller expects (e.g. the commitment it is tracking);
/// the proof carries the leaf the provider proved. Both must agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim<D> {
    root: D,
    leaf: D,
    proof: InclusionProof<D>,
}

impl<D: Copy> Claim<D> {
    /// Claim the proof's own leaf under `root`.
    pub fn new(root: D, proof: InclusionProof<D>) -> Self {
        Claim {
            root,
            leaf: proof.leaf,
            proof,
        }
    }
}

impl<D> Claim<D> {
    /// Claim an expected `leaf`, which may differ from the proof's leaf.
    pub fn with_expected_leaf(root: D, leaf: D, proof: InclusionProof<D>) -> Self {
        Claim { root, leaf, proof }
    }

    /// The root the leaf is claimed to be committed under.
    pub fn root(&self) -> &D {
        &self.root
    }

    /// The leaf value the caller expects.
    pub fn leaf(&self) -> &D {
        &self.leaf
    }

    /// The inclusion proof.
    pub fn proof(&self) -> &InclusionProof<D> {
        &self.proof
    }
}

/// A verification request: a claim under exactly one hash scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationRequest {
    /// Keccak-256 over two-limb words.
    Wide(Claim<WideDigest>),
    /// Poseidon over Stark field elements.
    Compact(Claim<CompactDigest>),
}

impl VerificationRequest {
    /// The scheme this request is verified under.
    pub fn scheme(&self) -> Scheme {
        match self {
            VerificationRequest::Wide(_) => Scheme::Wide,
            VerificationRequest::Compact(_) => Scheme::Compact,
        }
    }

    /// Leaf index of the proof.
    pub fn leaf_index(&self) -> u64 {
        match self {
            VerificationRequest::Wide(claim) => claim.proof.leaf_index,
            VerificationRequest::Compact(claim) => claim.proof.leaf_index,
        }
    }

    /// MMR size of the proof.
    pub fn mmr_size(&self) -> u64 {
        match self {
            VerificationRequest::Wide(claim) => claim.proof.mmr_size,
            VerificationRequest::Compact(claim) => claim.proof.mmr_size,
        }
    }
}

impl From<Claim<WideDigest>> for VerificationRequest {
    fn from(claim: Claim<WideDigest>) -> Self {
        VerificationRequest::Wide(claim)
    }
}

impl From<Claim<CompactDigest>> for VerificationRequest {
    fn from(claim: Claim<CompactDigest>) -> Self {
        VerificationRequest::Compact(claim)
    }
}
