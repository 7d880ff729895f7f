//! The inclusion-proof verifier.
//!
//! A claim is accepted only if every gate passes, in order:
//!
//! 1. the proof is structurally sound for its `mmr_size` (valid size, leaf
//!    in range, canonical peak count, sibling path as long as the leaf's
//!    mountain is high);
//! 2. the caller's expected leaf equals the proved leaf;
//! 3. the peak set bagged and bound to `mmr_size` reproduces the root;
//! 4. the leaf climbed up its sibling path reproduces its mountain's peak.
//!
//! Every failure is a [`Rejection`], never a panic.

use core::fmt;

use bridge_mmr_costs::{
    CostContext, CostResult, CostsExt, OperationCost, cost_return_on_error_no_add,
};
use tracing::{debug, trace};

use crate::{
    bagging::compute_root,
    config::{PeakMatch, VerifierConfig},
    hasher::{Keccak256Wide, MmrHasher, PoseidonCompact, leaf_digest},
    helper::{Mountain, is_valid_mmr_size, locate_leaf, mmr_size_to_leaf_count, peak_count},
    peak::compute_peak,
    proof::{Claim, InclusionProof, VerificationRequest},
};

/// Why a claim was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The proved leaf is not the leaf the caller expects.
    LeafMismatch,
    /// `mmr_size` is not the size of any MMR.
    InvalidMmrSize {
        /// The declared size.
        mmr_size: u64,
    },
    /// The leaf index is past the last leaf.
    LeafIndexOutOfRange {
        /// The declared index.
        leaf_index: u64,
        /// Leaves in an MMR of the declared size.
        leaf_count: u64,
    },
    /// The peak set has the wrong number of peaks for `mmr_size`.
    PeakCountMismatch {
        /// Canonical peak count.
        expected: usize,
        /// Peaks supplied.
        actual: usize,
    },
    /// The sibling path is not as long as the leaf's mountain is high.
    PathLengthMismatch {
        /// Mountain height.
        expected: usize,
        /// Siblings supplied.
        actual: usize,
    },
    /// The peak set does not bag to the claimed root.
    RootMismatch,
    /// The climbed peak is not in the peak set where it must be.
    PeakNotFound,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::LeafMismatch => write!(f, "proved leaf differs from expected leaf"),
            Rejection::InvalidMmrSize { mmr_size } => write!(f, "invalid mmr size {}", mmr_size),
            Rejection::LeafIndexOutOfRange {
                leaf_index,
                leaf_count,
            } => write!(
                f,
                "leaf index {} out of range (leaf_count={})",
                leaf_index, leaf_count
            ),
            Rejection::PeakCountMismatch { expected, actual } => {
                write!(f, "expected {} peaks, got {}", expected, actual)
            }
            Rejection::PathLengthMismatch { expected, actual } => {
                write!(f, "expected {} siblings, got {}", expected, actual)
            }
            Rejection::RootMismatch => write!(f, "peaks do not bag to the claimed root"),
            Rejection::PeakNotFound => write!(f, "computed peak not in peak set"),
        }
    }
}

/// Stateless MMR inclusion-proof verifier.
///
/// Holds only its [`VerifierConfig`]; safe to share across threads and to
/// call concurrently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    /// A verifier with the given configuration.
    pub fn new(config: VerifierConfig) -> Self {
        Verifier { config }
    }

    /// The verifier's configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Accept or reject a request.
    pub fn verify(&self, request: &VerificationRequest) -> bool {
        self.check(request).value.is_ok()
    }

    /// Accept or reject a request, reporting the hashing it took.
    pub fn verify_with_cost(&self, request: &VerificationRequest) -> CostContext<bool> {
        self.check(request).map(|result| result.is_ok())
    }

    /// Verify a request, reporting why it was rejected.
    pub fn check(&self, request: &VerificationRequest) -> CostResult<(), Rejection> {
        let result = match request {
            VerificationRequest::Wide(claim) => self.check_claim::<Keccak256Wide>(claim),
            VerificationRequest::Compact(claim) => self.check_claim::<PoseidonCompact>(claim),
        };
        match &result.value {
            Ok(()) => trace!(
                scheme = %request.scheme(),
                leaf_index = request.leaf_index(),
                mmr_size = request.mmr_size(),
                hash_calls = result.cost.hash_calls(),
                "inclusion proof accepted"
            ),
            Err(rejection) => debug!(
                scheme = %request.scheme(),
                leaf_index = request.leaf_index(),
                mmr_size = request.mmr_size(),
                %rejection,
                "inclusion proof rejected"
            ),
        }
        result
    }

    /// Verify a claim under hash scheme `H`.
    pub fn check_claim<H: MmrHasher>(&self, claim: &Claim<H::Digest>) -> CostResult<(), Rejection> {
        let mut cost = OperationCost::default();
        let proof = claim.proof();

        let mountain = cost_return_on_error_no_add!(&cost, check_structure(proof));

        if claim.leaf() != proof.leaf() {
            return Err(Rejection::LeafMismatch).wrap_with_cost(cost);
        }

        let root = compute_root::<H>(proof.peaks(), proof.mmr_size()).unwrap_add_cost(&mut cost);
        if &root != claim.root() {
            return Err(Rejection::RootMismatch).wrap_with_cost(cost);
        }

        let leaf = leaf_digest::<H>(proof.leaf()).unwrap_add_cost(&mut cost);
        let parity = self.config.parity;
        let peak = compute_peak::<H>(
            parity,
            parity.start_index(mountain.offset),
            leaf,
            proof.siblings(),
        )
        .unwrap_add_cost(&mut cost);

        let found = match self.config.peak_match {
            PeakMatch::Positional => proof.peaks().get(mountain.peak_index) == Some(&peak),
            PeakMatch::AnyPosition => proof.peaks().contains(&peak),
        };
        if !found {
            return Err(Rejection::PeakNotFound).wrap_with_cost(cost);
        }

        Ok(()).wrap_with_cost(cost)
    }
}

/// Validate the proof's shape against its `mmr_size` and find the leaf's
/// mountain.
fn check_structure<D>(proof: &InclusionProof<D>) -> Result<Mountain, Rejection> {
    let mmr_size = proof.mmr_size();
    if !is_valid_mmr_size(mmr_size) {
        return Err(Rejection::InvalidMmrSize { mmr_size });
    }
    let leaf_count = mmr_size_to_leaf_count(mmr_size);
    let mountain =
        locate_leaf(proof.leaf_index(), leaf_count).ok_or(Rejection::LeafIndexOutOfRange {
            leaf_index: proof.leaf_index(),
            leaf_count,
        })?;

    let expected_peaks = peak_count(leaf_count);
    if proof.peaks().len() != expected_peaks {
        return Err(Rejection::PeakCountMismatch {
            expected: expected_peaks,
            actual: proof.peaks().len(),
        });
    }

    if proof.siblings().len() != mountain.height as usize {
        return Err(Rejection::PathLengthMismatch {
            expected: mountain.height as usize,
            actual: proof.siblings().len(),
        });
    }

    Ok(mountain)
}

/// Verify a request with the default configuration.
pub fn verify(request: &VerificationRequest) -> bool {
    Verifier::default().verify(request)
}
