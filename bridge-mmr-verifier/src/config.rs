//! Verifier configuration.

use crate::peak::ChildParity;

/// Upper bound on sibling and peak counts: the height of an MMR over `u64`
/// positions.
pub const MAX_PROOF_LEN: usize = 64;

/// How the computed peak must relate to the declared peak set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeakMatch {
    /// The computed peak must sit at the slot of the leaf's own mountain.
    #[default]
    Positional,
    /// Legacy compatibility mode: the computed peak may appear at any slot.
    /// Accepts proofs whose peak set is internally reordered; only for
    /// callers that still depend on the old behavior.
    AnyPosition,
}

/// Knobs for a [`Verifier`](crate::Verifier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerifierConfig {
    /// Left/right convention the sibling-path generator uses.
    pub parity: ChildParity,
    /// Peak membership rule.
    pub peak_match: PeakMatch,
    /// Largest sibling or peak count accepted on the wire.
    pub max_proof_len: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        VerifierConfig {
            parity: ChildParity::default(),
            peak_match: PeakMatch::default(),
            max_proof_len: MAX_PROOF_LEN,
        }
    }
}

impl VerifierConfig {
    /// Default configuration with the legacy any-position peak match.
    pub fn legacy() -> Self {
        VerifierConfig {
            peak_match: PeakMatch::AnyPosition,
            ..Default::default()
        }
    }

    /// Replace the parity convention.
    pub fn with_parity(mut self, parity: ChildParity) -> Self {
        self.parity = parity;
        self
    }

    /// Replace the wire count bound.
    pub fn with_max_proof_len(mut self, max_proof_len: usize) -> Self {
        self.max_proof_len = max_proof_len;
        self
    }
}
