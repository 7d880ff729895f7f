//! Merkle Mountain Range (MMR) inclusion-proof verification for a
//! cross-domain bridge.
//!
//! Given a claimed root, a leaf value and an inclusion proof (sibling path
//! plus peak set), decides whether the leaf is committed under the root.
//! Two hash schemes are supported and never mixed within one request:
//!
//! - wide: Keccak-256 over 256-bit words carried as two 128-bit limbs;
//! - compact: Poseidon over single Stark field elements.
//!
//! The root of an MMR is `merge(size, bag(peaks))`, with peaks bagged
//! right-to-left.
//!
//! # Core types
//!
//! - [`Verifier`]: stateless verifier (verify, check, decode and verify).
//! - [`VerificationRequest`]: a [`Claim`] under one scheme.
//! - [`InclusionProof`]: leaf, position, size, siblings and peaks.
//! - [`VerifierConfig`]: parity convention, peak match rule, wire bounds.
//!
//! # Wire format
//!
//! - [`decode_and_verify`]: flat field sequence in, [`ResultCode`] out.
//! - [`encode_request`]: build the flat sequence.
//! - [`render_args`] / [`render_json_args`]: prover input as text or JSON.

#![warn(missing_docs)]

mod bagging;
mod codec;
mod commitment;
mod config;
mod digest;
mod dispatch;
mod error;
/// In-memory proof generator (requires `fixtures` feature).
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
mod hasher;
/// MMR geometry: sizes, peak maps and mountain lookup.
pub mod helper;
mod peak;
mod proof;
#[cfg(test)]
mod tests;
mod verifier;

pub use bagging::{bag_peaks, compute_root};
pub use bridge_mmr_costs::{CostContext, CostResult, CostsExt, OperationCost};
pub use codec::{
    WireDigest, decode_request, encode_request, felt_to_u64, felt_to_u128, render_args,
    render_json_args,
};
pub use commitment::{DepositCommitment, WithdrawalCommitment};
pub use config::{MAX_PROOF_LEN, PeakMatch, VerifierConfig};
pub use digest::{CompactDigest, Scheme, WideDigest};
pub use dispatch::{ResultCode, decode_and_verify};
pub use error::{Error, Result};
pub use hasher::{Keccak256Wide, MmrHasher, PoseidonCompact, leaf_digest};
pub use helper::{is_valid_mmr_size, leaf_index_to_mmr_size, mmr_size_to_leaf_count};
pub use peak::{ChildParity, compute_peak};
pub use proof::{Claim, InclusionProof, VerificationRequest};
pub use starknet_crypto::Felt;
pub use verifier::{Rejection, Verifier, verify};
