use proptest::{prelude::*, sample::Index};

use crate::{
    ChildParity, Claim, CompactDigest, Felt, InclusionProof, Keccak256Wide, PoseidonCompact,
    ResultCode, Verifier, VerifierConfig, WideDigest, decode_and_verify, encode_request,
    fixtures::MountainRange,
};

fn parity() -> impl Strategy<Value = ChildParity> {
    prop_oneof![Just(ChildParity::OddIsLeft), Just(ChildParity::EvenIsLeft)]
}

proptest! {
    #[test]
    fn test_random_wide_proofs_verify(
        values in prop::collection::vec(any::<(u128, u128)>(), 1..150),
        pick in any::<Index>(),
        parity in parity(),
    ) {
        let range = MountainRange::<Keccak256Wide>::new(
            values.iter().map(|(high, low)| WideDigest::new(*high, *low)).collect(),
        );
        let leaf_index = pick.index(values.len()) as u64;
        let verifier = Verifier::new(VerifierConfig::default().with_parity(parity));
        let claim = range.claim(leaf_index).expect("claim");
        prop_assert!(verifier.verify(&claim.into()));
    }

    #[test]
    fn test_random_compact_wire_verifies(
        values in prop::collection::vec(any::<u64>(), 1..150),
        pick in any::<Index>(),
    ) {
        let range = MountainRange::<PoseidonCompact>::new(
            values.iter().copied().map(CompactDigest::from_u64).collect(),
        );
        let leaf_index = pick.index(values.len()) as u64;
        let raw = encode_request(&range.claim(leaf_index).expect("claim").into());
        prop_assert_eq!(decode_and_verify(&raw), Ok(ResultCode::Valid));
    }

    #[test]
    fn test_random_wide_tamper_rejected(
        count in 2u64..150,
        pick in any::<Index>(),
        target in any::<Index>(),
        bit in 0u32..256,
    ) {
        let range = MountainRange::<Keccak256Wide>::new(
            (0..count).map(WideDigest::from_u64).collect(),
        );
        let leaf_index = pick.index(count as usize) as u64;
        let claim = range.claim(leaf_index).expect("claim");
        let tampered = tamper(&claim, target, |digest| flip_wide_bit(digest, bit));
        prop_assert!(!Verifier::default().verify(&tampered.into()));
    }

    #[test]
    fn test_random_compact_tamper_rejected(
        count in 2u64..150,
        pick in any::<Index>(),
        target in any::<Index>(),
        bit in 0u32..251,
    ) {
        let range = MountainRange::<PoseidonCompact>::new(
            (0..count).map(CompactDigest::from_u64).collect(),
        );
        let leaf_index = pick.index(count as usize) as u64;
        let claim = range.claim(leaf_index).expect("claim");
        let tampered = tamper(&claim, target, |digest| flip_felt_bit(digest, bit));
        prop_assert!(!Verifier::default().verify(&tampered.into()));
    }
}

/// Flip bit `bit` (0 = least significant) of the 256-bit value.
fn flip_wide_bit(digest: &mut WideDigest, bit: u32) {
    if bit < 128 {
        digest.low ^= 1 << bit;
    } else {
        digest.high ^= 1 << (bit - 128);
    }
}

/// Flip bit `bit` of the field element's canonical encoding.
fn flip_felt_bit(digest: &mut CompactDigest, bit: u32) {
    let mut bytes = digest.0.to_bytes_be();
    bytes[31 - (bit / 8) as usize] ^= 1 << (bit % 8);
    digest.0 = Felt::from_bytes_be(&bytes);
}

/// Apply `flip` to one digest of the claim: the root, the leaf (on both the
/// claim and the proof), a sibling or a peak.
fn tamper<D: Copy>(
    claim: &Claim<D>,
    target: Index,
    flip: impl FnOnce(&mut D),
) -> Claim<D> {
    let proof = claim.proof();
    let mut root = *claim.root();
    let mut leaf = *proof.leaf();
    let mut siblings = proof.siblings().to_vec();
    let mut peaks = proof.peaks().to_vec();

    let at = target.index(2 + siblings.len() + peaks.len());
    match at {
        0 => flip(&mut root),
        1 => flip(&mut leaf),
        at if at - 2 < siblings.len() => flip(&mut siblings[at - 2]),
        at => flip(&mut peaks[at - 2 - siblings.len()]),
    }

    Claim::new(
        root,
        InclusionProof::new(leaf, proof.leaf_index(), proof.mmr_size(), siblings, peaks),
    )
}
