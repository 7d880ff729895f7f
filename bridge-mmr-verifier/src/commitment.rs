//! Leaf values the bridge appends to its MMRs.
//!
//! A deposit is committed in the compact domain, a withdrawal in the wide
//! domain. Either commitment is the raw leaf value of an inclusion claim.

use starknet_crypto::Felt;

use crate::{
    digest::{CompactDigest, WideDigest},
    hasher::{Keccak256Wide, MmrHasher, PoseidonCompact},
};

/// A deposit minted on the proving side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositCommitment {
    /// Recipient account address.
    pub recipient: Felt,
    /// Amount to mint.
    pub amount: u128,
    /// Per-sender nonce.
    pub nonce: u64,
    /// Block timestamp.
    pub timestamp: u64,
}

impl DepositCommitment {
    /// Poseidon over `[recipient, amount, nonce, timestamp]`.
    pub fn digest(&self) -> CompactDigest {
        PoseidonCompact::hash_many(&[
            CompactDigest(self.recipient),
            CompactDigest(Felt::from(self.amount)),
            CompactDigest::from_u64(self.nonce),
            CompactDigest::from_u64(self.timestamp),
        ])
    }
}

/// A withdrawal requested on the external ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalCommitment {
    /// Requesting account, as a 256-bit word.
    pub caller: WideDigest,
    /// Amount to release.
    pub amount: u128,
    /// Per-caller nonce.
    pub nonce: u64,
    /// Block timestamp.
    pub timestamp: u64,
}

impl WithdrawalCommitment {
    /// Keccak-256 over the four 32-byte big-endian words
    /// `[caller, amount, nonce, timestamp]`.
    pub fn digest(&self) -> WideDigest {
        Keccak256Wide::hash_many(&[
            self.caller,
            WideDigest::new(0, self.amount),
            WideDigest::from_u64(self.nonce),
            WideDigest::from_u64(self.timestamp),
        ])
    }
}

#[cfg(test)]
mod tests {
    use sha3::{Digest as _, Keccak256};
    use starknet_crypto::poseidon_hash_many;

    use super::*;

    #[test]
    fn deposit_is_poseidon_of_fields() {
        let deposit = DepositCommitment {
            recipient: Felt::from(123_456_789u64),
            amount: 1_000_000,
            nonce: 42,
            timestamp: 1_650_000_000,
        };
        let expected = poseidon_hash_many(&[
            Felt::from(123_456_789u64),
            Felt::from(1_000_000u64),
            Felt::from(42u64),
            Felt::from(1_650_000_000u64),
        ]);
        assert_eq!(deposit.digest().felt(), expected);

        let bumped = DepositCommitment { nonce: 43, ..deposit };
        assert_ne!(bumped.digest(), deposit.digest());
    }

    #[test]
    fn withdrawal_is_keccak_of_abi_words() {
        let caller_bytes: [u8; 32] =
            hex::decode("000000000000000000000000f39fd6e51aad88f6f4ce6ab8827279cfffb92266")
                .expect("hex")
                .try_into()
                .expect("32 bytes");
        let withdrawal = WithdrawalCommitment {
            caller: WideDigest::from(caller_bytes),
            amount: 5,
            nonce: 1,
            timestamp: 1_700_000_000,
        };

        let mut words = Vec::with_capacity(128);
        words.extend_from_slice(&caller_bytes);
        for value in [5u128, 1, 1_700_000_000] {
            let mut word = [0u8; 32];
            word[16..].copy_from_slice(&value.to_be_bytes());
            words.extend_from_slice(&word);
        }
        let expected: [u8; 32] = Keccak256::digest(&words).into();
        assert_eq!(withdrawal.digest().to_be_bytes(), expected);
    }
}
