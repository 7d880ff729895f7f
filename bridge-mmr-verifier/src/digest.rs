//! Digest representations of the two hash schemes.
//!
//! - [`WideDigest`]: a 256-bit value carried as two 128-bit limbs, the way
//!   the external ledger passes `u256` words.
//! - [`CompactDigest`]: one Stark field element, native to the proving
//!   domain.
//!
//! The two never mix: a request picks its [`Scheme`] once and every digest
//! in it has that scheme's type.

use core::fmt;

use starknet_crypto::Felt;

/// A 256-bit digest split into `high` and `low` 128-bit limbs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WideDigest {
    /// Most significant 128 bits.
    pub high: u128,
    /// Least significant 128 bits.
    pub low: u128,
}

impl WideDigest {
    /// The all-zero digest.
    pub const ZERO: WideDigest = WideDigest { high: 0, low: 0 };

    /// Build a digest from its limbs.
    pub const fn new(high: u128, low: u128) -> Self {
        WideDigest { high, low }
    }

    /// Embed a small integer: value in the low limb, high limb zero.
    pub const fn from_u64(value: u64) -> Self {
        WideDigest {
            high: 0,
            low: value as u128,
        }
    }

    /// Interpret 32 big-endian bytes as `high ‖ low`.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut high = [0u8; 16];
        let mut low = [0u8; 16];
        high.copy_from_slice(&bytes[..16]);
        low.copy_from_slice(&bytes[16..]);
        WideDigest {
            high: u128::from_be_bytes(high),
            low: u128::from_be_bytes(low),
        }
    }

    /// The 32 big-endian bytes of the underlying 256-bit integer.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&self.high.to_be_bytes());
        bytes[16..].copy_from_slice(&self.low.to_be_bytes());
        bytes
    }
}

impl From<[u8; 32]> for WideDigest {
    fn from(bytes: [u8; 32]) -> Self {
        WideDigest::from_be_bytes(bytes)
    }
}

impl fmt::Display for WideDigest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:032x}{:032x}", self.high, self.low)
    }
}

/// A single Stark field element digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompactDigest(pub Felt);

impl CompactDigest {
    /// The zero field element.
    pub const ZERO: CompactDigest = CompactDigest(Felt::ZERO);

    /// Embed a small integer as a field element.
    pub fn from_u64(value: u64) -> Self {
        CompactDigest(Felt::from(value))
    }

    /// The wrapped field element.
    pub fn felt(&self) -> Felt {
        self.0
    }
}

impl Default for CompactDigest {
    fn default() -> Self {
        CompactDigest::ZERO
    }
}

impl From<Felt> for CompactDigest {
    fn from(felt: Felt) -> Self {
        CompactDigest(felt)
    }
}

impl fmt::Display for CompactDigest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The hash scheme a request is verified under.
///
/// The discriminant is the wire `mode` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Keccak-256 over 256-bit words; external ledger domain.
    Wide = 1,
    /// Poseidon over Stark field elements; proving domain.
    Compact = 2,
}

impl Scheme {
    /// Wire mode discriminator.
    pub fn mode(self) -> u64 {
        self as u64
    }

    /// Resolve a wire mode discriminator.
    pub fn from_mode(mode: u64) -> Option<Scheme> {
        match mode {
            1 => Some(Scheme::Wide),
            2 => Some(Scheme::Compact),
            _ => None,
        }
    }

    /// Field slots one digest occupies on the wire.
    pub fn digest_width(self) -> usize {
        match self {
            Scheme::Wide => 2,
            Scheme::Compact => 1,
        }
    }

    /// Fixed header length: mode, root, leaf, leaf index, size, both counts.
    pub fn header_len(self) -> usize {
        2 * self.digest_width() + 5
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scheme::Wide => write!(f, "wide"),
            Scheme::Compact => write!(f, "compact"),
        }
    }
}
