//! Decode-then-verify entry point and its caller-facing result code.

use starknet_crypto::Felt;
use tracing::warn;

use crate::{codec::decode_request, error::Result, verifier::Verifier};

/// Verdict handed back to the caller of [`decode_and_verify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResultCode {
    /// The leaf is included under the claimed root.
    Valid = 0,
    /// The request decoded but does not prove inclusion.
    Invalid = 1,
}

impl ResultCode {
    /// Numeric code: 0 valid, 1 invalid.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether this is [`ResultCode::Valid`].
    pub fn is_valid(self) -> bool {
        self == ResultCode::Valid
    }
}

impl From<bool> for ResultCode {
    fn from(valid: bool) -> Self {
        if valid {
            ResultCode::Valid
        } else {
            ResultCode::Invalid
        }
    }
}

impl From<ResultCode> for Felt {
    fn from(code: ResultCode) -> Self {
        Felt::from(code.code())
    }
}

impl Verifier {
    /// Decode a flat request and verify it.
    ///
    /// A malformed request is an [`Error`](crate::Error); a well-formed one
    /// that fails verification is [`ResultCode::Invalid`].
    pub fn decode_and_verify(&self, raw: &[Felt]) -> Result<ResultCode> {
        let request = decode_request(raw, self.config().max_proof_len)
            .inspect_err(|error| warn!(len = raw.len(), %error, "malformed verification request"))?;
        Ok(self.verify(&request).into())
    }
}

/// Decode and verify with the default configuration.
pub fn decode_and_verify(raw: &[Felt]) -> Result<ResultCode> {
    Verifier::default().decode_and_verify(raw)
}
