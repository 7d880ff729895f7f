/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure to turn a flat field sequence into a verification request.
///
/// These are fatal for the call: nothing is verified from partial data.
/// A request that decodes but does not prove inclusion is not an error; it
/// is reported as a [`Rejection`](crate::Rejection).
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Fewer fields than the fixed header of the selected mode.
    #[error("request too short: {len} field(s), at least {min} required")]
    RequestTooShort {
        /// Number of fields received.
        len: usize,
        /// Fixed header length of the mode.
        min: usize,
    },
    /// The mode discriminator names no known hash scheme.
    #[error("unknown verification mode {0}")]
    UnknownMode(u64),
    /// A declared element count exceeds the configured bound.
    #[error("{field} {count} exceeds the maximum of {max}")]
    CountTooLarge {
        /// Which count was out of bounds.
        field: &'static str,
        /// The declared count.
        count: u64,
        /// The configured maximum.
        max: usize,
    },
    /// A declared count points past the end of the sequence.
    #[error("request truncated: {field} needs {needed} field(s), only {actual} present")]
    Truncated {
        /// The field that could not be read.
        field: &'static str,
        /// Fields needed to read it.
        needed: usize,
        /// Fields actually present.
        actual: usize,
    },
    /// The sequence length disagrees with the declared counts.
    #[error("request length mismatch: expected {expected} field(s), got {actual}")]
    LengthMismatch {
        /// Length implied by the header and counts.
        expected: usize,
        /// Length received.
        actual: usize,
    },
    /// A field value does not fit the integer width it encodes.
    #[error("{field} does not fit in {bits} bits")]
    Overflow {
        /// The offending field.
        field: &'static str,
        /// Width it must fit in.
        bits: u32,
    },
}
