//! Flat field-sequence wire format for verification requests.
//!
//! ```text
//! [mode, root..., leaf..., leaf_index, mmr_size,
//!  sibling_count, siblings..., peak_count, peaks...]
//! ```
//!
//! A wide digest occupies two slots (`high`, `low`), a compact digest one.
//! Every count is checked against the configured bound before anything is
//! allocated for it, and the total length must match the counts exactly.

use serde_json::{Number, Value};
use starknet_crypto::Felt;

use crate::{
    digest::{CompactDigest, Scheme, WideDigest},
    error::{Error, Result},
    proof::{Claim, InclusionProof, VerificationRequest},
};

/// A digest type with a fixed-width field-slot encoding.
pub trait WireDigest: Sized {
    /// Slots one digest occupies.
    const WIDTH: usize;

    /// Decode from exactly [`Self::WIDTH`] slots.
    fn read(slots: &[Felt], field: &'static str) -> Result<Self>;

    /// Append the encoding to `out`.
    fn write(&self, out: &mut Vec<Felt>);
}

impl WireDigest for WideDigest {
    const WIDTH: usize = 2;

    fn read(slots: &[Felt], field: &'static str) -> Result<Self> {
        Ok(WideDigest {
            high: felt_to_u128(&slots[0], field)?,
            low: felt_to_u128(&slots[1], field)?,
        })
    }

    fn write(&self, out: &mut Vec<Felt>) {
        out.push(Felt::from(self.high));
        out.push(Felt::from(self.low));
    }
}

impl WireDigest for CompactDigest {
    const WIDTH: usize = 1;

    fn read(slots: &[Felt], _field: &'static str) -> Result<Self> {
        Ok(CompactDigest(slots[0]))
    }

    fn write(&self, out: &mut Vec<Felt>) {
        out.push(self.0);
    }
}

/// Read a field element as a `u64`, failing if it does not fit.
pub fn felt_to_u64(felt: &Felt, field: &'static str) -> Result<u64> {
    u64::try_from(*felt).map_err(|_| Error::Overflow { field, bits: 64 })
}

/// Read a field element as a `u128`, failing if it does not fit.
pub fn felt_to_u128(felt: &Felt, field: &'static str) -> Result<u128> {
    u128::try_from(*felt).map_err(|_| Error::Overflow { field, bits: 128 })
}

/// Forward-only cursor over the raw sequence.
///
/// Callers check lengths before reading; every read here is in bounds.
struct FieldReader<'a> {
    raw: &'a [Felt],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    fn new(raw: &'a [Felt]) -> Self {
        FieldReader { raw, pos: 0 }
    }

    fn skip(&mut self, count: usize) {
        self.pos += count;
    }

    fn remaining(&self) -> usize {
        self.raw.len() - self.pos
    }

    fn u64(&mut self, field: &'static str) -> Result<u64> {
        let value = felt_to_u64(&self.raw[self.pos], field)?;
        self.pos += 1;
        Ok(value)
    }

    fn digest<D: WireDigest>(&mut self, field: &'static str) -> Result<D> {
        let digest = D::read(&self.raw[self.pos..self.pos + D::WIDTH], field)?;
        self.pos += D::WIDTH;
        Ok(digest)
    }

    fn digests<D: WireDigest>(&mut self, count: usize, field: &'static str) -> Result<Vec<D>> {
        let mut digests = Vec::with_capacity(count);
        for _ in 0..count {
            digests.push(self.digest(field)?);
        }
        Ok(digests)
    }

    /// Read a count and check it against `max`.
    fn count(&mut self, field: &'static str, max: usize) -> Result<usize> {
        let count = self.u64(field)?;
        match usize::try_from(count) {
            Ok(count) if count <= max => Ok(count),
            _ => Err(Error::CountTooLarge { field, count, max }),
        }
    }
}

/// Decode a flat field sequence into a typed request.
///
/// `max_proof_len` bounds both the sibling and the peak count.
pub fn decode_request(raw: &[Felt], max_proof_len: usize) -> Result<VerificationRequest> {
    let Some(first) = raw.first() else {
        return Err(Error::RequestTooShort {
            len: 0,
            min: Scheme::Compact.header_len(),
        });
    };
    let mode = felt_to_u64(first, "mode")?;
    let scheme = Scheme::from_mode(mode).ok_or(Error::UnknownMode(mode))?;
    if raw.len() < scheme.header_len() {
        return Err(Error::RequestTooShort {
            len: raw.len(),
            min: scheme.header_len(),
        });
    }

    let mut reader = FieldReader::new(raw);
    reader.skip(1);
    Ok(match scheme {
        Scheme::Wide => VerificationRequest::Wide(decode_claim(&mut reader, max_proof_len)?),
        Scheme::Compact => {
            VerificationRequest::Compact(decode_claim(&mut reader, max_proof_len)?)
        }
    })
}

fn decode_claim<D: WireDigest + Copy>(
    reader: &mut FieldReader<'_>,
    max_proof_len: usize,
) -> Result<Claim<D>> {
    let root = reader.digest::<D>("root")?;
    let leaf = reader.digest::<D>("leaf")?;
    let leaf_index = reader.u64("leaf_index")?;
    let mmr_size = reader.u64("mmr_size")?;

    let sibling_count = reader.count("sibling_count", max_proof_len)?;
    // the header guarantees the sibling_count slot; the peak_count slot
    // moves with the sibling block
    let needed = sibling_count
        .checked_mul(D::WIDTH)
        .and_then(|slots| slots.checked_add(1))
        .ok_or(Error::CountTooLarge {
            field: "sibling_count",
            count: sibling_count as u64,
            max: max_proof_len,
        })?;
    if reader.remaining() < needed {
        return Err(Error::Truncated {
            field: "peak_count",
            needed: reader.pos.saturating_add(needed),
            actual: reader.raw.len(),
        });
    }
    let siblings = reader.digests::<D>(sibling_count, "siblings")?;

    let peak_count = reader.count("peak_count", max_proof_len)?;
    let expected = peak_count
        .checked_mul(D::WIDTH)
        .and_then(|slots| slots.checked_add(reader.pos))
        .ok_or(Error::CountTooLarge {
            field: "peak_count",
            count: peak_count as u64,
            max: max_proof_len,
        })?;
    if reader.raw.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: reader.raw.len(),
        });
    }
    let peaks = reader.digests::<D>(peak_count, "peaks")?;

    let proof = InclusionProof::new(leaf, leaf_index, mmr_size, siblings, peaks);
    Ok(Claim::new(root, proof))
}

/// Encode a request in the wire format [`decode_request`] reads.
///
/// Both the claim's expected leaf and the proof's leaf travel in the single
/// `leaf` slot, so a claim whose two leaves differ is encoded with the
/// expected one.
pub fn encode_request(request: &VerificationRequest) -> Vec<Felt> {
    let mut out = Vec::new();
    out.push(Felt::from(request.scheme().mode()));
    match request {
        VerificationRequest::Wide(claim) => encode_claim(claim, &mut out),
        VerificationRequest::Compact(claim) => encode_claim(claim, &mut out),
    }
    out
}

fn encode_claim<D: WireDigest>(claim: &Claim<D>, out: &mut Vec<Felt>) {
    let proof = claim.proof();
    claim.root().write(out);
    claim.leaf().write(out);
    out.push(Felt::from(proof.leaf_index()));
    out.push(Felt::from(proof.mmr_size()));
    out.push(Felt::from(proof.siblings().len() as u64));
    for sibling in proof.siblings() {
        sibling.write(out);
    }
    out.push(Felt::from(proof.peaks().len() as u64));
    for peak in proof.peaks() {
        peak.write(out);
    }
}

/// Render fields as a space-separated line of decimal arguments.
pub fn render_args(raw: &[Felt]) -> String {
    raw.iter()
        .map(|felt| felt.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render fields as a JSON argument list: one array argument holding every
/// field as an exact decimal number.
pub fn render_json_args(raw: &[Felt]) -> serde_json::Result<String> {
    let fields = raw
        .iter()
        .map(|felt| felt.to_string().parse::<Number>().map(Value::Number))
        .collect::<serde_json::Result<Vec<_>>>()?;
    serde_json::to_string(&Value::Array(vec![Value::Array(fields)]))
}
