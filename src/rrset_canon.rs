//! Produces the byte sequence that was hashed by the signer (§4.4):
//! RRSIG fixed fields ∥ lowercased signer name ∥ each RR in canonical
//! order with duplicates removed.
//!
//! The reference source this crate was grounded on (`canonical_sort` in
//! `val_sigcrypt.c`) stubs the sort out as a no-op. This module implements
//! a real lexicographic sort and dedup over the post-canonicalization
//! rdata bytes, per the explicit design note that real-world data being
//! usually pre-sorted is not a license to skip it.

use crate::name::canonical_owner;
use crate::rdata_canon::canonicalize_rdata;
use crate::rrset::Rrset;
use crate::rrsig::RrsigFields;
use crate::scratch::ScratchBuffer;
use crate::types::CoreError;

/// Builds the signed preimage for `rrset` under the given RRSIG `fields`
/// into `scratch`. `scratch` is reset first. Returns the read view over the
/// finished preimage, or `ScratchExhausted` if it doesn't fit.
pub fn build_preimage<'s>(
    rrset: &Rrset,
    fields: &RrsigFields,
    scratch: &'s mut ScratchBuffer,
) -> Result<&'s [u8], CoreError> {
    scratch.reset();
    scratch.write(fields.fixed)?;

    let mut signer = fields.signer_name.to_vec();
    crate::name::lowercase_in_place(&mut signer);
    scratch.write(&signer)?;

    // Reserve worst-case space for the canonical owner directly in the
    // arena, write it in place, then give back whatever the wildcard
    // synthesis case didn't need — no separate heap buffer.
    let owner_start = scratch.len();
    let owner_region = scratch.reserve_mut(rrset.owner().len() + 1)?;
    let owner_len =
        canonical_owner(rrset.owner(), fields.labels, owner_region).ok_or(CoreError::Truncated)?;
    scratch.truncate(owner_start + owner_len);

    // Canonicalize every RR's rdata first (owned copies, since
    // canonicalization rewrites in place and we need to sort afterwards).
    let mut canon_rdatas: Vec<Vec<u8>> = Vec::with_capacity(rrset.data_count());
    for i in 0..rrset.data_count() {
        let mut rdata = rrset.rdata(i).to_vec();
        canonicalize_rdata(rrset.rtype(), &mut rdata);
        canon_rdatas.push(rdata);
    }

    // RFC 4034 §6.3: lexicographic octet comparison of canonical rdata;
    // duplicates (after canonicalization) are removed.
    canon_rdatas.sort();
    canon_rdatas.dedup();

    for rdata in &canon_rdatas {
        scratch.write_copy(owner_start, owner_len)?;
        scratch.write(&rrset.rtype().to_be_bytes())?;
        scratch.write(&rrset.class().to_be_bytes())?;
        scratch.write(&fields.original_ttl.to_be_bytes())?;
        let len: u16 = rdata.len().try_into().map_err(|_| CoreError::ScratchExhausted)?;
        scratch.write(&len.to_be_bytes())?;
        scratch.write(rdata)?;
    }

    Ok(scratch.as_slice())
}
