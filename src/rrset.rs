//! Borrowed-slice view over an RRset: owner, class, type, TTL, and the
//! packed rdata blobs for the N data RRs plus the M associated RRSIG rdata
//! blobs carried alongside them. Every blob is stored rdata-length-prefixed
//! (a big-endian u16) exactly as it would sit after the fixed RR header on
//! the wire, so indexing never needs to re-derive a length from elsewhere.

use crate::types::{Class, CoreError, Type};

/// One packed-rdata container: `rrs[0..n]` are data RRs, `rrs[n..]` are the
/// RRSIG rdata blobs covering this RRset.
pub struct Rrset<'a> {
    owner: &'a [u8],
    class: Class,
    typ: Type,
    ttl: u32,
    rr_blobs: &'a [&'a [u8]],
    n_data: usize,
}

impl<'a> Rrset<'a> {
    /// `blobs` holds the N data-RR rdata blobs followed by the M RRSIG
    /// rdata blobs, each blob *including* its 2-byte big-endian length
    /// prefix. `n_data` is N.
    pub fn new(
        owner: &'a [u8],
        class: Class,
        typ: Type,
        ttl: u32,
        blobs: &'a [&'a [u8]],
        n_data: usize,
    ) -> Result<Self, CoreError> {
        if n_data > blobs.len() {
            return Err(CoreError::Truncated);
        }
        for b in blobs {
            if b.len() < 2 {
                return Err(CoreError::Truncated);
            }
            let declared = u16::from_be_bytes([b[0], b[1]]) as usize;
            if declared != b.len() - 2 {
                return Err(CoreError::Truncated);
            }
        }
        Ok(Self {
            owner,
            class,
            typ,
            ttl,
            rr_blobs: blobs,
            n_data,
        })
    }

    pub fn owner(&self) -> &'a [u8] {
        self.owner
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn rtype(&self) -> Type {
        self.typ
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn data_count(&self) -> usize {
        self.n_data
    }

    pub fn sig_count(&self) -> usize {
        self.rr_blobs.len() - self.n_data
    }

    /// `(rdata_bytes, rdata_len)` for data RR `idx` (0-based, excluding the
    /// length prefix). Returns an empty slice on out-of-range `idx`.
    pub fn rdata(&self, idx: usize) -> &'a [u8] {
        if idx >= self.n_data {
            return &[];
        }
        &self.rr_blobs[idx][2..]
    }

    /// `(rdata_bytes, rdata_len)` for RRSIG `idx` (0-based among the M
    /// RRSIGs, i.e. already offset past the N data RRs).
    pub fn rrsig_rdata(&self, idx: usize) -> &'a [u8] {
        if idx >= self.sig_count() {
            return &[];
        }
        &self.rr_blobs[self.n_data + idx][2..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CLASS_IN, TYPE_A};

    fn blob(rdata: &[u8]) -> Vec<u8> {
        let mut v = Vec::with_capacity(2 + rdata.len());
        v.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        v.extend_from_slice(rdata);
        v
    }

    #[test]
    fn indexing_splits_data_and_sig_blobs() {
        let a = blob(&[1, 2, 3, 4]);
        let sig = blob(&[9, 9]);
        let blobs: Vec<&[u8]> = vec![&a, &sig];
        let rrset = Rrset::new(b"\x07example\x03com\x00", CLASS_IN, TYPE_A, 300, &blobs, 1).unwrap();
        assert_eq!(rrset.data_count(), 1);
        assert_eq!(rrset.sig_count(), 1);
        assert_eq!(rrset.rdata(0), &[1, 2, 3, 4]);
        assert_eq!(rrset.rrsig_rdata(0), &[9, 9]);
        assert_eq!(rrset.rdata(1), &[] as &[u8]);
    }

    #[test]
    fn rejects_blob_with_wrong_length_prefix() {
        let bad = vec![0u8, 5, 1, 2];
        let blobs: Vec<&[u8]> = vec![&bad];
        let res = Rrset::new(b"\x00", CLASS_IN, TYPE_A, 0, &blobs, 1);
        assert_eq!(res.err(), Some(CoreError::Truncated));
    }
}
