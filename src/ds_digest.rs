//! DS→DNSKEY digest matching (§4.5): reconstruct the hashed preimage from
//! a DNSKEY and compare against a candidate DS digest.

use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::types::{DIGEST_SHA1, DIGEST_SHA256};

/// `true` if `digest_type` is one this crate can compute (SHA-1, SHA-256).
pub fn digest_algo_is_supported(digest_type: u8) -> bool {
    matches!(digest_type, DIGEST_SHA1 | DIGEST_SHA256)
}

fn nominal_digest_len(digest_type: u8) -> Option<usize> {
    match digest_type {
        DIGEST_SHA1 => Some(20),
        DIGEST_SHA256 => Some(32),
        _ => None,
    }
}

/// Computes the DS digest over `dnskey_owner` (lowercased) ∥ `dnskey_rdata`
/// (flags ∥ protocol ∥ algorithm ∥ public key, no length prefix) for the
/// given `digest_type`, or `None` if the digest type is unsupported.
fn compute_digest(digest_type: u8, dnskey_owner: &[u8], dnskey_rdata: &[u8]) -> Option<Vec<u8>> {
    let mut owner = dnskey_owner.to_vec();
    crate::name::lowercase_in_place(&mut owner);
    match digest_type {
        DIGEST_SHA1 => {
            let mut h = Sha1::new();
            h.update(&owner);
            h.update(dnskey_rdata);
            Some(h.finalize().to_vec())
        }
        DIGEST_SHA256 => {
            let mut h = Sha256::new();
            h.update(&owner);
            h.update(dnskey_rdata);
            Some(h.finalize().to_vec())
        }
        _ => None,
    }
}

/// `true` iff the DS (digest_type, digest) matches the digest computed over
/// `dnskey_rdata`/`dnskey_owner`. Unsupported digest types, or a provided
/// digest whose length does not match the algorithm's fixed output size,
/// are "not a match," not an error.
pub fn digest_match_dnskey(
    digest_type: u8,
    ds_digest: &[u8],
    dnskey_owner: &[u8],
    dnskey_rdata: &[u8],
) -> bool {
    let Some(nominal_len) = nominal_digest_len(digest_type) else {
        return false;
    };
    if ds_digest.len() != nominal_len {
        return false;
    }
    let Some(computed) = compute_digest(digest_type, dnskey_owner, dnskey_rdata) else {
        return false;
    };
    computed.len() == nominal_len && computed == ds_digest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Vec<u8> {
        let mut v = Vec::new();
        for l in ["Example", "COM"] {
            v.push(l.len() as u8);
            v.extend_from_slice(l.as_bytes());
        }
        v.push(0);
        v
    }

    #[test]
    fn sha256_digest_roundtrip_and_mutation_flips_match() {
        let dnskey_rdata = [0x01, 0x00, 0x03, 0x08, 0xDE, 0xAD, 0xBE, 0xEF];
        let owner = owner();
        let mut lowered = owner.clone();
        crate::name::lowercase_in_place(&mut lowered);
        let mut h = Sha256::new();
        h.update(&lowered);
        h.update(dnskey_rdata);
        let digest = h.finalize().to_vec();

        assert!(digest_match_dnskey(DIGEST_SHA256, &digest, &owner, &dnskey_rdata));

        let mut mutated = digest.clone();
        mutated[0] ^= 0xFF;
        assert!(!digest_match_dnskey(DIGEST_SHA256, &mutated, &owner, &dnskey_rdata));

        let mut mutated_rdata = dnskey_rdata;
        mutated_rdata[4] ^= 0xFF;
        assert!(!digest_match_dnskey(DIGEST_SHA256, &digest, &owner, &mutated_rdata));
    }

    #[test]
    fn unsupported_digest_type_is_not_a_match() {
        assert!(!digest_algo_is_supported(99));
        assert!(!digest_match_dnskey(99, &[0u8; 32], &owner(), &[0u8; 8]));
    }

    #[test]
    fn wrong_length_digest_is_not_a_match() {
        assert!(!digest_match_dnskey(DIGEST_SHA256, &[0u8; 20], &owner(), &[0u8; 8]));
    }
}
