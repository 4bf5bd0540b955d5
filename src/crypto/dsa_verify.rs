//! DSA-over-SHA-1 verification over the RFC 2536 DNSKEY wire key format.
//!
//! Lower confidence than the RSA path: no file in the retrieved example
//! pack calls the `dsa` crate's verifying API concretely (the teacher's own
//! `dns/rdata/sec/algo.rs` DSA scaffolding is unfinished). Written directly
//! against the `dsa` crate's public API and RFC 2536's wire layout.

use dsa::{Components, Signature, VerifyingKey};
use sha1::{Digest, Sha1};
use signature::hazmat::PrehashVerifier;

use super::CryptoVerdict;

/// RFC 2536 §2: T (1 byte) ∥ Q (20 bytes) ∥ P (64+T*8 bytes) ∥ G (64+T*8
/// bytes) ∥ Y (64+T*8 bytes).
fn parse_dsa_key(bytes: &[u8]) -> Option<VerifyingKey> {
    if bytes.is_empty() {
        return None;
    }
    let t = bytes[0] as usize;
    let part_len = 64 + t * 8;
    let want = 1 + 20 + part_len * 3;
    if bytes.len() < want {
        return None;
    }
    let mut off = 1usize;
    let q = &bytes[off..off + 20];
    off += 20;
    let p = &bytes[off..off + part_len];
    off += part_len;
    let g = &bytes[off..off + part_len];
    off += part_len;
    let y = &bytes[off..off + part_len];

    let components = Components::from_components(
        num_bigint_dig_from_be(p),
        num_bigint_dig_from_be(q),
        num_bigint_dig_from_be(g),
    )
    .ok()?;
    VerifyingKey::from_components(components, num_bigint_dig_from_be(y)).ok()
}

fn num_bigint_dig_from_be(bytes: &[u8]) -> dsa::BigUint {
    dsa::BigUint::from_bytes_be(bytes)
}

/// RFC 2536 §3: the wire signature is T (1 byte) ∥ R (20 bytes) ∥ S (20
/// bytes), with no ASN.1 wrapping.
fn parse_dsa_signature(bytes: &[u8]) -> Option<Signature> {
    if bytes.len() != 41 {
        return None;
    }
    let r = num_bigint_dig_from_be(&bytes[1..21]);
    let s = num_bigint_dig_from_be(&bytes[21..41]);
    Signature::from_components(r, s).ok()
}

pub fn verify(preimage: &[u8], signature_bytes: &[u8], pubkey_bytes: &[u8]) -> CryptoVerdict {
    let Some(verifying_key) = parse_dsa_key(pubkey_bytes) else {
        return CryptoVerdict::Bogus;
    };
    let Some(signature) = parse_dsa_signature(signature_bytes) else {
        return CryptoVerdict::Bogus;
    };
    let mut hasher = Sha1::new();
    hasher.update(preimage);
    let prehash = hasher.finalize();
    match verifying_key.verify_prehash(&prehash, &signature) {
        Ok(()) => CryptoVerdict::Secure,
        Err(_) => CryptoVerdict::Bogus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_key_is_bogus_not_panic() {
        assert_eq!(verify(b"x", &[0u8; 41], &[]), CryptoVerdict::Bogus);
    }

    #[test]
    fn wrong_signature_length_is_bogus() {
        let key = vec![0u8; 1 + 20 + 64 * 3];
        assert_eq!(verify(b"x", &[0u8; 40], &key), CryptoVerdict::Bogus);
    }
}
