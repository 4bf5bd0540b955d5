//! RSA-PKCS#1-v1.5 verification over the RFC 3110 DNSKEY wire key format,
//! for the three hash functions this crate's algorithm table supports.
//! Call shape grounded in the teacher's `RsaSha1::verify_digest`, which
//! builds `Pkcs1v15Sign::new::<D>()` and calls
//! `pub_key.verify(scheme, &hashed, signature)`.

use md5::{Digest as _, Md5};
use rsa::pkcs1v15::Pkcs1v15Sign;
use rsa::{BigUint, RsaPublicKey};
use sha1::{Digest as _, Sha1};
use sha2::{Digest as _, Sha256};

use super::CryptoVerdict;

/// Parses an RFC 3110 RSA public key: a one-byte exponent length (or, if
/// that byte is zero, a two-byte big-endian length), the exponent, then
/// the modulus filling the rest of the slice.
fn parse_rsa_key(bytes: &[u8]) -> Option<RsaPublicKey> {
    if bytes.is_empty() {
        return None;
    }
    let (exp_len, mut off) = if bytes[0] == 0 {
        if bytes.len() < 3 {
            return None;
        }
        (u16::from_be_bytes([bytes[1], bytes[2]]) as usize, 3usize)
    } else {
        (bytes[0] as usize, 1usize)
    };
    if exp_len == 0 || off + exp_len >= bytes.len() {
        return None;
    }
    let e = BigUint::from_bytes_be(&bytes[off..off + exp_len]);
    off += exp_len;
    let n = BigUint::from_bytes_be(&bytes[off..]);
    RsaPublicKey::new(n, e).ok()
}

pub fn verify_md5(preimage: &[u8], signature: &[u8], pubkey_bytes: &[u8]) -> CryptoVerdict {
    let Some(pub_key) = parse_rsa_key(pubkey_bytes) else {
        return CryptoVerdict::Bogus;
    };
    let mut hasher = Md5::new();
    hasher.update(preimage);
    let hashed = hasher.finalize();
    match pub_key.verify(Pkcs1v15Sign::new::<Md5>(), &hashed, signature) {
        Ok(()) => CryptoVerdict::Secure,
        Err(_) => CryptoVerdict::Bogus,
    }
}

pub fn verify_sha1(preimage: &[u8], signature: &[u8], pubkey_bytes: &[u8]) -> CryptoVerdict {
    let Some(pub_key) = parse_rsa_key(pubkey_bytes) else {
        return CryptoVerdict::Bogus;
    };
    let mut hasher = Sha1::new();
    hasher.update(preimage);
    let hashed = hasher.finalize();
    match pub_key.verify(Pkcs1v15Sign::new::<Sha1>(), &hashed, signature) {
        Ok(()) => CryptoVerdict::Secure,
        Err(_) => CryptoVerdict::Bogus,
    }
}

pub fn verify_sha256(preimage: &[u8], signature: &[u8], pubkey_bytes: &[u8]) -> CryptoVerdict {
    let Some(pub_key) = parse_rsa_key(pubkey_bytes) else {
        return CryptoVerdict::Bogus;
    };
    let mut hasher = Sha256::new();
    hasher.update(preimage);
    let hashed = hasher.finalize();
    match pub_key.verify(Pkcs1v15Sign::new::<Sha256>(), &hashed, signature) {
        Ok(()) => CryptoVerdict::Secure,
        Err(_) => CryptoVerdict::Bogus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_key_is_bogus_not_panic() {
        assert_eq!(verify_sha256(b"x", b"sig", &[]), CryptoVerdict::Bogus);
        assert_eq!(verify_sha256(b"x", b"sig", &[3, 1, 2]), CryptoVerdict::Bogus);
    }

    #[test]
    fn wrong_signature_is_bogus() {
        // exponent length 1, exponent 3, modulus a small composite.
        let key_bytes: Vec<u8> = {
            let mut v = vec![1u8, 3];
            v.extend_from_slice(&[0x00, 0xC7]); // modulus = 199, deliberately tiny/invalid-ish
            v
        };
        let verdict = verify_sha256(b"preimage", b"not-a-signature", &key_bytes);
        assert_eq!(verdict, CryptoVerdict::Bogus);
    }
}
