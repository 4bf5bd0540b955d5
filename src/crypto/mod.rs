//! Narrow interface to hash and signature-verify primitives keyed by
//! DNSSEC algorithm number (§4.7). The dispatch table only covers the RSA
//! and DSA algorithm family; every other algorithm number, including the
//! elliptic-curve and EdDSA ones, is `Unsupported`.

pub mod dsa_verify;
pub mod keytag;
pub mod rsa_verify;

use crate::types::{
    ALGO_DSA, ALGO_DSA_NSEC3_SHA1, ALGO_RSAMD5, ALGO_RSASHA1, ALGO_RSASHA1_NSEC3_SHA1,
    ALGO_RSASHA256,
};

pub use keytag::calc_keytag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoVerdict {
    Secure,
    Bogus,
    Unsupported,
}

/// `true` if the DNSSEC signature algorithm number is one this adapter can
/// verify (used by the `dnskey_algo_is_supported` exposed operation).
pub fn algorithm_is_supported(algorithm: u8) -> bool {
    matches!(
        algorithm,
        ALGO_RSAMD5
            | ALGO_RSASHA1
            | ALGO_RSASHA1_NSEC3_SHA1
            | ALGO_RSASHA256
            | ALGO_DSA
            | ALGO_DSA_NSEC3_SHA1
    )
}

/// Verifies `signature_bytes` over `preimage_bytes` using the DNSKEY's raw
/// public-key material (`DNSKEY rdata[4..]`, RFC 3110/2536 wire format)
/// under the scheme `algorithm` selects.
pub fn verify(
    algorithm: u8,
    preimage_bytes: &[u8],
    signature_bytes: &[u8],
    public_key_bytes: &[u8],
) -> CryptoVerdict {
    match algorithm {
        ALGO_RSAMD5 => rsa_verify::verify_md5(preimage_bytes, signature_bytes, public_key_bytes),
        ALGO_RSASHA1 | ALGO_RSASHA1_NSEC3_SHA1 => {
            rsa_verify::verify_sha1(preimage_bytes, signature_bytes, public_key_bytes)
        }
        ALGO_RSASHA256 => rsa_verify::verify_sha256(preimage_bytes, signature_bytes, public_key_bytes),
        ALGO_DSA | ALGO_DSA_NSEC3_SHA1 => {
            dsa_verify::verify(preimage_bytes, signature_bytes, public_key_bytes)
        }
        _ => {
            tracing::debug!(algorithm, "unsupported DNSSEC signature algorithm");
            CryptoVerdict::Unsupported
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_algorithm_reports_unsupported() {
        assert_eq!(verify(15, b"x", b"y", b"z"), CryptoVerdict::Unsupported);
        assert!(!algorithm_is_supported(15));
    }

    #[test]
    fn algorithm_support_table_matches_spec() {
        assert!(algorithm_is_supported(ALGO_RSASHA256));
        assert!(algorithm_is_supported(ALGO_RSASHA1));
        assert!(algorithm_is_supported(ALGO_DSA));
        assert!(algorithm_is_supported(ALGO_RSAMD5));
    }
}
