//! RRSIG rdata parsing and the static checks that must pass before any
//! crypto is attempted (§4.6). Parsing never panics on malformed input;
//! it returns `None` and the caller treats that as bogus.

use crate::name;
use crate::rdata_accessor as acc;
use crate::types::Type;

/// A parsed view over one RRSIG rdata blob. Holds offsets/slices into the
/// caller's buffer; nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct RrsigFields<'a> {
    pub type_covered: u16,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    pub expiration: u32,
    pub inception: u32,
    pub keytag: u16,
    pub signer_name: &'a [u8],
    pub signature: &'a [u8],
    /// The 18-byte fixed part exactly as it appears in the rdata, used
    /// verbatim as the first chunk of the signed preimage.
    pub fixed: &'a [u8],
}

const FIXED_LEN: usize = 18;

/// Parses an RRSIG rdata blob. Returns `None` if the rdata is too short to
/// contain the fixed part, a structurally valid signer name, and at least
/// one byte of signature (§4.6 checks 1-3).
pub fn parse(rdata: &[u8]) -> Option<RrsigFields<'_>> {
    if rdata.len() < FIXED_LEN + 1 + 1 {
        return None;
    }
    let fixed = &rdata[..FIXED_LEN];
    let signer_name = &rdata[FIXED_LEN..];
    let name_len = name::wire_len(signer_name)?;
    let signature = &rdata[FIXED_LEN + name_len..];
    if signature.is_empty() {
        return None;
    }
    Some(RrsigFields {
        type_covered: acc::rrsig_type_covered(fixed),
        algorithm: acc::rrsig_algorithm(fixed),
        labels: acc::rrsig_labels(fixed),
        original_ttl: acc::rrsig_original_ttl(fixed),
        expiration: acc::rrsig_expiration(fixed),
        inception: acc::rrsig_inception(fixed),
        keytag: acc::rrsig_keytag(fixed),
        signer_name: &signer_name[..name_len],
        signature,
        fixed,
    })
}

/// RFC 1982 serial-number-arithmetic comparison: `(int32)(a - b) > 0`.
fn serial_gt(a: u32, b: u32) -> bool {
    (a.wrapping_sub(b) as i32) > 0
}

/// Checks 4-6 of §4.6: type covered matches, label count is sane, and the
/// signature is within its validity window at `now` under serial
/// arithmetic (so the window can legally wrap past `u32::MAX`).
pub fn static_checks_pass(fields: &RrsigFields, owner: &[u8], rrset_type: Type, now: u32) -> bool {
    if fields.type_covered != rrset_type {
        return false;
    }
    let owner_labels = name::labels(owner);
    if fields.labels as usize > owner_labels {
        return false;
    }
    if serial_gt(fields.inception, fields.expiration) {
        return false;
    }
    if serial_gt(fields.inception, now) {
        return false;
    }
    if serial_gt(now, fields.expiration) {
        return false;
    }
    true
}

/// Checks 7-10 of §4.6: this specific DNSKEY is eligible to have produced
/// this signature.
pub fn key_binding_checks_pass(
    fields: &RrsigFields,
    dnskey_rdata: &[u8],
    dnskey_owner: &[u8],
    computed_keytag: u16,
) -> bool {
    use crate::types::DNSKEY_ZSK_FLAG;
    if acc::dnskey_flags(dnskey_rdata) & DNSKEY_ZSK_FLAG == 0 {
        return false;
    }
    if acc::dnskey_algorithm(dnskey_rdata) != fields.algorithm {
        return false;
    }
    if computed_keytag != fields.keytag {
        return false;
    }
    if !name::compare_equal_caseless(fields.signer_name, dnskey_owner) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TYPE_A;

    fn name_bytes(labels: &[&str]) -> Vec<u8> {
        let mut v = Vec::new();
        for l in labels {
            v.push(l.len() as u8);
            v.extend_from_slice(l.as_bytes());
        }
        v.push(0);
        v
    }

    fn sample_rdata(signer: &[u8]) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(&TYPE_A.to_be_bytes()); // type_covered
        v.push(8); // algorithm RSASHA256
        v.push(2); // labels
        v.extend_from_slice(&3600u32.to_be_bytes()); // original_ttl
        v.extend_from_slice(&2_000_003_600u32.to_be_bytes()); // expiration
        v.extend_from_slice(&2_000_000_000u32.to_be_bytes()); // inception
        v.extend_from_slice(&1234u16.to_be_bytes()); // keytag
        v.extend_from_slice(signer);
        v.push(0xAB); // 1 signature byte
        v
    }

    #[test]
    fn parse_extracts_all_fixed_fields() {
        let signer = name_bytes(&["example", "com"]);
        let rdata = sample_rdata(&signer);
        let f = parse(&rdata).unwrap();
        assert_eq!(f.type_covered, TYPE_A);
        assert_eq!(f.algorithm, 8);
        assert_eq!(f.labels, 2);
        assert_eq!(f.keytag, 1234);
        assert_eq!(f.signer_name, &signer[..]);
        assert_eq!(f.signature, &[0xAB]);
    }

    #[test]
    fn parse_rejects_too_short() {
        assert!(parse(&[0u8; 19]).is_none());
    }

    #[test]
    fn parse_rejects_missing_signature_byte() {
        let signer = name_bytes(&[]);
        let mut rdata = sample_rdata(&signer);
        rdata.pop();
        assert!(parse(&rdata).is_none());
    }

    #[test]
    fn static_checks_validity_window() {
        let signer = name_bytes(&["example", "com"]);
        let rdata = sample_rdata(&signer);
        let f = parse(&rdata).unwrap();
        let owner = name_bytes(&["example", "com"]);
        assert!(static_checks_pass(&f, &owner, TYPE_A, 2_000_001_800));
        assert!(!static_checks_pass(&f, &owner, TYPE_A, 2_000_003_601));
        assert!(!static_checks_pass(&f, &owner, TYPE_A, 1_999_999_999));
    }

    #[test]
    fn static_checks_reject_labels_exceeding_owner() {
        let signer = name_bytes(&["example", "com"]);
        let rdata = sample_rdata(&signer);
        let f = parse(&rdata).unwrap();
        let short_owner = name_bytes(&["com"]);
        assert!(!static_checks_pass(&f, &short_owner, TYPE_A, 2_000_001_800));
    }

    #[test]
    fn serial_arithmetic_wraps_as_specified() {
        // inception = 0xFFFFFF00, expiration = 0x00000100, now = 0xFFFFFFFE
        assert!(!serial_gt(0xFFFF_FF00, 0x0000_0100));
        assert!(!serial_gt(0xFFFF_FF00, 0xFFFF_FFFE));
        assert!(!serial_gt(0xFFFF_FFFE, 0x0000_0100));
    }
}
