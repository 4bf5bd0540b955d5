//! Bounds-checked typed field extraction from packed DNSKEY/DS/RRSIG rdata.
//! Every helper returns a sentinel (0, or an empty slice) on short input
//! instead of an error; callers fold that sentinel into "no match."

/// DNSKEY flags field, or 0 if `rdata` is shorter than 2 bytes.
pub fn dnskey_flags(rdata: &[u8]) -> u16 {
    if rdata.len() < 2 {
        return 0;
    }
    u16::from_be_bytes([rdata[0], rdata[1]])
}

/// DNSKEY algorithm byte, or 0 if `rdata` is shorter than 4 bytes.
pub fn dnskey_algorithm(rdata: &[u8]) -> u8 {
    if rdata.len() < 4 {
        return 0;
    }
    rdata[3]
}

/// DNSKEY public key material (everything after the 4-byte fixed header),
/// or an empty slice if `rdata` is shorter than 4 bytes.
pub fn dnskey_public_key(rdata: &[u8]) -> &[u8] {
    if rdata.len() < 4 {
        return &[];
    }
    &rdata[4..]
}

/// DS keytag field, or 0 if `rdata` is shorter than 2 bytes.
pub fn ds_keytag(rdata: &[u8]) -> u16 {
    if rdata.len() < 2 {
        return 0;
    }
    u16::from_be_bytes([rdata[0], rdata[1]])
}

/// DS key-algorithm byte, or 0 if `rdata` is shorter than 3 bytes.
pub fn ds_key_algorithm(rdata: &[u8]) -> u8 {
    if rdata.len() < 3 {
        return 0;
    }
    rdata[2]
}

/// DS digest-type byte, or 0 if `rdata` is shorter than 4 bytes.
pub fn ds_digest_algorithm(rdata: &[u8]) -> u8 {
    if rdata.len() < 4 {
        return 0;
    }
    rdata[3]
}

/// DS digest bytes (everything after the 4-byte fixed header), or an empty
/// slice if `rdata` is shorter than 4 bytes.
pub fn ds_digest(rdata: &[u8]) -> &[u8] {
    if rdata.len() < 4 {
        return &[];
    }
    &rdata[4..]
}

/// RRSIG keytag field, or 0 if `rdata` is shorter than 18 bytes.
pub fn rrsig_keytag(rdata: &[u8]) -> u16 {
    if rdata.len() < 18 {
        return 0;
    }
    u16::from_be_bytes([rdata[16], rdata[17]])
}

/// RRSIG algorithm byte, or 0 if `rdata` is shorter than 3 bytes.
pub fn rrsig_algorithm(rdata: &[u8]) -> u8 {
    if rdata.len() < 3 {
        return 0;
    }
    rdata[2]
}

/// RRSIG type-covered field, or 0 if `rdata` is shorter than 2 bytes.
pub fn rrsig_type_covered(rdata: &[u8]) -> u16 {
    if rdata.len() < 2 {
        return 0;
    }
    u16::from_be_bytes([rdata[0], rdata[1]])
}

/// RRSIG labels field, or 0 if `rdata` is shorter than 4 bytes.
pub fn rrsig_labels(rdata: &[u8]) -> u8 {
    if rdata.len() < 4 {
        return 0;
    }
    rdata[3]
}

/// RRSIG original_ttl field, or 0 if `rdata` is shorter than 8 bytes.
pub fn rrsig_original_ttl(rdata: &[u8]) -> u32 {
    if rdata.len() < 8 {
        return 0;
    }
    u32::from_be_bytes([rdata[4], rdata[5], rdata[6], rdata[7]])
}

/// RRSIG sig_expiration field, or 0 if `rdata` is shorter than 12 bytes.
pub fn rrsig_expiration(rdata: &[u8]) -> u32 {
    if rdata.len() < 12 {
        return 0;
    }
    u32::from_be_bytes([rdata[8], rdata[9], rdata[10], rdata[11]])
}

/// RRSIG sig_inception field, or 0 if `rdata` is shorter than 16 bytes.
pub fn rrsig_inception(rdata: &[u8]) -> u32 {
    if rdata.len() < 16 {
        return 0;
    }
    u32::from_be_bytes([rdata[12], rdata[13], rdata[14], rdata[15]])
}
