//! Wire constants and the small result types shared across the crate.

/// Outcome of a verification call: secure, bogus, or unchecked.
///
/// There is deliberately no richer error type here — see the crate's
/// error-handling design notes. A resolver answers one of these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Secure,
    Bogus,
    Unchecked,
}

impl Verdict {
    pub fn is_secure(self) -> bool {
        matches!(self, Verdict::Secure)
    }
}

/// Errors from the handful of constructors that wrap caller-owned buffers.
/// Everything downstream of construction uses sentinel returns instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A record or rdata blob was shorter than its own declared length.
    Truncated,
    /// The caller's scratch buffer could not hold the requested bytes.
    ScratchExhausted,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::Truncated => write!(f, "truncated wire data"),
            CoreError::ScratchExhausted => write!(f, "scratch buffer exhausted"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Caller-configured cardinality ceilings bounding the cost of one
/// verification call. The driver checks these once, up front.
#[derive(Debug, Clone, Copy)]
pub struct Caps {
    pub max_rrs: usize,
    pub max_rrsigs: usize,
    pub max_dnskeys: usize,
}

impl Default for Caps {
    fn default() -> Self {
        // Generous defaults; a resolver embedding this core is expected to
        // tighten these for its own memory/CPU budget.
        Self {
            max_rrs: 256,
            max_rrsigs: 32,
            max_dnskeys: 64,
        }
    }
}

impl Caps {
    /// Cheap pre-check for one `verify_rrset_with_keyset` call.
    pub fn within(&self, rr_count: usize, sig_count: usize, key_count: usize) -> bool {
        rr_count <= self.max_rrs && sig_count <= self.max_rrsigs && key_count <= self.max_dnskeys
    }
}

pub type Type = u16;
pub type Class = u16;

pub const TYPE_A: Type = 1;
pub const TYPE_NS: Type = 2;
pub const TYPE_MD: Type = 3;
pub const TYPE_MF: Type = 4;
pub const TYPE_CNAME: Type = 5;
pub const TYPE_SOA: Type = 6;
pub const TYPE_MB: Type = 7;
pub const TYPE_MG: Type = 8;
pub const TYPE_MR: Type = 9;
pub const TYPE_MX: Type = 15;
pub const TYPE_TXT: Type = 16;
pub const TYPE_RP: Type = 17;
pub const TYPE_AFSDB: Type = 18;
pub const TYPE_RT: Type = 21;
pub const TYPE_SIG: Type = 24;
pub const TYPE_PX: Type = 26;
pub const TYPE_NXT: Type = 30;
pub const TYPE_KX: Type = 36;
pub const TYPE_DS: Type = 43;
pub const TYPE_SRV: Type = 33;
pub const TYPE_NAPTR: Type = 35;
pub const TYPE_RRSIG: Type = 46;
pub const TYPE_NSEC: Type = 47;
pub const TYPE_DNSKEY: Type = 48;
pub const TYPE_DNAME: Type = 39;
pub const TYPE_MINFO: Type = 14;
pub const TYPE_HINFO: Type = 13;
pub const TYPE_PTR: Type = 12;

pub const CLASS_IN: Class = 1;
pub const CLASS_CS: Class = 2;
pub const CLASS_CH: Class = 3;
pub const CLASS_HS: Class = 4;

/// DNSSEC algorithm numbers (RFC 4034 Appendix A.1 and successors).
pub const ALGO_RSAMD5: u8 = 1;
pub const ALGO_DH: u8 = 2;
pub const ALGO_DSA: u8 = 3;
pub const ALGO_ECC: u8 = 4;
pub const ALGO_RSASHA1: u8 = 5;
pub const ALGO_DSA_NSEC3_SHA1: u8 = 6;
pub const ALGO_RSASHA1_NSEC3_SHA1: u8 = 7;
/// RFC 5702; not present in the reference source this spec was distilled
/// from, added here because the RSASHA256 happy path is a required scenario.
pub const ALGO_RSASHA256: u8 = 8;
pub const ALGO_RSASHA512: u8 = 10;
pub const ALGO_INDIRECT: u8 = 252;
pub const ALGO_PRIVATEDNS: u8 = 253;
pub const ALGO_PRIVATEOID: u8 = 254;

/// DS digest type numbers (RFC 4509).
pub const DIGEST_SHA1: u8 = 1;
pub const DIGEST_SHA256: u8 = 2;

/// DNSKEY flags bit gating zone-signing use (RFC 4034 §2.1.1).
pub const DNSKEY_ZSK_FLAG: u16 = 0x0100;
