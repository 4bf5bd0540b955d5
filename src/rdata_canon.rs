//! Per-RR-type canonical rewrite of embedded names and text fields,
//! expressed as a small table of ops driven by one interpreter, per the
//! design note that a type-code switch should be data instead of code.

use crate::name::lowercase_in_place;
use crate::types::*;

/// One step of a per-type canonicalization recipe.
#[derive(Debug, Clone, Copy)]
enum Op {
    /// Skip a fixed number of bytes without rewriting them.
    Skip(usize),
    /// Lowercase a DNS name starting at the current cursor; advances the
    /// cursor past the name.
    LowerName,
    /// Lowercase a length-prefixed text string (1-byte length) at the
    /// current cursor; advances the cursor past it.
    LowerText,
}

/// Looks up the canonicalization recipe for an RR type. Types with no
/// entry are left untouched (no rewrite).
fn recipe(typ: Type) -> &'static [Op] {
    match typ {
        TYPE_NS | TYPE_MD | TYPE_MF | TYPE_CNAME | TYPE_MB | TYPE_MG | TYPE_MR | TYPE_PTR
        | TYPE_DNAME | TYPE_NSEC | TYPE_NXT => &[Op::LowerName],
        TYPE_SOA | TYPE_RP | TYPE_MINFO => &[Op::LowerName, Op::LowerName],
        TYPE_MX | TYPE_RT | TYPE_AFSDB | TYPE_KX => &[Op::Skip(2), Op::LowerName],
        TYPE_SRV => &[Op::Skip(6), Op::LowerName],
        TYPE_RRSIG | TYPE_SIG => &[Op::Skip(18), Op::LowerName],
        TYPE_PX => &[Op::Skip(2), Op::LowerName, Op::LowerName],
        TYPE_NAPTR => &[
            Op::Skip(4),
            Op::LowerText,
            Op::LowerText,
            Op::LowerText,
            Op::LowerName,
        ],
        TYPE_HINFO => &[Op::LowerText, Op::LowerText],
        _ => &[],
    }
}

/// Rewrites embedded names/text fields of `rdata` in place to their
/// canonical (lowercased) form, per the recipe for `typ`. Lengths never
/// change. Every step is bounds-checked against `rdata`'s length; running
/// out of bytes mid-recipe simply stops rewriting the remainder rather than
/// reporting an error — the downstream signature compare will fail
/// naturally on truncated input.
pub fn canonicalize_rdata(typ: Type, rdata: &mut [u8]) {
    let mut off = 0usize;
    for op in recipe(typ) {
        match op {
            Op::Skip(n) => {
                if off + n > rdata.len() {
                    return;
                }
                off += n;
            }
            Op::LowerName => {
                let Some(len) = crate::name::wire_len(&rdata[off..]) else {
                    return;
                };
                lowercase_in_place(&mut rdata[off..off + len]);
                off += len;
            }
            Op::LowerText => {
                if off >= rdata.len() {
                    return;
                }
                let tlen = rdata[off] as usize;
                off += 1;
                if off + tlen > rdata.len() {
                    return;
                }
                rdata[off..off + tlen].make_ascii_lowercase();
                off += tlen;
            }
        }
    }
}
