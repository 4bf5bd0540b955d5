//! Bounds-checked DNS name operations: label counting, label removal,
//! caseless compare, in-place lowercasing, and the RFC 4035 §5.3.2
//! wildcard canonical-owner rule.
//!
//! Names here are wire-format: a sequence of length-prefixed labels
//! terminated by a zero-length (root) label. No name compression is ever
//! present in the inputs this module sees (canonical form forbids it).

/// Number of non-root labels in a wire-format name. Malformed names (a
/// length byte that would run past the end of `name`) stop counting at
/// the point of truncation rather than panicking — the caller's downstream
/// comparison will simply fail to match, which is the desired degradation.
pub fn labels(name: &[u8]) -> usize {
    let mut count = 0usize;
    let mut off = 0usize;
    while off < name.len() {
        let len = name[off] as usize;
        if len == 0 {
            break;
        }
        off += 1;
        if off + len > name.len() {
            break;
        }
        off += len;
        count += 1;
    }
    count
}

/// Byte length of the wire-format name, including the terminating root
/// label, or `None` if the name is truncated before a root label is found.
pub fn wire_len(name: &[u8]) -> Option<usize> {
    let mut off = 0usize;
    loop {
        if off >= name.len() {
            return None;
        }
        let len = name[off] as usize;
        off += 1;
        if len == 0 {
            return Some(off);
        }
        if off + len > name.len() {
            return None;
        }
        off += len;
    }
}

/// Strips the leftmost label, returning the parent-domain suffix. Returns
/// `None` if `name` is already the root name (a bare zero-length label).
pub fn remove_leading_label(name: &[u8]) -> Option<&[u8]> {
    if name.is_empty() {
        return None;
    }
    let len = name[0] as usize;
    if len == 0 {
        return None;
    }
    let start = 1 + len;
    if start > name.len() {
        return None;
    }
    Some(&name[start..])
}

/// ASCII case-insensitive equality over the raw wire-format bytes,
/// including label-length bytes (which differ in case only for the
/// label content, so a byte-wise ASCII-fold compare is exact).
pub fn compare_equal_caseless(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| x.eq_ignore_ascii_case(y))
}

/// Maps A-Z to a-z in place across every label's content; length bytes are
/// untouched since `eq_ignore_ascii_case`/`to_ascii_lowercase` on a length
/// byte (which is always < 0x40 for any label the wire format permits) is a
/// no-op anyway, but we skip length bytes explicitly for clarity.
pub fn lowercase_in_place(name: &mut [u8]) {
    let mut off = 0usize;
    while off < name.len() {
        let len = name[off] as usize;
        off += 1;
        if len == 0 {
            break;
        }
        let end = (off + len).min(name.len());
        name[off..end].make_ascii_lowercase();
        off = end;
    }
}

const WILDCARD_LABEL: [u8; 2] = [1u8, b'*'];

/// RFC 4035 §5.3.2: reconstruct the owner name the RRSIG actually covers.
///
/// `rrset_owner` is the wire-format owner name of the RRset being verified;
/// `rrsig_labels` is the RRSIG rdata's `labels` field. Writes the canonical
/// owner into `out` (caller-provided scratch) and returns the number of
/// bytes written, or `None` if `out` is too small or `rrsig_labels` exceeds
/// the owner's own label count (the caller, i.e. RRSIGValidator, must have
/// already rejected that case as bogus before this is ever invoked).
pub fn canonical_owner(rrset_owner: &[u8], rrsig_labels: u8, out: &mut [u8]) -> Option<usize> {
    let owner_labels = labels(rrset_owner);
    let rrsig_labels = rrsig_labels as usize;
    if rrsig_labels > owner_labels {
        return None;
    }
    if rrsig_labels == owner_labels {
        let n = rrset_owner.len();
        if out.len() < n {
            return None;
        }
        out[..n].copy_from_slice(rrset_owner);
        lowercase_in_place(&mut out[..n]);
        return Some(n);
    }

    // Wildcard synthesis: strip (owner_labels - rrsig_labels) leading labels,
    // then prepend a single "*" label.
    let mut suffix = rrset_owner;
    let strip = owner_labels - rrsig_labels;
    for _ in 0..strip {
        suffix = remove_leading_label(suffix)?;
    }
    let n = WILDCARD_LABEL.len() + suffix.len();
    if out.len() < n {
        return None;
    }
    out[..WILDCARD_LABEL.len()].copy_from_slice(&WILDCARD_LABEL);
    out[WILDCARD_LABEL.len()..n].copy_from_slice(suffix);
    lowercase_in_place(&mut out[..n]);
    Some(n)
}
