//! Cryptographic verification core of a DNSSEC-validating recursive DNS
//! resolver: canonicalization, RRSIG static validation, DS→DNSKEY digest
//! matching, and (key, signature) selection, aggregated into a single
//! {secure, bogus, unchecked} verdict.
//!
//! Wire parsing into the in-memory RRset representation, the trust-anchor
//! store, the resolver's iterative lookup driver, verdict caching, and
//! NSEC/NSEC3 denial-of-existence proofs are all out of scope — see the
//! module-level docs on [`driver`] for the entry points this crate exposes
//! to that surrounding layer.

pub mod clock;
pub mod crypto;
pub mod driver;
pub mod ds_digest;
pub mod name;
pub mod rdata_accessor;
pub mod rdata_canon;
pub mod rrset;
pub mod rrset_canon;
pub mod rrsig;
pub mod scratch;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use driver::VerificationDriver;
pub use rrset::Rrset;
pub use types::{Caps, CoreError, Verdict};
