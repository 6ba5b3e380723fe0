//! Audit entry and trail types.
//!
//! `AuditEntry` is a single link in the hash chain — it wraps a `Decision`
//! with sequence numbering and the SHA-256 hashes that make tampering
//! detectable.  `AuditTrail` is the sealed record exported for inspection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockgate_contracts::decision::Decision;

/// A single link in the SHA-256 hash chain.
///
/// Each entry commits to the previous entry via `prev_hash`, forming an
/// append-only chain.  Modifying any field — including those of the
/// embedded `decision` — invalidates `this_hash` and every subsequent
/// `prev_hash`, which `verify_chain` detects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Monotonically increasing position in the chain, starting at 0.
    pub sequence: u64,

    /// The immutable decision produced by the evaluator.
    pub decision: Decision,

    /// SHA-256 hash (hex) of the previous entry, or `GENESIS_HASH` for the
    /// first entry.
    pub prev_hash: String,

    /// SHA-256 hash (hex) of this entry's canonical content.
    ///
    /// Computed by `hash_entry()` over (sequence, prev_hash, canonical JSON
    /// of decision).
    pub this_hash: String,
}

impl AuditEntry {
    /// The sentinel `prev_hash` used for the first entry in every chain.
    ///
    /// 64 hex zeros — a value that can never be the SHA-256 of real data,
    /// making genesis detection unambiguous.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A sealed audit trail, exported for inspection.
///
/// Produced by `InMemoryAuditSink::export_trail()`.  The `terminal_hash` is
/// the `this_hash` of the last entry and serves as a compact commitment to
/// the entire trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTrail {
    /// All entries in chain order (sequence 0 first).
    pub entries: Vec<AuditEntry>,

    /// Wall-clock time (UTC) the trail was exported.
    pub finalized_at: DateTime<Utc>,

    /// The `this_hash` of the last entry.  Empty string if the trail is empty.
    pub terminal_hash: String,
}
