//! Hash-chain primitives: hashing and chain integrity verification.
//!
//! Every field that contributes to an entry's hash is listed explicitly so
//! nothing is accidentally omitted.
//!
//! Hash input layout (bytes, in order):
//!   1. sequence as 8-byte little-endian
//!   2. prev_hash as UTF-8 bytes (64 ASCII hex chars)
//!   3. canonical JSON of the decision (serde_json with no pretty-printing)

use sha2::{Digest, Sha256};

use stockgate_contracts::decision::Decision;

use crate::entry::AuditEntry;

/// Compute the SHA-256 hash for a single audit entry.
///
/// The hash commits to the entry's position in the chain (`sequence`), its
/// link to the previous entry (`prev_hash`), and the full decision.
///
/// Returns a lowercase 64-character hex string.
///
/// # Panics
///
/// Panics if `decision` cannot be serialized to JSON — which cannot happen
/// for the well-formed `Decision` type.
pub fn hash_entry(sequence: u64, decision: &Decision, prev_hash: &str) -> String {
    let decision_json =
        serde_json::to_vec(decision).expect("Decision must always be serializable to JSON");

    let mut hasher = Sha256::new();
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&decision_json);

    hex::encode(hasher.finalize())
}

/// Verify the integrity of a hash chain.
///
/// Returns `true` when the chain is valid according to both rules:
///
/// 1. **Prev-hash linkage** — each entry's `prev_hash` equals the
///    `this_hash` of the preceding entry (or `GENESIS_HASH` for entry 0).
/// 2. **Hash correctness** — each entry's `this_hash` matches the value
///    recomputed from its own fields.
///
/// Returns `false` the moment any mismatch is detected.  An empty chain
/// is defined as valid.
pub fn verify_chain(entries: &[AuditEntry]) -> bool {
    let mut expected_prev = AuditEntry::GENESIS_HASH.to_string();

    for entry in entries {
        if entry.prev_hash != expected_prev {
            return false;
        }

        let recomputed = hash_entry(entry.sequence, &entry.decision, &entry.prev_hash);
        if entry.this_hash != recomputed {
            return false;
        }

        expected_prev = entry.this_hash.clone();
    }

    true
}
