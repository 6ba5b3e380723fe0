//! In-memory implementation of `DecisionSink`.
//!
//! `InMemoryAuditSink` is the reference implementation of the
//! `DecisionSink` trait.  It keeps all entries in a `Vec` protected by a
//! `Mutex`, making it safe to share across threads while evaluators call
//! `record()`.
//!
//! The sink is cheaply cloneable — clones share the same state, so one
//! handle can sit inside an evaluator (or behind a `ChannelAuditHook`)
//! while another exports the trail for inspection.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use stockgate_contracts::{
    decision::Decision,
    error::{GateError, GateResult},
};
use stockgate_engine::sink::DecisionSink;

use crate::{
    chain::{hash_entry, verify_chain},
    entry::{AuditEntry, AuditTrail},
};

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `InMemoryAuditSink`.
pub(crate) struct MemoryState {
    /// All entries written so far, in append order.
    pub(crate) entries: Vec<AuditEntry>,

    /// The next sequence number to assign (starts at 0).
    pub(crate) sequence: u64,

    /// The `this_hash` of the last written entry, or `GENESIS_HASH` before
    /// any entry has been written.
    pub(crate) last_hash: String,
}

// ── Public sink ───────────────────────────────────────────────────────────────

/// An in-memory, append-only decision sink backed by a SHA-256 hash chain.
///
/// # Thread safety
///
/// `record()` acquires a `Mutex` internally, serializing concurrent writes
/// from parallel evaluators.  Clones share the same chain.
#[derive(Clone)]
pub struct InMemoryAuditSink {
    pub(crate) state: Arc<Mutex<MemoryState>>,
}

impl InMemoryAuditSink {
    /// Create an empty sink.
    ///
    /// The internal `last_hash` is initialized to `AuditEntry::GENESIS_HASH`
    /// so the first entry's `prev_hash` is automatically correct.
    pub fn new() -> Self {
        let state = MemoryState {
            entries: Vec::new(),
            sequence: 0,
            last_hash: AuditEntry::GENESIS_HASH.to_string(),
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Export a sealed `AuditTrail` containing all entries written so far.
    ///
    /// The `terminal_hash` is the `this_hash` of the last entry, or an empty
    /// string when no entries have been written.
    pub fn export_trail(&self) -> AuditTrail {
        let state = self.state.lock().expect("audit state lock poisoned");
        let terminal_hash = state
            .entries
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        AuditTrail {
            entries: state.entries.clone(),
            finalized_at: Utc::now(),
            terminal_hash,
        }
    }

    /// Verify that the in-memory chain has not been tampered with.
    ///
    /// Delegates to `verify_chain`, which checks both prev-hash linkage and
    /// hash correctness for every entry.
    pub fn verify_integrity(&self) -> bool {
        let state = self.state.lock().expect("audit state lock poisoned");
        verify_chain(&state.entries)
    }

    /// Number of entries recorded so far.
    pub fn len(&self) -> usize {
        self.state.lock().expect("audit state lock poisoned").entries.len()
    }

    /// True if no entries have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryAuditSink {
    fn default() -> Self {
        Self::new()
    }
}

// ── DecisionSink impl ─────────────────────────────────────────────────────────

impl DecisionSink for InMemoryAuditSink {
    /// Append one decision to the hash chain.
    ///
    /// Computes `this_hash` from (sequence, prev_hash, decision), wraps the
    /// decision in an `AuditEntry`, appends it, then advances the sequence
    /// counter and `last_hash`.
    ///
    /// Returns `Err(AuditWriteFailed)` only if the internal mutex is
    /// poisoned, which cannot happen under normal operation.
    fn record(&self, decision: &Decision) -> GateResult<()> {
        let mut state = self.state.lock().map_err(|e| GateError::AuditWriteFailed {
            reason: format!("audit state lock poisoned: {}", e),
        })?;

        let prev_hash = state.last_hash.clone();
        let sequence = state.sequence;

        let this_hash = hash_entry(sequence, decision, &prev_hash);

        let entry = AuditEntry {
            sequence,
            decision: decision.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        };

        state.entries.push(entry);
        state.sequence += 1;
        state.last_hash = this_hash;

        Ok(())
    }
}
