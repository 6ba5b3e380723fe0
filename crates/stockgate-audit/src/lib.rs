//! # stockgate-audit
//!
//! SHA-256 hash-chained, fire-and-forget audit trail for STOCKGATE
//! decisions.
//!
//! ## Overview
//!
//! Every decision the evaluator emits is wrapped in an `AuditEntry` that
//! links to the previous entry via its SHA-256 hash.  Tampering with any
//! entry — even a single byte — breaks the chain and is detected by
//! `verify_chain`.
//!
//! Two sink flavors:
//! - [`InMemoryAuditSink`] — the blocking reference sink, a mutex-guarded
//!   chain suitable for tests and single-process services.
//! - [`ChannelAuditHook`] — a non-blocking adapter that queues decisions to
//!   a worker thread, for evaluators on a latency-sensitive request path.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockgate_audit::{ChannelAuditHook, InMemoryAuditSink};
//! use stockgate_engine::Evaluator;
//!
//! let sink = InMemoryAuditSink::new();
//! let hook = ChannelAuditHook::spawn(Box::new(sink.clone()));
//! let evaluator = Evaluator::with_sink(Box::new(hook));
//!
//! // ... evaluate requests; drop the evaluator to drain the queue ...
//!
//! assert!(sink.verify_integrity());
//! let trail = sink.export_trail();
//! ```

pub mod chain;
pub mod entry;
pub mod hook;
pub mod memory;

pub use chain::{hash_entry, verify_chain};
pub use entry::{AuditEntry, AuditTrail};
pub use hook::ChannelAuditHook;
pub use memory::InMemoryAuditSink;

// ── Tests ─────────────────────────────────────────────────────────────────────
