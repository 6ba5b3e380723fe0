//! The decision sink trait implemented by audit backends.

use std::sync::Arc;

use stockgate_contracts::{decision::Decision, error::GateResult};

/// A sink that records authorization decisions.
///
/// Every decision the evaluator emits — allow and deny alike — is forwarded
/// here exactly once.  Implementations must treat `record` as append-only
/// and must serialize or queue writes internally: the evaluator may call it
/// from any number of threads and never waits on downstream I/O.
///
/// A returned error is swallowed and counted by the evaluator; it never
/// alters or delays the decision handed back to the caller.
pub trait DecisionSink: Send + Sync {
    /// Record one decision.
    fn record(&self, decision: &Decision) -> GateResult<()>;
}

/// Sinks are commonly shared between the evaluator and the code that later
/// exports or inspects the trail.
impl<S: DecisionSink + ?Sized> DecisionSink for Arc<S> {
    fn record(&self, decision: &Decision) -> GateResult<()> {
        (**self).record(decision)
    }
}
