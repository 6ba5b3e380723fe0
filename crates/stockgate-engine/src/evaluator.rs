//! The STOCKGATE evaluator: the deterministic per-request authorization gate.
//!
//! The evaluator enforces a fixed decision order:
//!
//!   Principal present → superuser bypass → registry lookup
//!   → codename check → workflow precondition → Decision
//!
//! The ordering invariants are absolute: superuser bypass runs before any
//! codename lookup, and the workflow guard runs only after the permission
//! check has passed — an `InvalidState` decision therefore always implies
//! the principal *was* permitted.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::{debug, warn};

use stockgate_contracts::decision::{AuthorizationRequest, Decision, ReasonCode};
use stockgate_registry::{collection_requirement, object_requirement, Requirement};

use crate::{guard::precondition_holds, sink::DecisionSink};

/// The stateless policy evaluator.
///
/// One evaluator serves the whole process: `evaluate` touches no mutable
/// shared state beyond an atomic failure counter, so concurrent calls need
/// no locking.  The optional sink receives every decision, fire-and-forget.
pub struct Evaluator {
    sink: Option<Box<dyn DecisionSink>>,
    audit_failures: AtomicU64,
}

impl Evaluator {
    /// An evaluator that records nothing.
    pub fn new() -> Self {
        Self {
            sink: None,
            audit_failures: AtomicU64::new(0),
        }
    }

    /// An evaluator that forwards every decision to `sink`.
    pub fn with_sink(sink: Box<dyn DecisionSink>) -> Self {
        Self {
            sink: Some(sink),
            audit_failures: AtomicU64::new(0),
        }
    }

    /// How many decisions the sink failed to record.
    ///
    /// Sink failures are swallowed — this counter is the only trace they
    /// leave beyond a `warn!` log line.
    pub fn audit_failures(&self) -> u64 {
        self.audit_failures.load(Ordering::Relaxed)
    }

    /// Decide whether the request's principal may perform the action.
    ///
    /// Always returns a `Decision`; expected denials (`Unauthenticated`,
    /// `Forbidden`, `InvalidState`, `UnknownAction`) are values, not errors.
    /// The decision is forwarded to the sink after it is finalized and
    /// before it is returned; the forwarding can neither change nor delay it.
    pub fn evaluate(&self, request: &AuthorizationRequest) -> Decision {
        let decision = self.decide(request);

        debug!(
            allowed = decision.allowed,
            reason = ?decision.reason,
            resource = ?decision.resource,
            action = ?decision.action,
            "decision finalized"
        );

        self.dispatch(&decision);
        decision
    }

    // ── Decision pipeline ─────────────────────────────────────────────────────

    fn decide(&self, request: &AuthorizationRequest) -> Decision {
        // ── Step 1: a principal must be present ──────────────────────────────
        let principal = match &request.principal {
            Some(principal) => principal,
            None => {
                warn!(
                    resource = ?request.resource,
                    action = ?request.action,
                    "no principal presented"
                );
                return finalize(request, ReasonCode::Unauthenticated);
            }
        };

        // ── Step 2: superuser bypass, before any codename lookup ─────────────
        if principal.is_superuser {
            debug!(principal_id = %principal.id.0, "superuser bypass");
            return finalize(request, ReasonCode::SuperuserBypass);
        }

        // ── Step 3: derive the required codename for this scope ──────────────
        //
        // The object-scoped codename for a verb may differ from the
        // collection-scoped one (Product Update: unrestricted at collection,
        // change_product at object level).  List and Create stay collection
        // checks regardless of whether a snapshot was supplied.
        let lookup = if request.object.is_some() && !request.action.is_collection_scoped() {
            object_requirement(request.resource, request.action)
        } else {
            collection_requirement(request.resource, request.action)
        };

        let requirement = match lookup {
            Ok(requirement) => requirement,
            Err(error) => {
                // Registry gap: a configuration defect, denied with its own
                // reason so tests can tell it apart from a policy deny.
                warn!(%error, "registry has no row for requested action");
                return finalize(request, ReasonCode::UnknownAction);
            }
        };

        // ── Step 4: codename check ───────────────────────────────────────────
        if let Requirement::Codename(codename) = &requirement {
            if !principal.granted.has(codename) {
                debug!(
                    principal_id = %principal.id.0,
                    codename = %codename.0,
                    "required codename not granted"
                );
                return finalize(request, ReasonCode::Forbidden);
            }
        }

        // ── Step 5: workflow precondition, only after permission passed ──────
        if let Some(object) = &request.object {
            if !precondition_holds(request.action, object) {
                debug!(
                    object_id = %object.object_id(),
                    action = ?request.action,
                    "workflow precondition unmet"
                );
                return finalize(request, ReasonCode::InvalidState);
            }
        }

        finalize(request, ReasonCode::Allowed)
    }

    // ── Audit dispatch ────────────────────────────────────────────────────────

    /// Forward the finalized decision to the sink, swallowing any failure.
    fn dispatch(&self, decision: &Decision) {
        let Some(sink) = &self.sink else { return };

        if let Err(error) = sink.record(decision) {
            self.audit_failures.fetch_add(1, Ordering::Relaxed);
            warn!(%error, "decision audit record dropped");
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Stamp a `Decision` for this request with the given reason.
///
/// `allowed` is derived from the reason, so the two can never disagree.
fn finalize(request: &AuthorizationRequest, reason: ReasonCode) -> Decision {
    Decision {
        allowed: reason.permits(),
        reason,
        principal_id: request.principal.as_ref().map(|p| p.id),
        resource: request.resource,
        action: request.action,
        object_id: request.object.as_ref().map(|o| o.object_id()),
        timestamp: Utc::now(),
    }
}
