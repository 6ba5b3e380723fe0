//! Error types for the STOCKGATE decision engine.
//!
//! Expected denial paths are NOT errors — they are `Decision` values with a
//! denial reason.  `GateError` covers the two genuinely exceptional cases:
//! registry gaps and audit-write failures.

use thiserror::Error;

use crate::resource::{Action, ResourceType};

/// The unified error type for the STOCKGATE crates.
#[derive(Debug, Error)]
pub enum GateError {
    /// No permission rule is registered for the (resource, action) pair.
    ///
    /// This is a configuration defect, not a runtime user error.  The
    /// registry surfaces it loudly so misconfiguration is caught in
    /// testing; the evaluator converts it into a denied decision with
    /// `ReasonCode::UnknownAction`.
    #[error("no permission rule registered for action {action:?} on resource {resource:?}")]
    UnknownAction {
        resource: ResourceType,
        action: Action,
    },

    /// The audit sink could not record a decision.
    ///
    /// Never escalated into the decision path — the evaluator swallows and
    /// counts it.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },
}

/// Convenience alias used throughout the STOCKGATE crates.
pub type GateResult<T> = Result<T, GateError>;
