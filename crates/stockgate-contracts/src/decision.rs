//! Decision and request types.
//!
//! The evaluator consumes an `AuthorizationRequest` and produces a
//! `Decision`.  STOCKGATE is deny-by-default: any reason other than
//! `Allowed` or `SuperuserBypass` blocks the operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    object::ObjectSnapshot,
    principal::{PrincipalId, PrincipalSnapshot},
    resource::{Action, ResourceType},
};

/// Why a decision came out the way it did.
///
/// `Forbidden` (the principal lacks a codename) and `InvalidState` (the
/// object cannot transition from its current state) are deliberately
/// distinct — callers surface them differently.  All denial reasons are
/// terminal and non-retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// The principal holds the required codename and all preconditions hold.
    Allowed,
    /// The principal is a superuser; no codename was consulted.
    SuperuserBypass,
    /// The principal does not hold the required codename.
    Forbidden,
    /// The permission check passed, but the object's workflow state does
    /// not admit the action.
    InvalidState,
    /// No registry row covers the (resource, action) pair.  A configuration
    /// defect — tests must catch it, production should never see it.
    UnknownAction,
    /// No principal was presented.
    Unauthenticated,
}

impl ReasonCode {
    /// True for the reasons that permit the operation.
    pub fn permits(self) -> bool {
        matches!(self, ReasonCode::Allowed | ReasonCode::SuperuserBypass)
    }
}

/// The immutable outcome of one policy evaluation.
///
/// Created once per evaluation and forwarded to the audit hook; the core
/// never persists it.  `allowed` always agrees with `reason.permits()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    pub reason: ReasonCode,
    /// Absent only for `Unauthenticated` decisions.
    pub principal_id: Option<PrincipalId>,
    pub resource: ResourceType,
    pub action: Action,
    /// Present iff the request carried an object snapshot.
    pub object_id: Option<Uuid>,
    /// Wall-clock time (UTC) the decision was made.
    pub timestamp: DateTime<Utc>,
}

/// Everything the evaluator needs for one decision.
///
/// Built by the hosting layer from the session, the route, and (for
/// object-level checks) a projection of the target object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    /// `None` when no authenticated session was presented.
    pub principal: Option<PrincipalSnapshot>,
    pub resource: ResourceType,
    pub action: Action,
    /// Present for object-level checks; collection checks omit it.
    pub object: Option<ObjectSnapshot>,
}
