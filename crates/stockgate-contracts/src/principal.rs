//! Principal identity and permission-set types.
//!
//! A `PrincipalSnapshot` is the engine's entire view of the authenticated
//! actor: identity, role, bypass flags, and the flattened set of granted
//! permission codenames.  The identity layer resolves all of this before
//! calling the engine — the engine never queries a user or group store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Unique identifier for a principal.
///
/// Appears in every `Decision` and audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrincipalId(pub uuid::Uuid);

impl PrincipalId {
    /// Create a new, unique principal ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

/// The coarse role assigned to a principal.
///
/// Roles are descriptive only — every grant the engine honors arrives as a
/// codename in the principal's `PermissionSet`, already flattened from
/// whatever role/group assignment scheme the identity layer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

/// An opaque permission codename.
///
/// Codenames are namespaced as `<app>.<verb>_<resource>`:
/// e.g. "inventory.view_product", "inventory.adjust_stock",
/// "orders.change_purchaseorder".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Codename(pub String);

impl Codename {
    /// Construct a codename from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// The full set of codenames granted to a principal.
///
/// Constructed by the identity layer and passed to the evaluator inside a
/// `PrincipalSnapshot`.  The evaluator only ever reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    inner: HashSet<Codename>,
}

impl PermissionSet {
    /// Grant a codename to this set.
    pub fn grant(&mut self, codename: Codename) {
        self.inner.insert(codename);
    }

    /// Return true if the set contains the given codename.
    pub fn has(&self, codename: &Codename) -> bool {
        self.inner.contains(codename)
    }

    /// Return an iterator over all granted codenames.
    pub fn all(&self) -> impl Iterator<Item = &Codename> {
        self.inner.iter()
    }
}

impl FromIterator<Codename> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Codename>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

/// Immutable snapshot of the authenticated actor for one decision.
///
/// `is_superuser` short-circuits every check; `is_staff` is carried for
/// callers that gate collection writes on staff status.  Neither flag is
/// ever elevated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalSnapshot {
    pub id: PrincipalId,
    pub role: Role,
    pub is_superuser: bool,
    pub is_staff: bool,
    /// Flattened grants, resolved by the identity layer.
    pub granted: PermissionSet,
}

impl PrincipalSnapshot {
    /// A principal with the given role, no bypass flags, and no grants.
    ///
    /// Grant codenames via `granted.grant(...)` afterwards.
    pub fn with_role(role: Role) -> Self {
        Self {
            id: PrincipalId::new(),
            role,
            is_superuser: false,
            is_staff: false,
            granted: PermissionSet::default(),
        }
    }

    /// A superuser principal.  Always allowed, regardless of grants.
    pub fn superuser() -> Self {
        Self {
            id: PrincipalId::new(),
            role: Role::Admin,
            is_superuser: true,
            is_staff: true,
            granted: PermissionSet::default(),
        }
    }
}
