//! Resource and action tags.
//!
//! These two enums span the engine's entire decision surface: every registry
//! row, workflow precondition, and decision is keyed on a
//! (`ResourceType`, `Action`) pair.

use serde::{Deserialize, Serialize};

/// The category of inventory entity being acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Product,
    StockTransaction,
    LowStockAlert,
    PurchaseOrder,
    PurchaseOrderItem,
}

/// The verb being requested.
///
/// `List` through `Destroy` are the standard collection/object verbs;
/// the rest are resource-specific custom actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    List,
    View,
    Create,
    Update,
    PartialUpdate,
    Destroy,
    /// Adjust a product's stock level (Product only).
    AdjustStock,
    /// Mark a product as discontinued (Product only).
    Discontinue,
    /// Reveal a product's cost price (Product only).
    ViewCost,
    /// Resolve a low-stock alert (LowStockAlert only).
    Resolve,
    /// Approve a pending stock transaction (StockTransaction only).
    Approve,
}

impl Action {
    /// Read-only actions are checked against the resource's `view_*`
    /// codename alone, bypassing every write-level codename.
    ///
    /// Note `ViewCost` is deliberately NOT safe: revealing cost prices is
    /// gated by its own codename even though it does not mutate anything.
    pub fn is_safe(self) -> bool {
        matches!(self, Action::List | Action::View)
    }

    /// Collection-scoped verbs are always checked against the collection
    /// row, even when a snapshot happens to be supplied.
    pub fn is_collection_scoped(self) -> bool {
        matches!(self, Action::List | Action::Create)
    }
}
