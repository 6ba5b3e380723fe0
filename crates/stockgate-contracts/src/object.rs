//! Object state snapshots consumed by the workflow guard.
//!
//! An `ObjectSnapshot` is a minimal projection of a stored object: only the
//! fields the workflow preconditions read (status enums and, for order
//! items, the parent order's status).  The persistence layer builds these —
//! the engine never queries storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::ResourceType;

/// Lifecycle state of a low-stock alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Open,
    Resolved,
}

/// Lifecycle state of a stock transaction.
///
/// Only `Pending` transactions can be edited or approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
}

/// Lifecycle state of a purchase order.
///
/// Line items are editable only while the parent order is `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Submitted,
    Received,
    Cancelled,
}

/// A per-resource projection of the target object's state.
///
/// One variant per `ResourceType`.  Products carry no workflow state, so
/// their variant is just the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resource", rename_all = "snake_case")]
pub enum ObjectSnapshot {
    Product {
        id: Uuid,
    },
    StockTransaction {
        id: Uuid,
        status: TransactionStatus,
    },
    LowStockAlert {
        id: Uuid,
        status: AlertStatus,
    },
    PurchaseOrder {
        id: Uuid,
        status: OrderStatus,
    },
    PurchaseOrderItem {
        id: Uuid,
        /// Status of the parent purchase order, resolved by the caller.
        order_status: OrderStatus,
    },
}

impl ObjectSnapshot {
    /// The resource type this snapshot belongs to.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            ObjectSnapshot::Product { .. } => ResourceType::Product,
            ObjectSnapshot::StockTransaction { .. } => ResourceType::StockTransaction,
            ObjectSnapshot::LowStockAlert { .. } => ResourceType::LowStockAlert,
            ObjectSnapshot::PurchaseOrder { .. } => ResourceType::PurchaseOrder,
            ObjectSnapshot::PurchaseOrderItem { .. } => ResourceType::PurchaseOrderItem,
        }
    }

    /// The stored object's id.
    pub fn object_id(&self) -> Uuid {
        match self {
            ObjectSnapshot::Product { id }
            | ObjectSnapshot::StockTransaction { id, .. }
            | ObjectSnapshot::LowStockAlert { id, .. }
            | ObjectSnapshot::PurchaseOrder { id, .. }
            | ObjectSnapshot::PurchaseOrderItem { id, .. } => *id,
        }
    }
}
