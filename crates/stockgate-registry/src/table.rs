//! The compiled permission table.
//!
//! One row per (resource, action) pair per check scope.  The table is fixed
//! at compile time — adding a resource is a data change here, not a new
//! permission type.  There is no hot-reload and no policy file: lookups are
//! pure matches over `'static` data and are safe to call from any number of
//! threads.
//!
//! Two scopes mirror the collection-level / object-level split of the HTTP
//! layer:
//!
//! - A **collection** check runs when no target object is supplied
//!   (list, create).  Write verbs that only make sense against a concrete
//!   object are `Unrestricted` here — the object-level row is the real gate.
//! - An **object** check runs when the caller supplies a snapshot of the
//!   target.  The required codename may differ from the collection row for
//!   the same verb.
//!
//! A pair with no row in either lookup is a configuration defect and
//! surfaces as `GateError::UnknownAction` — loudly, never as a silent deny.

use stockgate_contracts::{
    error::{GateError, GateResult},
    principal::Codename,
    resource::{Action, ResourceType},
};

/// What a registry row demands at one check scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// The principal must hold this codename.
    Codename(Codename),
    /// No codename check at this scope; the object-level row is the gate.
    Unrestricted,
}

fn require(name: &str) -> GateResult<Requirement> {
    Ok(Requirement::Codename(Codename::new(name)))
}

/// The `view_*` codename for each resource.
///
/// Safe actions (List, View) use this at both scopes.
fn view_codename(resource: ResourceType) -> &'static str {
    match resource {
        ResourceType::Product => "inventory.view_product",
        ResourceType::StockTransaction => "inventory.view_stocktransaction",
        ResourceType::LowStockAlert => "inventory.view_low_stock_alert",
        ResourceType::PurchaseOrder => "orders.view_purchaseorder",
        ResourceType::PurchaseOrderItem => "orders.view_purchaseorderitem",
    }
}

/// Collection-level requirement for (resource, action).
///
/// Returns `Err(UnknownAction)` for pairs with no registered rule, e.g.
/// `Create` on `LowStockAlert` — alerts are raised by the system, never by
/// principals.
pub fn collection_requirement(
    resource: ResourceType,
    action: Action,
) -> GateResult<Requirement> {
    use Action::*;
    use ResourceType::*;

    if action.is_safe() {
        return require(view_codename(resource));
    }

    match (resource, action) {
        (Product, Create) => require("inventory.add_product"),
        (Product, Update | PartialUpdate | Destroy | AdjustStock | Discontinue | ViewCost) => {
            Ok(Requirement::Unrestricted)
        }

        (StockTransaction, Create) => require("inventory.create_stock_transaction"),
        (StockTransaction, Update | PartialUpdate | Destroy | Approve) => {
            Ok(Requirement::Unrestricted)
        }

        (LowStockAlert, Resolve) => require("inventory.resolve_low_stock_alert"),

        (PurchaseOrder, Create) => require("orders.add_purchaseorder"),
        (PurchaseOrder, Update | PartialUpdate | Destroy) => Ok(Requirement::Unrestricted),

        (PurchaseOrderItem, Create) => require("orders.add_purchaseorderitem"),
        (PurchaseOrderItem, Update | PartialUpdate | Destroy) => Ok(Requirement::Unrestricted),

        _ => Err(GateError::UnknownAction { resource, action }),
    }
}

/// Object-level requirement for (resource, action).
///
/// This is where every write verb gets its real codename.  Note the
/// asymmetries the table preserves: deleting a stock transaction requires
/// the *approve* codename, and deleting a low-stock alert requires the
/// *resolve* codename.
pub fn object_requirement(resource: ResourceType, action: Action) -> GateResult<Requirement> {
    use Action::*;
    use ResourceType::*;

    if action.is_safe() {
        return require(view_codename(resource));
    }

    match (resource, action) {
        (Product, Update | PartialUpdate | Destroy) => require("inventory.change_product"),
        (Product, AdjustStock) => require("inventory.adjust_stock"),
        (Product, Discontinue) => require("inventory.discontinue_product"),
        (Product, ViewCost) => require("inventory.view_cost_price"),

        (StockTransaction, Update | PartialUpdate | Destroy | Approve) => {
            require("inventory.approve_stock_transaction")
        }

        (LowStockAlert, Resolve | Destroy) => require("inventory.resolve_low_stock_alert"),

        (PurchaseOrder, Update | PartialUpdate | Destroy) => require("orders.change_purchaseorder"),

        (PurchaseOrderItem, Update | PartialUpdate | Destroy) => {
            require("orders.change_purchaseorderitem")
        }

        _ => Err(GateError::UnknownAction { resource, action }),
    }
}
