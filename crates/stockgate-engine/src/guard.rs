//! Workflow-state preconditions for state-sensitive actions.
//!
//! A precondition constrains the *object*, not the principal: it is
//! consulted only after the permission check has passed, so a failure here
//! always means "permitted, but the object cannot transition from its
//! current state" — never "you lack permission".

use stockgate_contracts::{
    object::{AlertStatus, ObjectSnapshot, OrderStatus, TransactionStatus},
    resource::Action,
};

/// Return true when `object` is in a state from which `action` may proceed.
///
/// Gated pairs:
/// - resolving a low-stock alert requires it to still be open
/// - editing or approving a stock transaction requires it to be pending
/// - editing a purchase order line requires the parent order to be a draft
///
/// Every other (action, object) pair carries no precondition and passes.
pub fn precondition_holds(action: Action, object: &ObjectSnapshot) -> bool {
    match (action, object) {
        (Action::Resolve, ObjectSnapshot::LowStockAlert { status, .. }) => {
            *status == AlertStatus::Open
        }

        (
            Action::Approve | Action::Update | Action::PartialUpdate,
            ObjectSnapshot::StockTransaction { status, .. },
        ) => *status == TransactionStatus::Pending,

        (
            Action::Update | Action::PartialUpdate,
            ObjectSnapshot::PurchaseOrderItem { order_status, .. },
        ) => *order_status == OrderStatus::Draft,

        _ => true,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use stockgate_contracts::{
        object::{AlertStatus, ObjectSnapshot, OrderStatus, TransactionStatus},
        resource::Action,
    };
    use uuid::Uuid;

    use super::precondition_holds;

    fn alert(status: AlertStatus) -> ObjectSnapshot {
        ObjectSnapshot::LowStockAlert {
            id: Uuid::new_v4(),
            status,
        }
    }

    fn transaction(status: TransactionStatus) -> ObjectSnapshot {
        ObjectSnapshot::StockTransaction {
            id: Uuid::new_v4(),
            status,
        }
    }

    fn order_item(order_status: OrderStatus) -> ObjectSnapshot {
        ObjectSnapshot::PurchaseOrderItem {
            id: Uuid::new_v4(),
            order_status,
        }
    }

    #[test]
    fn resolve_requires_open_alert() {
        assert!(precondition_holds(Action::Resolve, &alert(AlertStatus::Open)));
        assert!(!precondition_holds(Action::Resolve, &alert(AlertStatus::Resolved)));
    }

    /// Deleting an alert has no state precondition — resolved alerts can
    /// still be cleaned up.
    #[test]
    fn alert_destroy_is_not_state_gated() {
        assert!(precondition_holds(Action::Destroy, &alert(AlertStatus::Resolved)));
    }

    #[test]
    fn transaction_edits_require_pending_status() {
        for action in [Action::Approve, Action::Update, Action::PartialUpdate] {
            assert!(precondition_holds(action, &transaction(TransactionStatus::Pending)));
            assert!(!precondition_holds(action, &transaction(TransactionStatus::Approved)));
            assert!(!precondition_holds(action, &transaction(TransactionStatus::Rejected)));
        }
    }

    /// Destroy on a transaction is permission-gated only.
    #[test]
    fn transaction_destroy_is_not_state_gated() {
        assert!(precondition_holds(Action::Destroy, &transaction(TransactionStatus::Approved)));
    }

    #[test]
    fn order_item_edits_require_draft_parent() {
        for action in [Action::Update, Action::PartialUpdate] {
            assert!(precondition_holds(action, &order_item(OrderStatus::Draft)));
            assert!(!precondition_holds(action, &order_item(OrderStatus::Submitted)));
            assert!(!precondition_holds(action, &order_item(OrderStatus::Received)));
            assert!(!precondition_holds(action, &order_item(OrderStatus::Cancelled)));
        }
    }

    #[test]
    fn reads_are_never_state_gated() {
        assert!(precondition_holds(Action::View, &alert(AlertStatus::Resolved)));
        assert!(precondition_holds(Action::View, &transaction(TransactionStatus::Rejected)));
        assert!(precondition_holds(Action::View, &order_item(OrderStatus::Cancelled)));
    }

    #[test]
    fn products_carry_no_preconditions() {
        let product = ObjectSnapshot::Product { id: Uuid::new_v4() };
        for action in [
            Action::Update,
            Action::Destroy,
            Action::AdjustStock,
            Action::Discontinue,
            Action::ViewCost,
        ] {
            assert!(precondition_holds(action, &product));
        }
    }
}
