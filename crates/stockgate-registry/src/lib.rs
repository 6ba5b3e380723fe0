//! # stockgate-registry
//!
//! The compiled permission registry for the STOCKGATE decision engine.
//!
//! ## Overview
//!
//! This crate answers exactly one question: which codename must a principal
//! hold to perform an action on a resource, at the collection level and at
//! the object level?  The mapping is a fixed table in [`table`] — there is
//! no policy DSL, no rule file, and no runtime mutation.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use stockgate_registry::{object_requirement, Requirement};
//! use stockgate_contracts::resource::{Action, ResourceType};
//!
//! let req = object_requirement(ResourceType::Product, Action::AdjustStock)?;
//! // req == Requirement::Codename("inventory.adjust_stock")
//! ```
//!
//! ## Registry gaps
//!
//! A pair with no row returns `Err(GateError::UnknownAction)`.  That is a
//! configuration defect: the tests below enumerate every registered row so
//! a gap shows up here, not in production.

pub mod table;

pub use table::{collection_requirement, object_requirement, Requirement};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use stockgate_contracts::{
        error::GateError,
        principal::Codename,
        resource::{Action, ResourceType},
    };

    use crate::{collection_requirement, object_requirement, Requirement};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Assert the lookup produced a codename requirement with this name.
    fn assert_codename(result: Result<Requirement, GateError>, expected: &str) {
        match result {
            Ok(Requirement::Codename(codename)) => {
                assert_eq!(codename, Codename::new(expected));
            }
            other => panic!("expected codename '{}', got {:?}", expected, other),
        }
    }

    /// Assert the lookup produced the collection-level unrestricted residual.
    fn assert_unrestricted(result: Result<Requirement, GateError>) {
        match result {
            Ok(Requirement::Unrestricted) => {}
            other => panic!("expected Unrestricted, got {:?}", other),
        }
    }

    /// Assert the lookup surfaced a registry gap.
    fn assert_unknown(result: Result<Requirement, GateError>) {
        match result {
            Err(GateError::UnknownAction { .. }) => {}
            other => panic!("expected UnknownAction, got {:?}", other),
        }
    }

    // ── 1. safe actions use view codenames at both scopes ────────────────────

    #[test]
    fn safe_actions_require_view_codename() {
        let expectations = [
            (ResourceType::Product, "inventory.view_product"),
            (ResourceType::StockTransaction, "inventory.view_stocktransaction"),
            (ResourceType::LowStockAlert, "inventory.view_low_stock_alert"),
            (ResourceType::PurchaseOrder, "orders.view_purchaseorder"),
            (ResourceType::PurchaseOrderItem, "orders.view_purchaseorderitem"),
        ];

        for (resource, codename) in expectations {
            for action in [Action::List, Action::View] {
                assert_codename(collection_requirement(resource, action), codename);
                assert_codename(object_requirement(resource, action), codename);
            }
        }
    }

    // ── 2. product rows ───────────────────────────────────────────────────────

    #[test]
    fn product_create_requires_add_codename() {
        assert_codename(
            collection_requirement(ResourceType::Product, Action::Create),
            "inventory.add_product",
        );
    }

    #[test]
    fn product_writes_require_change_codename_at_object_level() {
        for action in [Action::Update, Action::PartialUpdate, Action::Destroy] {
            assert_codename(
                object_requirement(ResourceType::Product, action),
                "inventory.change_product",
            );
            // The collection row defers to the object check.
            assert_unrestricted(collection_requirement(ResourceType::Product, action));
        }
    }

    #[test]
    fn product_custom_actions_have_dedicated_codenames() {
        assert_codename(
            object_requirement(ResourceType::Product, Action::AdjustStock),
            "inventory.adjust_stock",
        );
        assert_codename(
            object_requirement(ResourceType::Product, Action::Discontinue),
            "inventory.discontinue_product",
        );
        assert_codename(
            object_requirement(ResourceType::Product, Action::ViewCost),
            "inventory.view_cost_price",
        );
    }

    // ── 3. stock transaction rows ────────────────────────────────────────────

    #[test]
    fn transaction_create_requires_create_codename() {
        assert_codename(
            collection_requirement(ResourceType::StockTransaction, Action::Create),
            "inventory.create_stock_transaction",
        );
    }

    #[test]
    fn transaction_writes_and_approve_require_approve_codename() {
        // Destroy included: deleting a transaction is gated by the approve
        // codename, not a change codename.
        for action in [
            Action::Update,
            Action::PartialUpdate,
            Action::Destroy,
            Action::Approve,
        ] {
            assert_codename(
                object_requirement(ResourceType::StockTransaction, action),
                "inventory.approve_stock_transaction",
            );
            assert_unrestricted(collection_requirement(ResourceType::StockTransaction, action));
        }
    }

    // ── 4. low-stock alert rows ──────────────────────────────────────────────

    #[test]
    fn alert_resolve_requires_resolve_codename_at_both_scopes() {
        assert_codename(
            collection_requirement(ResourceType::LowStockAlert, Action::Resolve),
            "inventory.resolve_low_stock_alert",
        );
        assert_codename(
            object_requirement(ResourceType::LowStockAlert, Action::Resolve),
            "inventory.resolve_low_stock_alert",
        );
    }

    #[test]
    fn alert_destroy_shares_the_resolve_codename() {
        assert_codename(
            object_requirement(ResourceType::LowStockAlert, Action::Destroy),
            "inventory.resolve_low_stock_alert",
        );
    }

    // ── 5. purchase order rows ───────────────────────────────────────────────

    #[test]
    fn purchase_order_rows() {
        assert_codename(
            collection_requirement(ResourceType::PurchaseOrder, Action::Create),
            "orders.add_purchaseorder",
        );
        for action in [Action::Update, Action::PartialUpdate, Action::Destroy] {
            assert_codename(
                object_requirement(ResourceType::PurchaseOrder, action),
                "orders.change_purchaseorder",
            );
            assert_unrestricted(collection_requirement(ResourceType::PurchaseOrder, action));
        }
    }

    #[test]
    fn purchase_order_item_rows() {
        assert_codename(
            collection_requirement(ResourceType::PurchaseOrderItem, Action::Create),
            "orders.add_purchaseorderitem",
        );
        for action in [Action::Update, Action::PartialUpdate, Action::Destroy] {
            assert_codename(
                object_requirement(ResourceType::PurchaseOrderItem, action),
                "orders.change_purchaseorderitem",
            );
            assert_unrestricted(collection_requirement(ResourceType::PurchaseOrderItem, action));
        }
    }

    // ── 6. registry gaps surface loudly ──────────────────────────────────────

    /// Alerts are raised by the system; principals can never create one.
    #[test]
    fn alert_create_is_unregistered() {
        assert_unknown(collection_requirement(ResourceType::LowStockAlert, Action::Create));
        assert_unknown(object_requirement(ResourceType::LowStockAlert, Action::Create));
    }

    /// Deleting an alert is only meaningful against a concrete object; the
    /// collection scope has no row for it.
    #[test]
    fn alert_destroy_is_unregistered_at_collection_level() {
        assert_unknown(collection_requirement(ResourceType::LowStockAlert, Action::Destroy));
    }

    /// Custom actions do not leak across resources.
    #[test]
    fn custom_actions_are_scoped_to_their_resource() {
        assert_unknown(object_requirement(ResourceType::Product, Action::Resolve));
        assert_unknown(object_requirement(ResourceType::Product, Action::Approve));
        assert_unknown(object_requirement(ResourceType::StockTransaction, Action::AdjustStock));
        assert_unknown(object_requirement(ResourceType::StockTransaction, Action::Resolve));
        assert_unknown(object_requirement(ResourceType::LowStockAlert, Action::Approve));
        assert_unknown(object_requirement(ResourceType::PurchaseOrder, Action::AdjustStock));
        assert_unknown(object_requirement(ResourceType::PurchaseOrderItem, Action::ViewCost));
    }

    /// The error names the offending pair so the gap is diagnosable.
    #[test]
    fn unknown_action_error_names_the_pair() {
        let err = collection_requirement(ResourceType::LowStockAlert, Action::Create).unwrap_err();
        match err {
            GateError::UnknownAction { resource, action } => {
                assert_eq!(resource, ResourceType::LowStockAlert);
                assert_eq!(action, Action::Create);
            }
            other => panic!("expected UnknownAction, got {:?}", other),
        }
    }
}
