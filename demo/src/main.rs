//! STOCKGATE — Decision Engine Demo CLI
//!
//! Runs one or all of the authorization walkthroughs.  Each scenario uses
//! real STOCKGATE components (evaluator, channel hook, hash-chained sink)
//! against representative principals and object snapshots.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- staff-read-only
//!   cargo run -p demo -- alert-lifecycle
//!   cargo run -p demo -- transaction-approval
//!   cargo run -p demo -- superuser

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use stockgate_audit::{ChannelAuditHook, InMemoryAuditSink};
use stockgate_contracts::{
    decision::{AuthorizationRequest, Decision},
    object::{AlertStatus, ObjectSnapshot, TransactionStatus},
    principal::{Codename, PrincipalSnapshot, Role},
    resource::{Action, ResourceType},
};
use stockgate_engine::Evaluator;

// ── CLI definition ────────────────────────────────────────────────────────────

/// STOCKGATE — inventory authorization decision engine demo.
///
/// Each subcommand evaluates a batch of representative requests and prints
/// the decisions, then exports the audit trail and verifies chain integrity.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "STOCKGATE decision engine demo",
    long_about = "Runs STOCKGATE authorization walkthroughs showing superuser bypass,\n\
                  read/write codename splitting, workflow-state gating, and the\n\
                  hash-chained decision audit trail."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all scenarios in sequence.
    RunAll,
    /// Scenario 1: staff with a view-only grant (read allowed, writes denied).
    StaffReadOnly,
    /// Scenario 2: resolving an open and an already-resolved alert.
    AlertLifecycle,
    /// Scenario 3: approving pending and already-approved transactions.
    TransactionApproval,
    /// Scenario 4: superuser bypass across resources.
    Superuser,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    match cli.command {
        Command::RunAll => {
            run_staff_read_only();
            run_alert_lifecycle();
            run_transaction_approval();
            run_superuser();
        }
        Command::StaffReadOnly => run_staff_read_only(),
        Command::AlertLifecycle => run_alert_lifecycle(),
        Command::TransactionApproval => run_transaction_approval(),
        Command::Superuser => run_superuser(),
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

/// Staff holding only `inventory.view_product`: reads pass, every write on
/// the same resource is denied.
fn run_staff_read_only() {
    println!("Scenario: staff read-only");
    println!("-------------------------");

    let mut staff = PrincipalSnapshot::with_role(Role::Staff);
    staff.granted.grant(Codename::new("inventory.view_product"));

    let product = ObjectSnapshot::Product { id: Uuid::new_v4() };

    run_batch(vec![
        AuthorizationRequest {
            principal: Some(staff.clone()),
            resource: ResourceType::Product,
            action: Action::List,
            object: None,
        },
        AuthorizationRequest {
            principal: Some(staff.clone()),
            resource: ResourceType::Product,
            action: Action::Update,
            object: Some(product.clone()),
        },
        AuthorizationRequest {
            principal: Some(staff),
            resource: ResourceType::Product,
            action: Action::ViewCost,
            object: Some(product),
        },
        // No session at all.
        AuthorizationRequest {
            principal: None,
            resource: ResourceType::Product,
            action: Action::List,
            object: None,
        },
    ]);
}

/// A manager resolves an open alert, then tries the same on one that is
/// already resolved — permitted, but the state transition is invalid.
fn run_alert_lifecycle() {
    println!("Scenario: alert lifecycle");
    println!("-------------------------");

    let mut manager = PrincipalSnapshot::with_role(Role::Manager);
    manager.granted.grant(Codename::new("inventory.view_low_stock_alert"));
    manager.granted.grant(Codename::new("inventory.resolve_low_stock_alert"));

    run_batch(vec![
        AuthorizationRequest {
            principal: Some(manager.clone()),
            resource: ResourceType::LowStockAlert,
            action: Action::Resolve,
            object: Some(ObjectSnapshot::LowStockAlert {
                id: Uuid::new_v4(),
                status: AlertStatus::Open,
            }),
        },
        AuthorizationRequest {
            principal: Some(manager),
            resource: ResourceType::LowStockAlert,
            action: Action::Resolve,
            object: Some(ObjectSnapshot::LowStockAlert {
                id: Uuid::new_v4(),
                status: AlertStatus::Resolved,
            }),
        },
    ]);
}

/// Approving transactions: pending passes, already-approved is invalid
/// state, and a principal without the approve codename is plain forbidden.
fn run_transaction_approval() {
    println!("Scenario: transaction approval");
    println!("------------------------------");

    let mut approver = PrincipalSnapshot::with_role(Role::Manager);
    approver
        .granted
        .grant(Codename::new("inventory.approve_stock_transaction"));

    let clerk = PrincipalSnapshot::with_role(Role::Staff);

    run_batch(vec![
        AuthorizationRequest {
            principal: Some(approver.clone()),
            resource: ResourceType::StockTransaction,
            action: Action::Approve,
            object: Some(ObjectSnapshot::StockTransaction {
                id: Uuid::new_v4(),
                status: TransactionStatus::Pending,
            }),
        },
        AuthorizationRequest {
            principal: Some(approver),
            resource: ResourceType::StockTransaction,
            action: Action::Approve,
            object: Some(ObjectSnapshot::StockTransaction {
                id: Uuid::new_v4(),
                status: TransactionStatus::Approved,
            }),
        },
        AuthorizationRequest {
            principal: Some(clerk),
            resource: ResourceType::StockTransaction,
            action: Action::Approve,
            object: Some(ObjectSnapshot::StockTransaction {
                id: Uuid::new_v4(),
                status: TransactionStatus::Pending,
            }),
        },
    ]);
}

/// A superuser destroys anything, including objects in states that would
/// fail workflow preconditions for everyone else.
fn run_superuser() {
    println!("Scenario: superuser bypass");
    println!("--------------------------");

    let root = PrincipalSnapshot::superuser();

    run_batch(vec![
        AuthorizationRequest {
            principal: Some(root.clone()),
            resource: ResourceType::Product,
            action: Action::Destroy,
            object: Some(ObjectSnapshot::Product { id: Uuid::new_v4() }),
        },
        AuthorizationRequest {
            principal: Some(root.clone()),
            resource: ResourceType::LowStockAlert,
            action: Action::Resolve,
            object: Some(ObjectSnapshot::LowStockAlert {
                id: Uuid::new_v4(),
                status: AlertStatus::Resolved,
            }),
        },
        // Even an unregistered pair: the registry is never consulted.
        AuthorizationRequest {
            principal: Some(root),
            resource: ResourceType::LowStockAlert,
            action: Action::Create,
            object: None,
        },
    ]);
}

// ── Shared plumbing ───────────────────────────────────────────────────────────

/// Evaluate a batch through a hook-fronted hash-chained sink, print each
/// decision, then drain the hook and summarize the audit trail.
fn run_batch(requests: Vec<AuthorizationRequest>) {
    let sink = InMemoryAuditSink::new();
    let hook = ChannelAuditHook::spawn(Box::new(sink.clone()));
    let evaluator = Evaluator::with_sink(Box::new(hook));

    for request in &requests {
        let decision = evaluator.evaluate(request);
        print_decision(request, &decision);
    }

    // Dropping the evaluator drops the hook, which drains the queue and
    // joins the worker before returning.
    drop(evaluator);

    let trail = sink.export_trail();
    let intact = sink.verify_integrity();
    println!(
        "  audit: {} entries, chain intact: {}, terminal hash: {}…",
        trail.entries.len(),
        intact,
        &trail.terminal_hash[..12.min(trail.terminal_hash.len())]
    );
    println!();
}

fn print_decision(request: &AuthorizationRequest, decision: &Decision) {
    let verdict = if decision.allowed { "ALLOW" } else { "DENY " };
    let who = match &request.principal {
        Some(p) => format!("{:?}", p.role),
        None => "anonymous".to_string(),
    };
    println!(
        "  [{}] {} requesting {:?} on {:?} → {:?}",
        verdict, who, request.action, request.resource, decision.reason
    );
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("STOCKGATE — Inventory Authorization Engine");
    println!("==========================================");
    println!();
    println!("Decision order per request:");
    println!("  [1] Principal present? No → Unauthenticated");
    println!("  [2] Superuser bypass — before any codename lookup");
    println!("  [3] Registry lookup for the (resource, action) pair at this scope");
    println!("  [4] Codename check against the principal's granted set");
    println!("  [5] Workflow precondition — only after permission passed");
    println!("  [6] Decision recorded to the SHA-256 audit chain, fire-and-forget");
    println!();
}
