//! # stockgate-engine
//!
//! The stateless authorization evaluator for STOCKGATE.
//!
//! This crate provides:
//! - The [`Evaluator`], which turns an `AuthorizationRequest` into a
//!   `Decision` in a fixed order: principal → superuser bypass → registry
//!   lookup → codename check → workflow precondition
//! - The [`guard`] module holding the workflow-state preconditions
//! - The [`DecisionSink`] trait audit backends implement
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockgate_engine::Evaluator;
//!
//! let evaluator = Evaluator::with_sink(Box::new(sink));
//! let decision = evaluator.evaluate(&request);
//! if !decision.allowed {
//!     // map to 403; decision.reason goes to the log, not the client
//! }
//! ```

pub mod evaluator;
pub mod guard;
pub mod sink;

pub use evaluator::Evaluator;
pub use guard::precondition_holds;
pub use sink::DecisionSink;

// ── Tests ─────────────────────────────────────────────────────────────────────
