//! # stockgate-contracts
//!
//! Shared types and error definitions for the STOCKGATE decision engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod decision;
pub mod error;
pub mod object;
pub mod principal;
pub mod resource;
