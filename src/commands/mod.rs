//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `audit.rs` — read-only checks, lookup and the summary.
//! - `maintenance.rs` — commands that rewrite the dataset.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod audit;
pub mod maintenance;

pub use audit::handle_audit_commands;
pub use maintenance::handle_maintenance_commands;
