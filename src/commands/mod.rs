//! Command handler layer.
//!
//! This module owns process-level orchestration and output wiring.
//!
//! ## Files
//! - `run.rs` — background check task, signal fan-in, result output and notification.
//!
//! ## Principles
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod run;

pub use run::handle_run;
