//! Service layer containing the consistency check and its collaborators.
//!
//! ## Service map
//! - `checker.rs` — run orchestration: root dirs, then collections newest first.
//! - `locator.rs` — date-windowed discovery of published collections.
//! - `metadata.rs` — collection metadata decoding + deletion accumulator.
//! - `validator.rs` — per-collection directory walk against master.
//! - `presence.rs` — existence checks that keep I/O errors distinct from "missing".
//! - `walk.rs` — pruning directory walk.
//! - `report.rs` — inconsistency list and final result.
//! - `clock.rs` — injectable current time.
//! - `notify.rs` — result notifiers (null, slack).
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - No global state: configuration and time are passed in.
//! - Fatal conditions are `CheckerError`; findings are inconsistencies.
//! - Keep command handlers thin; delegate to services.

pub mod checker;
pub mod clock;
pub mod locator;
pub mod metadata;
pub mod notify;
pub mod output;
pub mod presence;
pub mod report;
pub mod validator;
pub mod walk;
