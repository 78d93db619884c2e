//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — config, metadata record and result structs, layout constants.
//! - `error.rs` — fatal checker errors and notification errors.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `CheckResult` is the `--json` output payload. Keep schema-impacting
//! changes synchronized with `docs/contracts/*`.

pub mod error;
pub mod models;
