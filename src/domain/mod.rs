//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the player record and report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — player record, config, report/output structs.
//! - `constants.rs` — stable constants (default paths, issue labels).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and the dataset
//! written back by `apply-stats`. Keep schema-impacting changes explicit and
//! synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
