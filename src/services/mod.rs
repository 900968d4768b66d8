//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `checks.rs` — the four core dataset invariants.
//! - `consistency.rs` — per-player consistency issues and their summary.
//! - `franchise.rs` — relocated-team mapping and franchise overlap detection.
//! - `index.rs` — id/name lookup indexes, player lookup, known-active check.
//! - `summary.rs` — `check` report assembly.
//! - `batch.rs` — verified stat batch application.
//! - `storage.rs` — dataset load/save, fingerprint, audit log.
//! - `config.rs` — config file and dataset path resolution.
//! - `telemetry.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Checks are pure functions over `&[PlayerRecord]`.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod batch;
pub mod checks;
pub mod config;
pub mod consistency;
pub mod franchise;
pub mod index;
pub mod output;
pub mod storage;
pub mod summary;
pub mod telemetry;
