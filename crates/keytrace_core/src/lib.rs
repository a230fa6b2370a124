//! Core history-scanning engine for keytrace.
//!
//! This crate finds secrets (API keys, tokens, private-key material) that
//! were ever introduced into a git repository by inspecting the lines each
//! commit added relative to its first parent.
//!
//! # Main Types
//!
//! - [`PatternCatalog`] - The built-in signature catalog, compiled once
//! - [`LineScanner`] - Classifies a single line of text against the catalog
//! - [`HistoryScan`] - Walks every commit and streams ordered scan events
//! - [`ScanRunner`] - Runs one scan at a time on a worker thread and
//!   publishes poll-safe state
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on:
//!
//! - [`PatternError`] - A built-in signature failed to compile (fatal at
//!   startup, never reachable afterwards)
//! - [`RepoError`] - The scan target is not a usable repository
//! - [`ScanError`] - A traversal aborted or a concurrent scan was rejected
//!
//! The CLI crate (`keytrace_cli`) uses `anyhow` for error propagation.

/// Error types for pattern compilation, repository access, and scan runs.
pub mod error;
/// Repository access built on `gix`.
pub mod git;
/// The history walker and the ordered scan event stream.
pub mod history;
/// The built-in signature catalog.
pub mod pattern;
/// Common re-exports for internal use.
pub mod prelude;
/// Background scan execution with poll-safe run state.
pub mod runner;
/// Line-level secret matching.
pub mod scanner;

pub use error::{PatternError, RepoError, ScanError};
pub use git::{CommitRef, DiffEntry, Repo};
pub use history::{Finding, HistoryScan, ScanEvent, ScanProgress};
pub use pattern::{Pattern, PatternCatalog};
pub use runner::{ScanRunner, ScanStatus};
pub use scanner::{LineScanner, SecretMatch};
