//! Convenience re-exports of the most commonly used types.

pub use crate::error::{PatternError, RepoError, ScanError};
pub use crate::git::{CommitRef, DiffEntry, Repo};
pub use crate::history::{Finding, HistoryScan, ScanEvent, ScanProgress};
pub use crate::pattern::{Pattern, PatternCatalog};
pub use crate::runner::{ScanRunner, ScanStatus};
pub use crate::scanner::{LineScanner, SecretMatch};
