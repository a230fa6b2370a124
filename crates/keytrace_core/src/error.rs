use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when compiling a built-in detection pattern.
///
/// The catalog is static data, so any variant of this error is a programming
/// error: it can only surface at startup, before the first scan.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern's regular expression failed to compile.
    #[error("invalid regex in pattern '{name}': {source}")]
    InvalidRegex {
        /// Name of the pattern that failed (e.g. `"Stripe Live Key"`).
        name: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Errors that can occur when opening a repository for scanning.
///
/// These are configuration errors: they surface before any traversal begins
/// and reject the scan outright.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The path does not point at a valid git repository.
    #[error("not a valid git repository: {path}")]
    NotARepository {
        /// The path that was passed to [`crate::git::Repo::open`].
        path: PathBuf,
        /// The underlying `gix` open error.
        #[source]
        source: Box<gix::open::Error>,
    },

    /// The repository has no working directory.
    #[error("bare repositories are not supported: {path}")]
    Bare {
        /// The path that was passed to [`crate::git::Repo::open`].
        path: PathBuf,
    },
}

/// Errors surfaced while starting or driving a history scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan target could not be opened.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// Repository access failed mid-walk. The traversal is aborted; no
    /// `Completed` event is emitted and findings collected so far stand.
    #[error("history traversal failed: {0}")]
    Traversal(String),

    /// A scan was requested while another one is still running.
    #[error("a scan is already in progress")]
    AlreadyRunning,
}
