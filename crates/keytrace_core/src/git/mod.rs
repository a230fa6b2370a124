//! Repository access for history scanning.

mod local;
mod types;

use std::path::Path;

use gix::ThreadSafeRepository;

pub use self::local::LocalRepo;
pub use self::types::{CommitRef, DiffEntry, ObjectId};
use crate::error::RepoError;

/// Default object cache size for tree diffs (64 MB).
const DEFAULT_CACHE_SIZE: usize = 64 * 1024 * 1024;

/// Thread-safe handle to an opened, non-bare git repository.
///
/// Cheap to move across threads; actual git operations go through a
/// [`LocalRepo`] obtained from [`Repo::local`]. The underlying object
/// database handle is released when the last clone of the handle drops,
/// on every exit path.
#[derive(Debug)]
pub struct Repo {
    inner: ThreadSafeRepository,
    /// Object cache size computed from the repository index.
    cache_size: usize,
}

impl Repo {
    /// Opens the repository at `path`.
    ///
    /// Fails with [`RepoError::NotARepository`] if the path is not a valid
    /// git repository and with [`RepoError::Bare`] if it has no working
    /// directory. The repository is never mutated by any scan operation.
    pub fn open(path: &Path) -> Result<Self, RepoError> {
        let mut repo = gix::open(path).map_err(|source| RepoError::NotARepository {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;

        if repo.workdir().is_none() {
            return Err(RepoError::Bare {
                path: path.to_path_buf(),
            });
        }

        let cache_size = compute_cache_size(&repo);
        repo.object_cache_size_if_unset(cache_size);

        Ok(Self {
            inner: repo.into_sync(),
            cache_size,
        })
    }

    /// Creates a thread-local handle for single-threaded git operations.
    #[must_use]
    pub fn local(&self) -> LocalRepo {
        let mut repo = self.inner.to_thread_local();
        repo.object_cache_size_if_unset(self.cache_size);
        LocalRepo { inner: repo }
    }
}

fn compute_cache_size(repo: &gix::Repository) -> usize {
    repo.index_or_empty()
        .map(|idx| repo.compute_object_cache_size_for_tree_diffs(&idx))
        .unwrap_or(DEFAULT_CACHE_SIZE)
}
