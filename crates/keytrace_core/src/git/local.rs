//! Thread-local git repository operations.

use gix::bstr::ByteSlice as _;
use similar::TextDiff;

use super::types::{CommitRef, DiffEntry, ObjectId};
use crate::error::ScanError;

/// Unchanged context lines rendered around each hunk in generated patches.
const DIFF_CONTEXT_RADIUS: usize = 3;

/// Non-`Send` repository handle for single-threaded git operations.
///
/// Obtained from [`super::Repo::local`]; create one per worker rather than
/// sharing across threads.
#[derive(Debug)]
pub struct LocalRepo {
    pub(super) inner: gix::Repository,
}

/// A file-level change collected from a tree diff, before blob contents
/// are loaded.
struct RawChange {
    path: String,
    kind: ChangeKind,
}

enum ChangeKind {
    Deleted,
    Changed {
        old: Option<gix::ObjectId>,
        new: gix::ObjectId,
    },
}

impl LocalRepo {
    /// Collects every commit reachable from `HEAD`, newest first.
    ///
    /// An unborn `HEAD` (empty repository) yields an empty list rather than
    /// an error. Any failure while walking the commit graph aborts the scan.
    #[expect(
        clippy::default_trait_access,
        reason = "CommitTimeOrder is a private type in gix; cannot name it explicitly"
    )]
    pub fn collect_commits(&self) -> Result<Vec<ObjectId>, ScanError> {
        let Ok(head) = self.inner.head_id() else {
            return Ok(Vec::new());
        };

        let walk = self
            .inner
            .rev_walk([head.detach()])
            .sorting(gix::revision::walk::Sorting::ByCommitTime(Default::default()));

        let mut commits = Vec::new();
        for info in walk.all().map_err(traversal_error)? {
            let info = info.map_err(traversal_error)?;
            commits.push(ObjectId::from_raw(info.id));
        }

        Ok(commits)
    }

    /// Extracts metadata for the given commit.
    pub fn commit_ref(&self, oid: ObjectId) -> Result<CommitRef, ScanError> {
        let commit = self.inner.find_commit(oid.into_raw()).map_err(traversal_error)?;
        Ok(CommitRef::from_gix_commit(&commit))
    }

    /// Diffs `oid` against `base` and renders one unified-diff entry per
    /// changed file.
    ///
    /// `base` is the commit's first parent; `None` diffs against the empty
    /// tree so that every line of a root commit counts as added. Entries
    /// whose blob content is not valid UTF-8 are silently skipped; failures
    /// to access the trees themselves abort the scan.
    pub fn commit_changes(&self, oid: ObjectId, base: Option<ObjectId>) -> Result<Vec<DiffEntry>, ScanError> {
        let commit = self.inner.find_commit(oid.into_raw()).map_err(traversal_error)?;
        let to_tree = commit.tree().map_err(traversal_error)?;

        let from_tree = match base {
            Some(parent) => self
                .inner
                .find_commit(parent.into_raw())
                .map_err(traversal_error)?
                .tree()
                .map_err(traversal_error)?,
            None => self.inner.empty_tree(),
        };

        let raw = Self::collect_changes(&from_tree, &to_tree)?;
        Ok(raw.into_iter().filter_map(|change| self.render_entry(change)).collect())
    }

    fn collect_changes(from: &gix::Tree<'_>, to: &gix::Tree<'_>) -> Result<Vec<RawChange>, ScanError> {
        let mut platform = from.changes().map_err(traversal_error)?;
        let mut raw = Vec::new();

        platform
            .for_each_to_obtain_tree(to, |change| {
                use gix::object::tree::diff::Change;

                match change {
                    Change::Addition { location, id, .. } => raw.push(RawChange {
                        path: location.to_str_lossy().into_owned(),
                        kind: ChangeKind::Changed {
                            old: None,
                            new: id.detach(),
                        },
                    }),
                    Change::Modification {
                        location,
                        previous_id,
                        id,
                        ..
                    } => raw.push(RawChange {
                        path: location.to_str_lossy().into_owned(),
                        kind: ChangeKind::Changed {
                            old: Some(previous_id.detach()),
                            new: id.detach(),
                        },
                    }),
                    Change::Rewrite {
                        location, source_id, id, ..
                    } => raw.push(RawChange {
                        path: location.to_str_lossy().into_owned(),
                        kind: ChangeKind::Changed {
                            old: Some(source_id.detach()),
                            new: id.detach(),
                        },
                    }),
                    Change::Deletion { location, .. } => raw.push(RawChange {
                        path: location.to_str_lossy().into_owned(),
                        kind: ChangeKind::Deleted,
                    }),
                }

                Ok::<_, std::convert::Infallible>(std::ops::ControlFlow::Continue(()))
            })
            .map_err(traversal_error)?;

        Ok(raw)
    }

    /// Loads blob contents and renders the unified-diff text for one change.
    /// Returns `None` when either side cannot be decoded as UTF-8 text.
    fn render_entry(&self, change: RawChange) -> Option<DiffEntry> {
        match change.kind {
            ChangeKind::Deleted => Some(DiffEntry {
                path: change.path,
                is_deleted: true,
                patch: String::new(),
            }),
            ChangeKind::Changed { old, new } => {
                let new_text = self.blob_text(new)?;
                let old_text = match old {
                    Some(oid) => self.blob_text(oid)?,
                    None => String::new(),
                };

                let patch = unified_patch(&old_text, &new_text, &change.path);
                Some(DiffEntry {
                    path: change.path,
                    is_deleted: false,
                    patch,
                })
            }
        }
    }

    fn blob_text(&self, oid: gix::ObjectId) -> Option<String> {
        let blob = self.inner.find_blob(oid).ok()?;
        String::from_utf8(blob.data.clone()).ok()
    }
}

fn unified_patch(old: &str, new: &str, path: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified
        .context_radius(DIFF_CONTEXT_RADIUS)
        .header(&format!("a/{path}"), &format!("b/{path}"));
    unified.to_string()
}

fn traversal_error(err: impl std::fmt::Display) -> ScanError {
    ScanError::Traversal(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unified_patch_marks_new_lines_as_added() {
        let patch = unified_patch("", "first\nsecond\n", "file.txt");

        assert!(patch.contains("+first"));
        assert!(patch.contains("+second"));
        assert!(patch.contains("+++ b/file.txt"));
    }

    #[test]
    fn unified_patch_only_adds_changed_lines() {
        let patch = unified_patch("keep\nold\n", "keep\nnew\n", "file.txt");

        assert!(patch.contains("-old"));
        assert!(patch.contains("+new"));
        assert!(!patch.contains("+keep"));
    }
}
