//! Git object types used by the history walker.

use chrono::{DateTime, Utc};

const SHORT_HASH_LENGTH: usize = 7;

/// Wrapper around a raw git object ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(super) gix::ObjectId);

impl ObjectId {
    pub(super) fn from_raw(oid: gix::ObjectId) -> Self {
        Self(oid)
    }

    pub(super) fn into_raw(self) -> gix::ObjectId {
        self.0
    }
}

/// Read-only metadata for one commit in the traversal.
#[derive(Debug, Clone)]
pub struct CommitRef {
    /// Full hex hash.
    pub hash: String,
    /// Abbreviated hash (first 7 characters).
    pub short_hash: String,
    /// Author name from the commit signature.
    pub author_name: String,
    /// Commit timestamp in UTC.
    pub committed_at: DateTime<Utc>,
    /// Parent commit IDs in declaration order; the first parent is the
    /// diff base for everything but root commits.
    pub parents: Vec<ObjectId>,
}

impl CommitRef {
    pub(super) fn from_gix_commit(commit: &gix::Commit<'_>) -> Self {
        let hash = commit.id().to_string();
        let short_hash = hash.get(..SHORT_HASH_LENGTH).unwrap_or(&hash).to_string();

        let author_name = commit
            .author()
            .map_or_else(|_| "unknown".to_string(), |sig| sig.name.to_string());

        let committed_at = commit
            .time()
            .ok()
            .and_then(|t| DateTime::from_timestamp(t.seconds, 0))
            .unwrap_or_default();

        let parents = commit.parent_ids().map(|id| ObjectId::from_raw(id.detach())).collect();

        Self {
            hash,
            short_hash,
            author_name,
            committed_at,
            parents,
        }
    }
}

/// One file entry from a commit's diff against its base tree.
///
/// Ephemeral; exists only while the owning commit is being processed.
#[derive(Debug, Clone)]
pub struct DiffEntry {
    /// Path of the file within the repository.
    pub path: String,
    /// Whether the file was deleted by this commit. Deleted entries carry
    /// an empty patch and are never scanned.
    pub is_deleted: bool,
    /// Unified-diff text for this file, including the `---`/`+++` headers.
    pub patch: String,
}

impl DiffEntry {
    /// Lines newly added by this entry's patch, with the leading `+`
    /// marker stripped.
    ///
    /// A line qualifies when it starts with a single `+`; the `+++` file
    /// header also starts with `+` and is explicitly excluded.
    pub fn added_lines(&self) -> impl Iterator<Item = &str> {
        self.patch
            .lines()
            .filter(|line| line.starts_with('+') && !line.starts_with("+++"))
            .map(|line| &line[1..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(patch: &str) -> DiffEntry {
        DiffEntry {
            path: "config.env".to_string(),
            is_deleted: false,
            patch: patch.to_string(),
        }
    }

    #[test]
    fn added_lines_strips_the_marker() {
        let e = entry("--- a/config.env\n+++ b/config.env\n@@ -0,0 +1,2 @@\n+first\n+second\n");
        let lines: Vec<&str> = e.added_lines().collect();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn added_lines_excludes_the_file_header() {
        let e = entry("+++ b/config.env\n+real line\n");
        let lines: Vec<&str> = e.added_lines().collect();
        assert_eq!(lines, vec!["real line"]);
    }

    #[test]
    fn added_lines_ignores_context_and_removals() {
        let e = entry("@@ -1,3 +1,3 @@\n context\n-removed\n+added\n context\n");
        let lines: Vec<&str> = e.added_lines().collect();
        assert_eq!(lines, vec!["added"]);
    }
}
