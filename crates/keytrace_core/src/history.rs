//! History traversal and the per-scan event stream.

use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::ScanError;
use crate::git::{CommitRef, LocalRepo, ObjectId, Repo};
use crate::scanner::LineScanner;

/// Path tokens that exclude a diff entry from scanning. Checked as plain
/// substrings of the full path, not as suffixes, so a token anywhere in the
/// path skips the entry.
const PATH_DENYLIST: [&str; 6] = ["package-lock.json", "yarn.lock", ".png", ".jpg", ".exe", ".dll"];

/// One confirmed secret introduction, with full provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Full hash of the commit that added the line.
    pub commit_hash: String,
    /// Author name from the commit signature.
    pub author: String,
    /// Commit timestamp in UTC.
    pub date: DateTime<Utc>,
    /// Path of the file the line was added to.
    pub file_path: String,
    /// Name of the matching catalog signature.
    pub secret_type: &'static str,
    /// The matched secret material.
    pub secret_value: String,
    /// The added source line, trimmed of surrounding whitespace.
    pub line_content: String,
}

/// Per-commit progress tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanProgress {
    /// One-based position of the commit being processed.
    pub current: usize,
    /// Total number of commits in this run.
    pub total_commits: usize,
    /// Whole-number completion percentage. Computed from the index before
    /// it advances, so the first commit of a run reports 0.
    pub percent: usize,
    /// Human-readable status line.
    pub message: String,
}

/// One event in a scan's ordered stream.
///
/// A run emits exactly one `Started`, then per commit one `Progress`
/// followed by all of that commit's `Finding` events, then exactly one
/// `Completed`. A run that fails mid-walk never emits `Completed`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanEvent {
    /// The commit count is known and traversal is about to begin.
    Started {
        /// Total number of commits the run will process.
        total_commits: usize,
    },
    /// A new commit is being processed.
    Progress(ScanProgress),
    /// A secret was found on one of the current commit's added lines.
    Finding(Finding),
    /// Every commit was processed without a fatal error.
    Completed,
}

/// Single-use orchestrator for one full history traversal.
///
/// Walks every commit reachable from `HEAD`, newest first, diffs each one
/// against its first parent (or the empty tree for root commits) and feeds
/// every added line to the scanner. Merge commits are diffed only against
/// their first parent, so lines reintroduced purely by a merge are not
/// re-flagged. Nothing is deduplicated across commits; every introduction
/// event is reported.
#[derive(Debug)]
pub struct HistoryScan<'a> {
    repo: &'a Repo,
    scanner: &'a LineScanner,
}

impl<'a> HistoryScan<'a> {
    /// Binds a repository and a scanner for one run.
    #[must_use]
    pub const fn new(repo: &'a Repo, scanner: &'a LineScanner) -> Self {
        Self { repo, scanner }
    }

    /// Runs the traversal, pushing every event into `sink` in order.
    ///
    /// Repository access failures abort the walk with
    /// [`ScanError::Traversal`]; events emitted before the failure have
    /// already reached the sink.
    pub fn run(&self, mut sink: impl FnMut(ScanEvent)) -> Result<(), ScanError> {
        let local = self.repo.local();
        let commits = local.collect_commits()?;
        let total = commits.len();

        #[cfg(feature = "tracing")]
        debug!(total, "starting history walk");

        sink(ScanEvent::Started { total_commits: total });

        for (index, oid) in commits.iter().enumerate() {
            let commit = local.commit_ref(*oid)?;
            sink(ScanEvent::Progress(progress_tick(index, total, &commit)));
            self.scan_commit(&local, *oid, &commit, &mut sink)?;
        }

        sink(ScanEvent::Completed);
        Ok(())
    }

    fn scan_commit(
        &self,
        local: &LocalRepo,
        oid: ObjectId,
        commit: &CommitRef,
        sink: &mut impl FnMut(ScanEvent),
    ) -> Result<(), ScanError> {
        let base = commit.parents.first().copied();

        for entry in local.commit_changes(oid, base)? {
            if entry.is_deleted || is_denylisted(&entry.path) {
                continue;
            }

            for line in entry.added_lines() {
                for matched in self.scanner.scan(line) {
                    sink(ScanEvent::Finding(Finding {
                        commit_hash: commit.hash.clone(),
                        author: commit.author_name.clone(),
                        date: commit.committed_at,
                        file_path: entry.path.clone(),
                        secret_type: matched.secret_type,
                        secret_value: matched.value,
                        line_content: line.trim().to_string(),
                    }));
                }
            }
        }

        Ok(())
    }
}

// The published position is one-based while `percent` derives from the
// zero-based index, so the first commit reads as 1 of N at 0%.
fn progress_tick(index: usize, total: usize, commit: &CommitRef) -> ScanProgress {
    let percent = if total == 0 { 0 } else { index * 100 / total };

    ScanProgress {
        current: index + 1,
        total_commits: total,
        percent,
        message: format!("Scanning {} by {}", commit.short_hash, commit.author_name),
    }
}

fn is_denylisted(path: &str) -> bool {
    PATH_DENYLIST.iter().any(|token| path.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(short_hash: &str, author: &str) -> CommitRef {
        CommitRef {
            hash: format!("{short_hash}0000000000000000000000000000000000"),
            short_hash: short_hash.to_string(),
            author_name: author.to_string(),
            committed_at: DateTime::default(),
            parents: Vec::new(),
        }
    }

    #[test]
    fn denylist_matches_exact_filenames() {
        assert!(is_denylisted("package-lock.json"));
        assert!(is_denylisted("yarn.lock"));
        assert!(is_denylisted("assets/logo.png"));
        assert!(!is_denylisted("src/main.rs"));
    }

    #[test]
    fn denylist_matches_mid_path_substrings() {
        assert!(is_denylisted("vendor/package-lock.json/notes.txt"));
        assert!(is_denylisted("docs/.png-handling.md"));
    }

    #[test]
    fn first_commit_reports_zero_percent() {
        let tick = progress_tick(0, 5, &commit("abc1234", "Alice"));
        assert_eq!(tick.percent, 0);
        assert_eq!(tick.total_commits, 5);
    }

    #[test]
    fn progress_position_is_one_based() {
        assert_eq!(progress_tick(0, 5, &commit("abc1234", "Alice")).current, 1);
        assert_eq!(progress_tick(4, 5, &commit("abc1234", "Alice")).current, 5);
    }

    #[test]
    fn percent_uses_pre_increment_index() {
        assert_eq!(progress_tick(1, 4, &commit("abc1234", "Alice")).percent, 25);
        assert_eq!(progress_tick(3, 4, &commit("abc1234", "Alice")).percent, 75);
        assert_eq!(progress_tick(1, 3, &commit("abc1234", "Alice")).percent, 33);
    }

    #[test]
    fn progress_message_names_commit_and_author() {
        let tick = progress_tick(0, 1, &commit("deadbee", "Bob"));
        assert_eq!(tick.message, "Scanning deadbee by Bob");
    }

    #[test]
    fn events_serialize_with_a_status_tag() {
        let json = serde_json::to_value(ScanEvent::Started { total_commits: 3 }).unwrap();
        assert_eq!(json["status"], "started");
        assert_eq!(json["total_commits"], 3);

        let json = serde_json::to_value(ScanEvent::Completed).unwrap();
        assert_eq!(json["status"], "completed");
    }
}
