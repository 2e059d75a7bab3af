//! VCS collaborator for the git-insight pipeline.
//!
//! Wraps libgit2 behind the small surface the engine needs: discover the
//! repository (fatal when absent), walk history filtered by a message
//! substring up to a result cap, and fetch per-commit changed-file lists.
//! A commit whose file list cannot be computed yields an empty list with a
//! logged warning; it never aborts the batch.

use std::path::Path;

use chrono::{DateTime, FixedOffset, TimeZone};
use git2::{Commit, Repository};
use tracing::warn;

use crate::core::errors::{CodesightError, Result};

/// One commit as fetched from the repository, before summarization.
#[derive(Debug, Clone)]
pub struct RawCommit {
    /// Full commit hash
    pub hash: String,
    /// Author name
    pub author: String,
    /// Commit timestamp, RFC 3339
    pub date: String,
    /// Full commit message
    pub message: String,
    /// Paths changed by this commit (empty when file fetching is disabled)
    pub files_changed: Vec<String>,
}

/// Parameters for a history query.
#[derive(Debug, Clone)]
pub struct HistoryQuery {
    /// Substring the commit message must contain (empty matches all)
    pub grep: String,
    /// Maximum number of commits returned
    pub max_results: usize,
    /// Fetch the changed-file list for each matched commit
    pub include_files: bool,
}

/// Run a history query against the repository containing `repo_path`.
///
/// Returns commits in history order (newest first), capped at
/// `max_results`. Fails with `NotARepository` when no repository can be
/// discovered from the path.
pub fn query_history(repo_path: &Path, query: &HistoryQuery) -> Result<Vec<RawCommit>> {
    let repo = Repository::discover(repo_path)
        .map_err(|_| CodesightError::not_a_repository(repo_path.display().to_string()))?;

    let mut walker = repo
        .revwalk()
        .map_err(|e| CodesightError::git("Failed to walk repository history", e))?;

    if let Err(err) = walker.push_head() {
        // Unborn branch: an empty repository has history, just zero commits.
        warn!(error = %err, "Repository has no HEAD; returning empty history");
        return Ok(Vec::new());
    }

    let mut commits = Vec::new();

    for oid in walker {
        if commits.len() >= query.max_results {
            break;
        }

        let oid = match oid {
            Ok(oid) => oid,
            Err(err) => {
                warn!(error = %err, "Skipping unreadable history entry");
                continue;
            }
        };

        let commit = match repo.find_commit(oid) {
            Ok(commit) => commit,
            Err(err) => {
                warn!(%oid, error = %err, "Skipping unreadable commit");
                continue;
            }
        };

        let message = commit.message().unwrap_or_default().to_string();
        if !query.grep.is_empty() && !message.contains(&query.grep) {
            continue;
        }

        let files_changed = if query.include_files {
            commit_files(&repo, &commit)
        } else {
            Vec::new()
        };

        commits.push(RawCommit {
            hash: oid.to_string(),
            author: commit.author().name().unwrap_or_default().to_string(),
            date: to_datetime(commit.time()).to_rfc3339(),
            message,
            files_changed,
        });
    }

    Ok(commits)
}

/// Paths changed by a commit, from the diff against its first parent (or the
/// empty tree for a root commit). Failures are logged and yield an empty
/// list.
fn commit_files(repo: &Repository, commit: &Commit) -> Vec<String> {
    let result = (|| -> std::result::Result<Vec<String>, git2::Error> {
        let tree = commit.tree()?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None,
        };

        let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        Ok(diff
            .deltas()
            .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
            .map(|path| path.to_string_lossy().into_owned())
            .collect())
    })();

    match result {
        Ok(files) => files,
        Err(err) => {
            warn!(hash = %commit.id(), error = %err, "Could not get files for commit");
            Vec::new()
        }
    }
}

fn to_datetime(time: git2::Time) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
    offset
        .timestamp_opt(time.seconds(), 0)
        .single()
        .unwrap_or_else(|| offset.timestamp_opt(0, 0).single().expect("epoch is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_repository_paths_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let query = HistoryQuery {
            grep: String::new(),
            max_results: 10,
            include_files: true,
        };
        let err = query_history(dir.path(), &query).unwrap_err();
        match err {
            CodesightError::NotARepository { .. } => {}
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn empty_repository_yields_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let query = HistoryQuery {
            grep: String::new(),
            max_results: 10,
            include_files: true,
        };
        assert!(query_history(dir.path(), &query).unwrap().is_empty());
    }

    #[test]
    fn commits_are_fetched_with_files_and_filtered_by_grep() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        let sig = git2::Signature::now("dev", "dev@example.com").unwrap();
        std::fs::write(dir.path().join("app.js"), "const a = 1;\n").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("app.js")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "feat: add app", &tree, &[])
            .unwrap();

        let query = HistoryQuery {
            grep: String::new(),
            max_results: 10,
            include_files: true,
        };
        let commits = query_history(dir.path(), &query).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].author, "dev");
        assert_eq!(commits[0].files_changed, vec!["app.js".to_string()]);
        assert!(commits[0].message.starts_with("feat: add app"));

        let query = HistoryQuery {
            grep: "nothing matches this".to_string(),
            max_results: 10,
            include_files: true,
        };
        assert!(query_history(dir.path(), &query).unwrap().is_empty());
    }
}
