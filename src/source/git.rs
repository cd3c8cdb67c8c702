use crate::attribution::PathSpec;
use crate::domain::Commit;
use crate::error::Result;
use crate::source::CommitSource;
use git2::{Oid, Repository};
use std::path::Path;

/// Commit source backed by a real git repository via the `git2` crate
///
/// Walks history from HEAD (optionally bounded below by a `since` commit,
/// e.g. the previous release) and attributes each commit by diffing it
/// against its first parent and checking the changed paths against the
/// module's path spec.
pub struct GitCommitSource {
    repo: Repository,
    since: Option<Oid>,
}

impl GitCommitSource {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitCommitSource { repo, since: None })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        GitCommitSource { repo, since: None }
    }

    /// Bound the walk below by a commit (exclusive), e.g. the last release
    pub fn since(mut self, oid: Oid) -> Self {
        self.since = Some(oid);
        self
    }

    /// Short hash of HEAD, used for build metadata stamping
    pub fn head_short_hash(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;
        let full = head.id().to_string();
        Ok(full[..7.min(full.len())].to_string())
    }

    /// Whether a commit changed any file belonging to the spec
    fn touches(&self, commit: &git2::Commit, spec: &PathSpec) -> Result<bool> {
        let tree = commit.tree()?;
        // First-parent diff; the root commit diffs against the empty tree
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None,
        };

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        for delta in diff.deltas() {
            let changed = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path());
            if let Some(path) = changed.and_then(|p| p.to_str()) {
                if spec.contains(path) {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}

impl CommitSource for GitCommitSource {
    fn commits_for(&self, spec: &PathSpec) -> Result<Vec<Commit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;

            if Some(oid) == self.since {
                break;
            }

            let commit = self.repo.find_commit(oid)?;

            // Merge commits carry no attributable change of their own
            if commit.parent_count() > 1 {
                continue;
            }

            if self.touches(&commit, spec)? {
                let message = commit.message().unwrap_or("(empty message)");
                let short = oid.to_string()[..7].to_string();
                commits.push(Commit::parse(short, message));
            }
        }

        commits.reverse();
        Ok(commits)
    }
}

// SAFETY: GitCommitSource wraps git2::Repository which is Send + Sync.
// git2 is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for GitCommitSource {}
