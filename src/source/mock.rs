use crate::attribution::PathSpec;
use crate::domain::Commit;
use crate::error::{ModverError, Result};
use crate::source::CommitSource;
use std::collections::{HashMap, HashSet};

/// Mock commit source for testing without a git repository
///
/// Commits are registered per module path; paths can be marked as failing to
/// exercise the degrade-to-empty behavior of the calculator.
#[derive(Default)]
pub struct MockCommitSource {
    commits: HashMap<String, Vec<Commit>>,
    failing: HashSet<String>,
}

impl MockCommitSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a commit for the module at `path`
    pub fn add_commit(&mut self, path: impl Into<String>, message: &str) {
        let path = path.into();
        let entry = self.commits.entry(path).or_default();
        let hash = format!("{:07x}", entry.len() + 1);
        entry.push(Commit::parse(hash, message));
    }

    /// Make fetches for `path` fail
    pub fn fail_path(&mut self, path: impl Into<String>) {
        self.failing.insert(path.into());
    }
}

impl CommitSource for MockCommitSource {
    fn commits_for(&self, spec: &PathSpec) -> Result<Vec<Commit>> {
        if self.failing.contains(&spec.path) {
            return Err(ModverError::fetch(format!(
                "Mock failure for path '{}'",
                spec.path
            )));
        }
        Ok(self.commits.get(&spec.path).cloned().unwrap_or_default())
    }
}
